use json_dedupe::{deduplicate, deduplicate_with, equivalent, DedupeOptions};
use serde_json::{json, Value};

fn dedupe(records: Vec<Value>) -> Vec<Value> {
    deduplicate(&records).expect("records are objects")
}

#[test]
fn no_overlap_keeps_everything() {
    let input = vec![
        json!({"Name": "John", "Age": 40}),
        json!({"Name": "Nancy", "Age": 60}),
    ];
    assert_eq!(dedupe(input.clone()), input);
}

#[test]
fn reordered_keys_are_duplicates() {
    let input = vec![
        json!({"Name": "John", "Age": 40}),
        json!({"Age": 40, "Name": "John"}),
        json!({"Name": "Nancy", "Age": 60}),
    ];
    let out = dedupe(input.clone());
    assert_eq!(out, vec![input[0].clone(), input[2].clone()]);
}

#[test]
fn overlap_after_other_record() {
    let input = vec![
        json!({"Name": "John", "Age": 40}),
        json!({"Name": "Nancy", "Age": 60}),
        json!({"Age": 40, "Name": "John"}),
    ];
    assert_eq!(dedupe(input.clone()), input[..2].to_vec());
}

#[test]
fn nested_structures_collapse_to_one() {
    let input = vec![
        json!({"a": [{"x": 1}, {"y": 2}], "b": [0, 1]}),
        json!({"b": [0, 1], "a": [{"y": 2}, {"x": 1}]}),
        json!({"a": [{"x": 1}, {"y": 2}], "b": [0, 1]}),
    ];
    let out = dedupe(input.clone());
    assert_eq!(out, vec![input[0].clone()]);
}

#[test]
fn primitive_list_order_matters() {
    let input = vec![
        json!({"nums": [1, 0, 1]}),
        json!({"nums": [0, 1, 1]}),
        json!({"nums": [1, 0, 1]}),
    ];
    let out = dedupe(input.clone());
    assert_eq!(out, vec![input[0].clone(), input[1].clone()]);
}

#[test]
fn empty_structures() {
    let input = vec![
        json!({"empty_list": [], "empty_dict": {}}),
        json!({"empty_dict": {}, "empty_list": []}),
        json!({"empty_list": [], "empty_dict": {}}),
        json!({"a": []}),
        json!({"a": []}),
    ];
    let out = dedupe(input.clone());
    assert_eq!(out, vec![input[0].clone(), input[3].clone()]);
}

#[test]
fn empty_list_and_empty_dict_differ() {
    let input = vec![json!({"a": []}), json!({"a": {}}), json!({"a": []})];
    assert_eq!(dedupe(input).len(), 2);
}

#[test]
fn mixed_scalar_types() {
    let input = vec![
        json!({"a": 1, "b": "string", "c": true, "d": 1.5}),
        json!({"b": "string", "a": 1, "d": 1.5, "c": true}),
        json!({"a": 1, "b": "string", "c": true, "d": 1.5}),
    ];
    assert_eq!(dedupe(input).len(), 1);
}

#[test]
fn no_semantic_coercion() {
    let input = vec![
        json!({"v": 1}),
        json!({"v": 1.0}),
        json!({"v": "1"}),
        json!({"v": true}),
        json!({"v": null}),
        json!({}),
    ];
    assert_eq!(dedupe(input.clone()), input);
}

#[test]
fn deeply_nested_unordered_parts() {
    let a = json!({
        "users": [
            {"name": "a", "tags": ["x", "y"], "roles": [{"r": 1}, {"r": 2}]},
            {"name": "b", "tags": [], "roles": []}
        ],
        "meta": {"v": [1, 2, 3]}
    });
    let b = json!({
        "meta": {"v": [1, 2, 3]},
        "users": [
            {"roles": [], "tags": [], "name": "b"},
            {"roles": [{"r": 2}, {"r": 1}], "name": "a", "tags": ["x", "y"]}
        ]
    });
    let c = json!({
        "meta": {"v": [1, 2, 3]},
        "users": [
            {"roles": [], "tags": [], "name": "b"},
            {"roles": [{"r": 2}, {"r": 1}], "name": "a", "tags": ["y", "x"]}
        ]
    });
    assert!(equivalent(&a, &b));
    assert!(!equivalent(&a, &c));
    assert_eq!(dedupe(vec![a.clone(), b, c.clone()]), vec![a, c]);
}

#[test]
fn report_counts_duplicates() {
    let input = vec![
        json!({"k": [1, 2]}),
        json!({"k": [1, 2]}),
        json!({"k": [2, 1]}),
        json!({"k": [1, 2]}),
    ];
    let report = deduplicate_with(&input, &DedupeOptions::default()).unwrap();
    assert_eq!(report.kept, vec![0, 2]);
    assert_eq!(report.duplicates, 2);
    assert!(report.skipped.is_empty());
}
