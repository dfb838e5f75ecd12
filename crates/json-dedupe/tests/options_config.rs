use json_dedupe::{deduplicate_with, DedupeError, DedupeOptions, InvalidRecordPolicy};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
struct AppConfig {
    name: String,
    dedupe: DedupeOptions,
}

#[test]
fn options_load_from_toml_table() {
    let config: AppConfig = toml::from_str(
        r#"
        name = "ingest"

        [dedupe]
        invalid_records = "skip"
        max_depth = 8
        "#,
    )
    .expect("config parses");
    assert_eq!(config.name, "ingest");
    assert_eq!(config.dedupe.invalid_records, InvalidRecordPolicy::Skip);
    assert_eq!(config.dedupe.max_depth, Some(8));
    assert!(config.dedupe.require_objects);
}

#[test]
fn empty_table_uses_defaults() {
    let config: AppConfig = toml::from_str("name = \"x\"\n[dedupe]\n").expect("config parses");
    assert_eq!(config.dedupe, DedupeOptions::default());
}

#[test]
fn options_round_trip_through_toml() {
    let opts = DedupeOptions::default()
        .with_policy(InvalidRecordPolicy::Skip)
        .allow_any_value();
    let text = toml::to_string(&opts).expect("serializes");
    let back: DedupeOptions = toml::from_str(&text).expect("parses");
    assert_eq!(back, opts);
}

#[test]
fn unknown_policy_is_rejected() {
    let err = toml::from_str::<DedupeOptions>("invalid_records = \"ignore\"");
    assert!(err.is_err());
}

#[test]
fn loaded_policy_drives_deduplication() {
    let opts: DedupeOptions =
        toml::from_str("invalid_records = \"abort\"").expect("config parses");
    let records = vec![json!({"a": 1}), json!(42)];
    assert_eq!(
        deduplicate_with(&records, &opts),
        Err(DedupeError::InvalidValueKind {
            index: 1,
            found: "number"
        })
    );
}
