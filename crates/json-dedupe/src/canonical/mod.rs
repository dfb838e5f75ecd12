//! Canonicalization of JSON values.
//!
//! - Scalars are their own canonical form.
//! - Objects become their entries sorted by key, each value canonicalized.
//! - Arrays whose elements are all scalars keep their order; any other
//!   array has its elements canonicalized and then sorted.
//!
//! The result is independent of object insertion order in the source map.

mod key;
mod order;
mod value;

pub use key::CanonicalKey;
pub use order::cmp_numbers;
pub use value::{CanonicalValue, Primitive};

use json_dedupe_util::insertion_sort_by;
use serde_json::Value;

use crate::error::DepthLimitExceeded;

/// Objects up to this many entries are sorted with insertion sort.
const SMALL_OBJECT: usize = 16;

/// `true` when no element is an array or object. Vacuously true for `[]`.
pub fn is_pure_primitive(items: &[Value]) -> bool {
    items.iter().all(|v| !v.is_array() && !v.is_object())
}

/// Map `value` to its canonical form.
///
/// ```
/// use json_dedupe::canonicalize;
/// use serde_json::json;
///
/// let a = canonicalize(&json!({"a": [{"x": 1}, {"y": 2}], "b": [0, 1]}));
/// let b = canonicalize(&json!({"b": [0, 1], "a": [{"y": 2}, {"x": 1}]}));
/// assert_eq!(a, b);
///
/// assert_ne!(canonicalize(&json!([1, 0])), canonicalize(&json!([0, 1])));
/// ```
pub fn canonicalize(value: &Value) -> CanonicalValue {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, CanonicalValue)> = map
                .iter()
                .map(|(k, v)| (k.clone(), canonicalize(v)))
                .collect();
            // Keys are unique, so the comparison never ties.
            if entries.len() <= SMALL_OBJECT {
                insertion_sort_by(&mut entries, |a, b| a.0.cmp(&b.0));
            } else {
                entries.sort_unstable_by(|a, b| a.0.cmp(&b.0));
            }
            CanonicalValue::Object(entries)
        }
        Value::Array(items) => {
            let mut elements: Vec<CanonicalValue> = items.iter().map(canonicalize).collect();
            if !is_pure_primitive(items) {
                elements.sort();
            }
            CanonicalValue::Array(elements)
        }
        Value::Null => Primitive::Null.into(),
        Value::Bool(b) => Primitive::Bool(*b).into(),
        Value::Number(n) => Primitive::Number(n.clone()).into(),
        Value::String(s) => Primitive::String(s.clone()).into(),
    }
}

/// [`canonicalize`], refusing values nested deeper than `max_depth`
/// arrays/objects. A scalar has depth 0, `{}` and `[]` have depth 1.
pub fn canonicalize_with_depth(
    value: &Value,
    max_depth: usize,
) -> Result<CanonicalValue, DepthLimitExceeded> {
    if exceeds_depth(value, max_depth) {
        return Err(DepthLimitExceeded { max_depth });
    }
    Ok(canonicalize(value))
}

/// Stops descending once the budget is spent, so the check itself never
/// recurses further than `budget + 1` frames.
fn exceeds_depth(value: &Value, budget: usize) -> bool {
    let rest = match value {
        Value::Array(_) | Value::Object(_) => match budget.checked_sub(1) {
            Some(rest) => rest,
            None => return true,
        },
        _ => return false,
    };
    match value {
        Value::Array(items) => items.iter().any(|child| exceeds_depth(child, rest)),
        Value::Object(map) => map.values().any(|child| exceeds_depth(child, rest)),
        _ => false,
    }
}

/// Canonical key of `value`; shorthand for `canonicalize(value).key()`.
pub fn canonical_key(value: &Value) -> CanonicalKey {
    canonicalize(value).key()
}

/// `true` when `a` and `b` are structurally equivalent.
pub fn equivalent(a: &Value, b: &Value) -> bool {
    canonicalize(a) == canonicalize(b)
}
