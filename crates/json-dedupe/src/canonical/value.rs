use serde_json::{Map, Number, Value};

/// A scalar JSON value: it is its own canonical form.
///
/// Equality and ordering are defined in `order.rs`: numbers compare by
/// exact value and keep their integer/float kind, so `1` and `1.0` are
/// different primitives.
#[derive(Debug, Clone)]
pub enum Primitive {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
}

impl Primitive {
    /// The scalar held by `value`, or `None` for arrays and objects.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Null => Some(Primitive::Null),
            Value::Bool(b) => Some(Primitive::Bool(*b)),
            Value::Number(n) => Some(Primitive::Number(n.clone())),
            Value::String(s) => Some(Primitive::String(s.clone())),
            Value::Array(_) | Value::Object(_) => None,
        }
    }

    pub fn to_value(&self) -> Value {
        match self {
            Primitive::Null => Value::Null,
            Primitive::Bool(b) => Value::Bool(*b),
            Primitive::Number(n) => Value::Number(n.clone()),
            Primitive::String(s) => Value::String(s.clone()),
        }
    }
}

/// Order-normalized form of a JSON value.
///
/// The variant order is the sort rank used between kinds:
/// primitives sort before objects, objects before arrays. Within a kind the
/// derived comparison is lexicographic over the contents, which are already
/// sorted, so the order is total and agrees with structural equality.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum CanonicalValue {
    Primitive(Primitive),
    /// Entries sorted by key (byte order of the UTF-8 key).
    Object(Vec<(String, CanonicalValue)>),
    /// Elements in source order for pure primitive arrays, sorted otherwise.
    Array(Vec<CanonicalValue>),
}

impl CanonicalValue {
    pub fn is_primitive(&self) -> bool {
        matches!(self, CanonicalValue::Primitive(_))
    }

    /// Render the canonical form as a JSON value: object keys in sorted
    /// order, array elements in canonical order.
    pub fn to_value(&self) -> Value {
        match self {
            CanonicalValue::Primitive(p) => p.to_value(),
            CanonicalValue::Object(entries) => {
                let mut map = Map::with_capacity(entries.len());
                for (key, value) in entries {
                    map.insert(key.clone(), value.to_value());
                }
                Value::Object(map)
            }
            CanonicalValue::Array(items) => {
                Value::Array(items.iter().map(CanonicalValue::to_value).collect())
            }
        }
    }
}

impl From<Primitive> for CanonicalValue {
    fn from(p: Primitive) -> Self {
        CanonicalValue::Primitive(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_value_classifies_scalars() {
        assert!(matches!(Primitive::from_value(&json!(null)), Some(Primitive::Null)));
        assert!(matches!(
            Primitive::from_value(&json!(true)),
            Some(Primitive::Bool(true))
        ));
        assert!(matches!(
            Primitive::from_value(&json!("s")),
            Some(Primitive::String(ref s)) if s == "s"
        ));
        assert!(Primitive::from_value(&json!(1.5)).is_some());
        assert!(Primitive::from_value(&json!([])).is_none());
        assert!(Primitive::from_value(&json!({})).is_none());
    }

    #[test]
    fn primitive_round_trips_to_value() {
        for v in [json!(null), json!(false), json!(-3), json!(2.5), json!("x")] {
            let p = Primitive::from_value(&v).unwrap();
            assert_eq!(p.to_value(), v);
        }
    }

    #[test]
    fn to_value_emits_sorted_keys() {
        let value = CanonicalValue::Object(vec![
            ("a".to_owned(), Primitive::Number(1.into()).into()),
            ("b".to_owned(), CanonicalValue::Array(vec![])),
        ]);
        let rendered = value.to_value();
        assert_eq!(rendered, json!({"a": 1, "b": []}));
        let keys: Vec<&String> = rendered.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["a", "b"]);
    }
}
