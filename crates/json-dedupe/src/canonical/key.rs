//! Canonical key serialization.
//!
//! Every form is self-delimiting, so the concatenation used for objects
//! and arrays cannot make two different canonical values collide:
//!
//! | form          | encoding                          |
//! |---------------|-----------------------------------|
//! | null          | `N`                               |
//! | true / false  | `T` / `F`                         |
//! | integer       | `i` decimal `;`                   |
//! | float         | `f` shortest round-trip decimal `;` |
//! | string        | `"` escaped `"`                   |
//! | object        | `{` (`"`key`":` value)* `}`       |
//! | array         | `[` value* `]`                    |

use std::fmt::{self, Write};

use json_dedupe_util::escape_into;
use serde_json::Number;

use super::value::{CanonicalValue, Primitive};

/// Serialized canonical form, used as a set key during deduplication.
///
/// Two values have equal keys exactly when their canonical forms are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalKey(String);

impl CanonicalKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl CanonicalValue {
    /// Serialize into a [`CanonicalKey`].
    pub fn key(&self) -> CanonicalKey {
        let mut out = String::new();
        write_value(&mut out, self);
        CanonicalKey(out)
    }
}

fn write_value(out: &mut String, value: &CanonicalValue) {
    match value {
        CanonicalValue::Primitive(p) => write_primitive(out, p),
        CanonicalValue::Object(entries) => {
            out.push('{');
            for (key, value) in entries {
                write_str(out, key);
                out.push(':');
                write_value(out, value);
            }
            out.push('}');
        }
        CanonicalValue::Array(items) => {
            out.push('[');
            for item in items {
                write_value(out, item);
            }
            out.push(']');
        }
    }
}

fn write_primitive(out: &mut String, p: &Primitive) {
    match p {
        Primitive::Null => out.push('N'),
        Primitive::Bool(true) => out.push('T'),
        Primitive::Bool(false) => out.push('F'),
        Primitive::Number(n) => write_number(out, n),
        Primitive::String(s) => write_str(out, s),
    }
}

fn write_number(out: &mut String, n: &Number) {
    out.push(if n.is_f64() { 'f' } else { 'i' });
    // Floats print via ryu: shortest digits that round-trip, e.g. `1.0`, `-0.0`, `1e300`.
    let _ = write!(out, "{n}");
    out.push(';');
}

fn write_str(out: &mut String, s: &str) {
    out.push('"');
    escape_into(out, s);
    out.push('"');
}
