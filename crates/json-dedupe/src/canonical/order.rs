//! Total order over primitives.
//!
//! Ranks: null < boolean < number < string. Booleans: `false < true`.
//! Strings: byte order. Numbers: exact mathematical value; when an integer
//! and a float have the same value the integer sorts first, and floats of
//! equal value (`-0.0`, `0.0`) fall back to the IEEE-754 total order.
//! Integers and floats are compared without a lossy cast, so the order
//! stays transitive for values beyond 2^53.

use std::cmp::Ordering;

use serde_json::Number;

use super::value::Primitive;

#[derive(Debug, Clone, Copy)]
enum NumberRepr {
    Int(i128),
    Float(f64),
}

impl NumberRepr {
    fn of(n: &Number) -> Self {
        if let Some(i) = n.as_i64() {
            NumberRepr::Int(i128::from(i))
        } else if let Some(u) = n.as_u64() {
            NumberRepr::Int(i128::from(u))
        } else {
            // Without `arbitrary_precision` every non-integer Number is a finite f64.
            NumberRepr::Float(n.as_f64().unwrap_or(f64::NAN))
        }
    }
}

/// Compare an integer with a finite float by exact value.
///
/// Returns `Less` when the values are equal (integers first).
fn cmp_int_float(i: i128, f: f64) -> Ordering {
    if f.fract() == 0.0 {
        // 2^127 is exactly representable; anything below it fits in i128.
        const LIMIT: f64 = 170_141_183_460_469_231_731_687_303_715_884_105_728.0;
        if f >= -LIMIT && f < LIMIT {
            i.cmp(&(f as i128)).then(Ordering::Less)
        } else if f > 0.0 {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    } else {
        // A non-integral f64 has magnitude below 2^52, so the rounding of
        // `i as f64` never crosses it and equality is impossible.
        (i as f64).partial_cmp(&f).unwrap_or(Ordering::Less)
    }
}

/// Total order over JSON numbers.
pub fn cmp_numbers(a: &Number, b: &Number) -> Ordering {
    match (NumberRepr::of(a), NumberRepr::of(b)) {
        (NumberRepr::Int(x), NumberRepr::Int(y)) => x.cmp(&y),
        (NumberRepr::Float(x), NumberRepr::Float(y)) => x.total_cmp(&y),
        (NumberRepr::Int(x), NumberRepr::Float(y)) => cmp_int_float(x, y),
        (NumberRepr::Float(x), NumberRepr::Int(y)) => cmp_int_float(y, x).reverse(),
    }
}

impl Primitive {
    fn rank(&self) -> u8 {
        match self {
            Primitive::Null => 0,
            Primitive::Bool(_) => 1,
            Primitive::Number(_) => 2,
            Primitive::String(_) => 3,
        }
    }
}

impl Ord for Primitive {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Primitive::Null, Primitive::Null) => Ordering::Equal,
            (Primitive::Bool(a), Primitive::Bool(b)) => a.cmp(b),
            (Primitive::Number(a), Primitive::Number(b)) => cmp_numbers(a, b),
            (Primitive::String(a), Primitive::String(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for Primitive {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Primitive {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Primitive {}
