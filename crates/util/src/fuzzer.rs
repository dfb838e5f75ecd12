use rand::seq::SliceRandom;
use rand::{rngs::OsRng, Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use serde_json::{Map, Number, Value};

/// Shape limits for randomly generated JSON trees.
#[derive(Debug, Clone)]
pub struct TreeOptions {
    /// Maximum nesting depth below the root.
    pub max_depth: usize,
    /// Maximum number of children per array or object.
    pub max_width: usize,
    /// Characters used for object keys.
    pub key_chars: String,
    /// Characters used for string values.
    pub string_chars: String,
    /// Probability that a number is generated as a float rather than an integer.
    pub float_ratio: f64,
}

impl Default for TreeOptions {
    fn default() -> Self {
        Self {
            max_depth: 4,
            max_width: 4,
            key_chars: "abcde".to_owned(),
            string_chars: "xyz1".to_owned(),
            float_ratio: 0.2,
        }
    }
}

/// A seeded source of random test data.
///
/// Uses the xoshiro256** PRNG so a failing run can be replayed from its
/// [`seed`](Fuzzer::seed).
///
/// # Examples
///
/// ```
/// use json_dedupe_util::fuzzer::{Fuzzer, TreeOptions};
///
/// let mut a = Fuzzer::new(Some([7u8; 32]));
/// let mut b = Fuzzer::new(Some([7u8; 32]));
/// let opts = TreeOptions::default();
/// assert_eq!(a.random_record(&opts), b.random_record(&opts));
/// ```
pub struct Fuzzer {
    /// The seed used to initialize the PRNG.
    pub seed: [u8; 32],
    rng: Xoshiro256StarStar,
}

impl Fuzzer {
    /// Create a fuzzer, drawing a seed from `OsRng` when none is given.
    pub fn new(seed: Option<[u8; 32]>) -> Self {
        let seed = seed.unwrap_or_else(|| {
            let mut bytes = [0u8; 32];
            OsRng.fill_bytes(&mut bytes);
            bytes
        });
        Self {
            seed,
            rng: Xoshiro256StarStar::from_seed(seed),
        }
    }

    /// Random integer in `[min, max]`.
    pub fn random_int(&mut self, min: i64, max: i64) -> i64 {
        self.rng.gen_range(min..=max)
    }

    /// `true` with the given probability.
    pub fn random_bool(&mut self, probability: f64) -> bool {
        self.rng.gen_bool(probability)
    }

    /// Random string of `len` characters drawn from `chars`.
    pub fn random_string(&mut self, len: usize, chars: &str) -> String {
        let chars: Vec<char> = chars.chars().collect();
        if chars.is_empty() {
            return String::new();
        }
        (0..len)
            .map(|_| chars[self.rng.gen_range(0..chars.len())])
            .collect()
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }

    /// Random scalar: null, boolean, integer, float or string.
    pub fn random_scalar(&mut self, opts: &TreeOptions) -> Value {
        match self.rng.gen_range(0..4) {
            0 => Value::Null,
            1 => Value::Bool(self.rng.gen()),
            2 => self.random_number(opts),
            _ => {
                let len = self.rng.gen_range(0..4);
                Value::String(self.random_string(len, &opts.string_chars))
            }
        }
    }

    fn random_number(&mut self, opts: &TreeOptions) -> Value {
        let n = self.random_int(-3, 3);
        if self.random_bool(opts.float_ratio) {
            // Half-steps plus the occasional integral float (1.0 next to 1).
            let f = if self.rng.gen() { n as f64 + 0.5 } else { n as f64 };
            Number::from_f64(f).map_or(Value::Null, Value::Number)
        } else {
            Value::from(n)
        }
    }

    /// Random JSON tree no deeper than `opts.max_depth`.
    pub fn random_json(&mut self, opts: &TreeOptions) -> Value {
        self.random_node(opts, opts.max_depth)
    }

    /// Random JSON object, the shape of a deduplication record.
    pub fn random_record(&mut self, opts: &TreeOptions) -> Value {
        self.random_object(opts, opts.max_depth)
    }

    fn random_node(&mut self, opts: &TreeOptions, depth: usize) -> Value {
        if depth == 0 {
            return self.random_scalar(opts);
        }
        match self.rng.gen_range(0..5) {
            0 => self.random_object(opts, depth),
            1 => self.random_array(opts, depth),
            2 => {
                // Pure primitive array: order-sensitive.
                let len = self.rng.gen_range(0..=opts.max_width);
                Value::Array((0..len).map(|_| self.random_scalar(opts)).collect())
            }
            _ => self.random_scalar(opts),
        }
    }

    fn random_object(&mut self, opts: &TreeOptions, depth: usize) -> Value {
        let len = self.rng.gen_range(0..=opts.max_width);
        let mut map = Map::new();
        for _ in 0..len {
            let key_len = self.rng.gen_range(1..3);
            let key = self.random_string(key_len, &opts.key_chars);
            let value = self.random_node(opts, depth.saturating_sub(1));
            map.insert(key, value);
        }
        Value::Object(map)
    }

    fn random_array(&mut self, opts: &TreeOptions, depth: usize) -> Value {
        let len = self.rng.gen_range(0..=opts.max_width);
        Value::Array(
            (0..len)
                .map(|_| self.random_node(opts, depth.saturating_sub(1)))
                .collect(),
        )
    }

    /// Copy of `value` with every order-insensitive collection reordered.
    ///
    /// Object keys are reinserted in shuffled order and arrays holding at
    /// least one array or object are shuffled. Arrays of scalars keep their
    /// order. The result is structurally equivalent to the input.
    pub fn shuffle_unordered(&mut self, value: &Value) -> Value {
        match value {
            Value::Object(map) => {
                let mut entries: Vec<(String, Value)> = map
                    .iter()
                    .map(|(k, v)| (k.clone(), self.shuffle_unordered(v)))
                    .collect();
                self.shuffle(&mut entries);
                Value::Object(entries.into_iter().collect())
            }
            Value::Array(items) => {
                let mut items: Vec<Value> =
                    items.iter().map(|v| self.shuffle_unordered(v)).collect();
                if items.iter().any(|v| v.is_array() || v.is_object()) {
                    self.shuffle(&mut items);
                }
                Value::Array(items)
            }
            other => other.clone(),
        }
    }
}
