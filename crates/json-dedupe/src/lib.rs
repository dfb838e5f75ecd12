//! json-dedupe — order-aware structural deduplication of JSON records.
//!
//! Two records are duplicates when they are structurally equivalent:
//!
//! - arrays whose elements are all scalars (null, booleans, numbers,
//!   strings) compare positionally, order matters;
//! - objects, and arrays holding at least one object or array, compare as
//!   unordered collections of their normalized children.
//!
//! [`canonicalize`] maps a [`serde_json::Value`] to a [`CanonicalValue`] in
//! which every unordered collection is sorted under an explicit total order.
//! [`CanonicalValue::key`] serializes that form into a tagged, prefix-free
//! [`CanonicalKey`], and [`deduplicate`] keeps the first record for each
//! distinct key, in input order.
//!
//! ```
//! use serde_json::json;
//!
//! let records = vec![
//!     json!({"Name": "John", "Age": 40}),
//!     json!({"Age": 40, "Name": "John"}),
//!     json!({"Name": "Nancy", "Age": 60}),
//! ];
//! let unique = json_dedupe::deduplicate(&records).unwrap();
//! assert_eq!(unique, vec![records[0].clone(), records[2].clone()]);
//! ```

pub mod canonical;
pub mod dedupe;
pub mod error;
pub mod options;

pub use canonical::{
    canonical_key, canonicalize, canonicalize_with_depth, equivalent, is_pure_primitive,
    CanonicalKey, CanonicalValue, Primitive,
};
pub use dedupe::{
    dedupe_indices, deduplicate, deduplicate_with, DedupeReport, Deduplicator, SkippedRecord,
};
pub use error::{DedupeError, DepthLimitExceeded};
pub use options::{DedupeOptions, InvalidRecordPolicy};
