//! Deduplication settings.

use serde::{Deserialize, Serialize};

/// What `deduplicate_with` does with a record it cannot canonicalize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidRecordPolicy {
    /// Stop at the first invalid record and return its error. No partial
    /// output is produced.
    #[default]
    Abort,
    /// Leave the record out of the output and list it in
    /// [`DedupeReport::skipped`](crate::DedupeReport::skipped).
    Skip,
}

/// Settings for [`crate::deduplicate_with`] and [`crate::Deduplicator`].
///
/// Every field has a default, so a partial table deserializes:
///
/// ```
/// use json_dedupe::{DedupeOptions, InvalidRecordPolicy};
///
/// let opts: DedupeOptions = serde_json::from_str(r#"{"invalid_records": "skip"}"#).unwrap();
/// assert_eq!(opts.invalid_records, InvalidRecordPolicy::Skip);
/// assert!(opts.require_objects);
/// assert_eq!(opts.max_depth, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DedupeOptions {
    pub invalid_records: InvalidRecordPolicy,
    /// Reject records that are not JSON objects.
    pub require_objects: bool,
    /// Maximum array/object nesting per record. `None` means unbounded.
    pub max_depth: Option<usize>,
}

impl Default for DedupeOptions {
    fn default() -> Self {
        Self {
            invalid_records: InvalidRecordPolicy::Abort,
            require_objects: true,
            max_depth: None,
        }
    }
}

impl DedupeOptions {
    pub fn with_policy(mut self, policy: InvalidRecordPolicy) -> Self {
        self.invalid_records = policy;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Accept any JSON value as a record, not only objects.
    pub fn allow_any_value(mut self) -> Self {
        self.require_objects = false;
        self
    }
}
