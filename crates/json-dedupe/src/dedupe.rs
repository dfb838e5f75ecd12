//! First-occurrence deduplication of JSON records.

use std::collections::HashSet;

use serde_json::Value;

use crate::canonical::{canonicalize, canonicalize_with_depth, CanonicalKey};
use crate::error::DedupeError;
use crate::options::{DedupeOptions, InvalidRecordPolicy};

/// A record left out of the output under [`InvalidRecordPolicy::Skip`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    pub index: usize,
    pub error: DedupeError,
}

/// Outcome of [`deduplicate_with`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DedupeReport {
    /// First occurrences, unmodified, in input order.
    pub records: Vec<Value>,
    /// Input positions of `records`.
    pub kept: Vec<usize>,
    /// Number of records dropped as duplicates.
    pub duplicates: usize,
    /// Invalid records, only populated under [`InvalidRecordPolicy::Skip`].
    pub skipped: Vec<SkippedRecord>,
}

/// Incremental deduplicator.
///
/// Holds the set of canonical keys seen so far; each [`push`](Self::push)
/// reports whether the record is the first of its equivalence class.
/// Invalid records are always returned as errors here, the
/// [`InvalidRecordPolicy`] is applied by [`deduplicate_with`].
///
/// ```
/// use json_dedupe::Deduplicator;
/// use serde_json::json;
///
/// let mut dedup = Deduplicator::new();
/// assert!(dedup.push(&json!({"a": [{"x": 1}, {"y": 2}]})).unwrap());
/// assert!(!dedup.push(&json!({"a": [{"y": 2}, {"x": 1}]})).unwrap());
/// assert_eq!(dedup.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Deduplicator {
    options: DedupeOptions,
    seen: HashSet<CanonicalKey>,
    position: usize,
}

impl Deduplicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: DedupeOptions) -> Self {
        Self {
            options,
            seen: HashSet::new(),
            position: 0,
        }
    }

    pub fn options(&self) -> &DedupeOptions {
        &self.options
    }

    /// Canonical key of `record`, validated against the options.
    ///
    /// `index` is only used to label errors.
    pub fn key_for(&self, index: usize, record: &Value) -> Result<CanonicalKey, DedupeError> {
        if self.options.require_objects && !record.is_object() {
            return Err(DedupeError::InvalidValueKind {
                index,
                found: kind_name(record),
            });
        }
        let canonical = match self.options.max_depth {
            Some(max_depth) => canonicalize_with_depth(record, max_depth)
                .map_err(|err| DedupeError::depth(index, err))?,
            None => canonicalize(record),
        };
        Ok(canonical.key())
    }

    /// Register the next record. Returns `true` for a first occurrence,
    /// `false` for a duplicate of an earlier record.
    ///
    /// Invalid records still advance the position used for error indices.
    pub fn push(&mut self, record: &Value) -> Result<bool, DedupeError> {
        let index = self.position;
        self.position += 1;
        let key = self.key_for(index, record)?;
        Ok(self.seen.insert(key))
    }

    /// `true` if a record equivalent to `record` has been pushed.
    pub fn contains(&self, record: &Value) -> bool {
        self.seen.contains(&canonicalize(record).key())
    }

    /// Number of distinct records seen.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    /// Forget every seen record and reset the position.
    pub fn clear(&mut self) {
        self.seen.clear();
        self.position = 0;
    }
}

/// Keep the first record of every equivalence class, in input order.
///
/// Records must be JSON objects; the first one that is not aborts the
/// call with [`DedupeError::InvalidValueKind`].
pub fn deduplicate(records: &[Value]) -> Result<Vec<Value>, DedupeError> {
    Ok(deduplicate_with(records, &DedupeOptions::default())?.records)
}

/// Input positions of the first record of every equivalence class.
pub fn dedupe_indices(records: &[Value]) -> Result<Vec<usize>, DedupeError> {
    Ok(scan(records, &DedupeOptions::default())?.kept)
}

/// [`deduplicate`] with explicit options, reporting what was dropped.
pub fn deduplicate_with(
    records: &[Value],
    options: &DedupeOptions,
) -> Result<DedupeReport, DedupeError> {
    let mut report = scan(records, options)?;
    report.records = report.kept.iter().map(|&i| records[i].clone()).collect();
    tracing::debug!(
        input = records.len(),
        kept = report.kept.len(),
        duplicates = report.duplicates,
        skipped = report.skipped.len(),
        "deduplicated records"
    );
    Ok(report)
}

/// Single pass over `records`; fills everything but `records` in the report.
fn scan(records: &[Value], options: &DedupeOptions) -> Result<DedupeReport, DedupeError> {
    let mut dedup = Deduplicator::with_options(options.clone());
    let mut report = DedupeReport::default();
    for (index, record) in records.iter().enumerate() {
        match dedup.push(record) {
            Ok(true) => report.kept.push(index),
            Ok(false) => {
                tracing::trace!(index, "dropping duplicate record");
                report.duplicates += 1;
            }
            Err(error) => match options.invalid_records {
                InvalidRecordPolicy::Abort => return Err(error),
                InvalidRecordPolicy::Skip => {
                    tracing::warn!(index, error = %error, "skipping invalid record");
                    report.skipped.push(SkippedRecord { index, error });
                }
            },
        }
    }
    Ok(report)
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
