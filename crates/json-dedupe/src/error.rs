//! Error types.

use thiserror::Error;

/// A value nests arrays/objects deeper than the configured limit.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("value nests deeper than {max_depth} levels")]
pub struct DepthLimitExceeded {
    pub max_depth: usize,
}

/// Errors reported while deduplicating a sequence of records.
///
/// `index` is the position of the offending record in the input sequence
/// (or the number of records pushed before it, for [`crate::Deduplicator`]).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DedupeError {
    /// The record is not a JSON object.
    #[error("INVALID_VALUE_KIND: record {index} is {found}, expected object")]
    InvalidValueKind { index: usize, found: &'static str },
    /// The record nests deeper than `max_depth` levels.
    #[error("DEPTH_LIMIT_EXCEEDED: record {index} nests deeper than {max_depth} levels")]
    DepthLimitExceeded { index: usize, max_depth: usize },
}

impl DedupeError {
    /// Position of the offending record.
    pub fn index(&self) -> usize {
        match self {
            DedupeError::InvalidValueKind { index, .. }
            | DedupeError::DepthLimitExceeded { index, .. } => *index,
        }
    }

    pub(crate) fn depth(index: usize, err: DepthLimitExceeded) -> Self {
        DedupeError::DepthLimitExceeded {
            index,
            max_depth: err.max_depth,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_record() {
        let err = DedupeError::InvalidValueKind {
            index: 3,
            found: "array",
        };
        assert_eq!(
            err.to_string(),
            "INVALID_VALUE_KIND: record 3 is array, expected object"
        );
        assert_eq!(err.index(), 3);

        let err = DedupeError::depth(7, DepthLimitExceeded { max_depth: 2 });
        assert_eq!(
            err.to_string(),
            "DEPTH_LIMIT_EXCEEDED: record 7 nests deeper than 2 levels"
        );
        assert_eq!(err.index(), 7);
    }
}
