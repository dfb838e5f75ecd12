//! json-dedupe-util - Utility functions for json-dedupe
//!
//! Leaf helpers shared by the canonicalizer and its test suites: insertion
//! sort, JSON string escaping and a seeded fuzzer for random JSON trees.

pub mod fuzzer;
pub mod sort;
pub mod strings;

// Re-exports for convenience
pub use fuzzer::{Fuzzer, TreeOptions};
pub use sort::insertion_sort_by;
pub use strings::{escape, escape_into};
