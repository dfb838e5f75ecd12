//! Sorting utilities.
//!
//! Insertion sort for the short, often already ordered sequences that show
//! up when normalizing JSON objects (a handful of keys per object).

mod insertion;

pub use insertion::insertion_sort_by;
