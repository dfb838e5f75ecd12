use std::cmp::Ordering;

/// Stable insertion sort with a custom comparator.
///
/// Each element is moved left past every element that compares
/// `Greater` than it, so equal elements keep their relative order.
/// O(n) on already sorted input, O(n²) worst case.
///
/// # Examples
///
/// ```
/// use json_dedupe_util::sort::insertion_sort_by;
///
/// let mut keys = vec!["b", "c", "a"];
/// insertion_sort_by(&mut keys, |a, b| a.cmp(b));
/// assert_eq!(keys, vec!["a", "b", "c"]);
/// ```
pub fn insertion_sort_by<T, F>(items: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && compare(&items[j - 1], &items[j]) == Ordering::Greater {
            items.swap(j - 1, j);
            j -= 1;
        }
    }
}
