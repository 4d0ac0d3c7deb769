//! Ordered-table search.

/// Returns the index of the rightmost element strictly less than `value`, or
/// `None` if every element is greater than or equal to it.
///
/// `table` must be sorted ascending. Runs in O(log n).
///
/// # Example
///
/// ```
/// use sampler_core::math::binary_search_below;
///
/// let table = [0.1, 0.2, 0.3, 0.4];
/// assert_eq!(binary_search_below(&table, 0.25), Some(1));
/// assert_eq!(binary_search_below(&table, 0.2), Some(0));
/// assert_eq!(binary_search_below(&table, 0.1), None);
/// assert_eq!(binary_search_below(&table, 9.0), Some(3));
/// ```
#[inline]
pub fn binary_search_below(table: &[f64], value: f64) -> Option<usize> {
    // partition_point returns the first index where the predicate is false
    let pos = table.partition_point(|&x| x < value);
    pos.checked_sub(1)
}
