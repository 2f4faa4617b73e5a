/// Returns the smallest index whose element satisfies the predicate, or [`None`] if no element
/// does.
///
/// # Examples
/// ```
/// # use slice_utils::search::find_index;
/// let values = [1, 2, 3, 2];
/// assert_eq!(find_index(&values, |n| *n == 2), Some(1));
/// assert_eq!(find_index(&values, |n| *n == 9), None);
/// ```
pub fn find_index<T, P>(slice: &[T], pred: P) -> Option<usize>
where
    P: FnMut(&T) -> bool,
{
    find_index_from(slice, pred, 0)
}

/// Returns the smallest index at or after `start` whose element satisfies the predicate.
/// A `start` at or beyond the length means there is nothing left to scan, so the result is
/// [`None`].
///
/// # Examples
/// ```
/// # use slice_utils::search::find_index_from;
/// let values = [1, 2, 3, 2];
/// assert_eq!(find_index_from(&values, |n| *n == 2, 2), Some(3));
/// assert_eq!(find_index_from(&values, |n| *n == 2, 4), None);
/// ```
pub fn find_index_from<T, P>(slice: &[T], mut pred: P, start: usize) -> Option<usize>
where
    P: FnMut(&T) -> bool,
{
    (start..slice.len()).find(|index| pred(&slice[*index]))
}

/// Returns the largest index whose element satisfies the predicate, or [`None`] if no element
/// does. The scan runs from the final element down to and including index 0.
///
/// # Examples
/// ```
/// # use slice_utils::search::find_last_index;
/// let values = [2, 1, 2, 3];
/// assert_eq!(find_last_index(&values, |n| *n == 2), Some(2));
/// assert_eq!(find_last_index(&values, |n| *n == 9), None);
/// ```
pub fn find_last_index<T, P>(slice: &[T], pred: P) -> Option<usize>
where
    P: FnMut(&T) -> bool,
{
    find_last_index_from(slice, pred, slice.len().saturating_sub(1))
}

/// Returns the largest index at or before `start` whose element satisfies the predicate,
/// scanning down to and including index 0. A `start` beyond the final index is clamped to it;
/// an empty slice always produces [`None`].
///
/// # Examples
/// ```
/// # use slice_utils::search::find_last_index_from;
/// let values = [2, 1, 2, 3];
/// assert_eq!(find_last_index_from(&values, |n| *n == 2, 1), Some(0));
/// assert_eq!(find_last_index_from(&values, |n| *n == 3, 2), None);
/// ```
pub fn find_last_index_from<T, P>(slice: &[T], mut pred: P, start: usize) -> Option<usize>
where
    P: FnMut(&T) -> bool,
{
    if slice.is_empty() {
        return None;
    }

    let start = start.min(slice.len() - 1);
    (0..=start).rev().find(|index| pred(&slice[*index]))
}
