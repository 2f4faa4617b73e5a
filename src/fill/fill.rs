use super::{EndOutOfBounds, RangeError, StartAfterEnd};

/// Returns a copy of the slice in which the positions in `start..end` hold clones of `value` and
/// every other position keeps its original element.
///
/// The range is half-open: `start` is included, `end` is not. The caller's slice is never
/// modified. Out-of-shape ranges are treated leniently, an `end` past the length means "to the
/// end" and a `start` at or beyond `end` selects nothing; use [`try_fill`] to treat those as
/// errors instead.
///
/// # Examples
/// ```
/// # use slice_utils::fill::fill;
/// let values = [4, 6, 8, 10];
/// assert_eq!(fill(&values, &0, 1, 3), [4, 0, 0, 10]);
/// assert_eq!(fill(&values, &0, 2, 100), [4, 6, 0, 0]);
/// assert_eq!(fill(&values, &0, 3, 1), values);
/// ```
pub fn fill<T>(slice: &[T], value: &T, start: usize, end: usize) -> Vec<T>
where
    T: Clone,
{
    slice
        .iter()
        .enumerate()
        .map(|(index, item)| {
            if (start..end).contains(&index) {
                value.clone()
            } else {
                item.clone()
            }
        })
        .collect()
}

/// The strict counterpart of [`fill`]: rejects ranges that [`fill`] would quietly clamp.
///
/// # Errors
/// Returns [`RangeError::StartAfterEnd`] if `start > end` and
/// [`RangeError::EndOutOfBounds`] if `end` reaches past the end of the slice.
///
/// # Examples
/// ```
/// # use slice_utils::fill::{try_fill, RangeError};
/// let values = [4, 6, 8, 10];
/// assert_eq!(try_fill(&values, &0, 1, 3), Ok(vec![4, 0, 0, 10]));
/// assert!(try_fill(&values, &0, 3, 1).is_err());
/// assert!(try_fill(&values, &0, 1, 5).is_err());
/// ```
pub fn try_fill<T>(slice: &[T], value: &T, start: usize, end: usize) -> Result<Vec<T>, RangeError>
where
    T: Clone,
{
    if start > end {
        return Err(StartAfterEnd { start, end }.into());
    }

    if end > slice.len() {
        return Err(EndOutOfBounds { end, len: slice.len() }.into());
    }

    Ok(fill(slice, value, start, end))
}
