use super::Truthy;

/// Returns the truthy elements of the slice, in their original order. See [`Truthy`] for which
/// values count.
///
/// Compacting is idempotent: compacting an already compacted sequence changes nothing.
///
/// # Examples
/// ```
/// # use slice_utils::compact::compact;
/// assert_eq!(compact(&[0, 1, 0, 2, 3]), [1, 2, 3]);
/// assert_eq!(compact(&["", "a", "", "b"]), ["a", "b"]);
/// assert_eq!(compact(&[None, Some(1), Some(0), Some(2)]), [Some(1), Some(2)]);
/// assert_eq!(compact(&[false, false]), Vec::<bool>::new());
/// ```
pub fn compact<T>(slice: &[T]) -> Vec<T>
where
    T: Truthy + Clone,
{
    slice.iter().filter(|item| item.is_truthy()).cloned().collect()
}
