use super::ZeroChunkSize;

/// Partitions the slice into consecutive groups of `size` elements. If the length doesn't divide
/// evenly, the final group holds the remainder. Each group borrows from the input; nothing is
/// copied.
///
/// # Panics
/// Panics if `size` is zero. Use [`try_chunk`] to handle that case as a value instead.
///
/// # Examples
/// ```
/// # use slice_utils::chunking::chunk;
/// assert_eq!(chunk(&["a", "b", "c", "d"], 2), [&["a", "b"][..], &["c", "d"][..]]);
/// assert_eq!(chunk(&["a", "b", "c"], 2), [&["a", "b"][..], &["c"][..]]);
/// assert_eq!(chunk(&["a", "b", "c"], 1), [&["a"][..], &["b"][..], &["c"][..]]);
/// ```
pub fn chunk<T>(slice: &[T], size: usize) -> Vec<&[T]> {
    match try_chunk(slice, size) {
        Ok(groups) => groups,
        Err(error) => panic!("{error}"),
    }
}

/// Partitions the slice into consecutive groups of `size` elements, reporting a zero `size` as
/// an error rather than panicking. See [`chunk`].
///
/// # Errors
/// Returns [`ZeroChunkSize`] if `size` is zero.
///
/// # Examples
/// ```
/// # use slice_utils::chunking::{try_chunk, ZeroChunkSize};
/// assert_eq!(try_chunk(&[1, 2, 3], 2), Ok(vec![&[1, 2][..], &[3][..]]));
/// assert_eq!(try_chunk(&[1, 2, 3], 0), Err(ZeroChunkSize));
/// ```
pub fn try_chunk<T>(slice: &[T], size: usize) -> Result<Vec<&[T]>, ZeroChunkSize> {
    if size == 0 {
        return Err(ZeroChunkSize);
    }

    let mut groups = Vec::with_capacity(slice.len().div_ceil(size));
    let mut rest = slice;

    while !rest.is_empty() {
        let (group, remainder) = rest.split_at(size.min(rest.len()));
        groups.push(group);
        rest = remainder;
    }

    Ok(groups)
}
