/// A tuple of sequences that can be zipped element-wise.
///
/// Implemented for tuples of slices from `(&[A],)` up to eight inputs. Output tuple `i` holds a
/// clone of the `i`-th element of each input, and the output stops at the length of the shortest
/// input, so no tuple ever has an undefined slot.
pub trait ZipSeqs {
    /// The tuple type produced for each position, one field per input sequence.
    type Item;

    /// Zips the sequences. See [`zip`] for the usual way to call this.
    fn zip_seqs(self) -> Vec<Self::Item>;
}

macro_rules! zip_seqs_impls {
    ($(($($seq:ident: $elem:ident),+))+) => {
        $(
            impl<'a, $($elem: Clone),+> ZipSeqs for ($(&'a [$elem],)+) {
                type Item = ($($elem,)+);

                fn zip_seqs(self) -> Vec<Self::Item> {
                    let ($($seq,)+) = self;
                    let len = [$($seq.len()),+].into_iter().min().unwrap_or(0);

                    (0..len).map(|index| ($($seq[index].clone(),)+)).collect()
                }
            }
        )+
    };
}

zip_seqs_impls! {
    (a: A)
    (a: A, b: B)
    (a: A, b: B, c: C)
    (a: A, b: B, c: C, d: D)
    (a: A, b: B, c: C, d: D, e: E)
    (a: A, b: B, c: C, d: D, e: E, f: F)
    (a: A, b: B, c: C, d: D, e: E, f: F, g: G)
    (a: A, b: B, c: C, d: D, e: E, f: F, g: G, h: H)
}

/// Zips a tuple of slices into a single sequence of tuples, truncated to the shortest input.
///
/// # Examples
/// ```
/// # use slice_utils::zip::zip;
/// let letters = ["a", "b"];
/// let numbers = [1, 2];
/// let flags = [true, false];
///
/// assert_eq!(
///     zip((&letters[..], &numbers[..], &flags[..])),
///     [("a", 1, true), ("b", 2, false)]
/// );
/// ```
pub fn zip<Z: ZipSeqs>(seqs: Z) -> Vec<Z::Item> {
    seqs.zip_seqs()
}
