//! Stable insertion sort over forward sequences.

use crate::core::Sequence;
use crate::search::upper_bound;

/// Sorts `[begin, end)` ascending, in place. Equal elements keep their order.
///
/// Each element is moved to the upper bound of the already sorted prefix,
/// with the elements in between shifted one slot to the right. Needs only
/// forward traversal and [`Sequence::rotate_into`].
///
/// Quadratic in the worst case; the quicksorts use it for ranges of at most
/// [`SMALL_SORT_THRESHOLD`](crate::SMALL_SORT_THRESHOLD) elements.
///
/// # Examples
///
/// ```
/// use seqsort::insertion_sort;
///
/// let mut v = vec![6, 5, 4, 3, 2, 1];
/// let len = v.len();
/// insertion_sort(&mut v, 0, len);
/// assert_eq!(v, vec![1, 2, 3, 4, 5, 6]);
/// ```
pub fn insertion_sort<S>(seq: &mut S, begin: S::Pos, end: S::Pos)
where
    S: Sequence + ?Sized,
    S::Item: PartialOrd,
{
    if begin == end {
        return;
    }

    let mut i = seq.successor(begin);
    while i != end {
        let dest = upper_bound(seq, begin, i, seq.at(i));
        if dest != i {
            seq.rotate_into(dest, i);
        }
        i = seq.successor(i);
    }
}
