//! Fixed compare-and-swap networks for two and three elements.
//!
//! Both quicksorts resolve ranges of length 2 and 3 with these instead of
//! partitioning, and pick their pivot with [`sort3`] on the first, middle and
//! last element of a range.

use crate::core::Sequence;

/// Orders the elements at `a` and `b`.
#[inline]
pub fn sort2<S>(seq: &mut S, a: S::Pos, b: S::Pos)
where
    S: Sequence + ?Sized,
    S::Item: PartialOrd,
{
    if seq.at(a) > seq.at(b) {
        seq.swap_at(a, b);
    }
}

/// Orders the elements at `a`, `b` and `c` so that `a <= b <= c`.
///
/// Swaps `(a, c)`, then `(a, b)`, then `(b, c)`. Afterwards `b` holds the
/// median of the three, which is what the median-of-three pivot relies on.
#[inline]
#[allow(clippy::neg_cmp_op_on_partial_ord)]
pub fn sort3<S>(seq: &mut S, a: S::Pos, b: S::Pos, c: S::Pos)
where
    S: Sequence + ?Sized,
    S::Item: PartialOrd,
{
    sort2(seq, a, c);
    sort2(seq, a, b);
    sort2(seq, b, c);

    debug_assert!(
        !(seq.at(a) > seq.at(b)) && !(seq.at(b) > seq.at(c)),
        "three-element network left elements out of order"
    );
}
