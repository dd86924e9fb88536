//! Quicksort over bidirectional sequences.
//!
//! The sort works on inclusive ranges `[lo, hi]` and combines:
//! - **Small-range dispatch**: two and three elements go through the fixed
//!   networks in [`crate::network`], up to [`SMALL_SORT_THRESHOLD`] elements
//!   go to [`insertion_sort`].
//! - **Median-of-three pivot**: first, middle and last element are sorted in
//!   place and the middle one becomes the pivot.
//! - **Hoare partitioning with a duplicate guard**: a pair of equal elements
//!   is stepped over instead of swapped, so runs of keys equal to the pivot
//!   are split evenly instead of being shuffled.
//! - **Smaller side first**: the smaller partition is sorted by a recursive
//!   call and the larger one by the next loop iteration, which bounds the
//!   recursion depth to O(log n).
//!
//! The entry point is [`quick_sort`].

use crate::SMALL_SORT_THRESHOLD;
use crate::core::Bidirectional;
use crate::insertion::insertion_sort;
use crate::network::{sort2, sort3};

/// Sorts `[begin, end)` ascending, in place. Not stable.
///
/// Works on any [`Bidirectional`] sequence; positions are only ever stepped
/// one at a time or advanced forwards, so node-linked containers are fine.
///
/// # Examples
///
/// ```
/// use seqsort::quick_sort;
/// use std::collections::VecDeque;
///
/// let mut d: VecDeque<i32> = VecDeque::from(vec![3, 1, 4, 2, 1, 5, 4]);
/// let len = d.len();
/// quick_sort(&mut d, 0, len);
/// assert!(d.iter().eq([1, 1, 2, 3, 4, 4, 5].iter()));
/// ```
pub fn quick_sort<S>(seq: &mut S, begin: S::Pos, end: S::Pos)
where
    S: Bidirectional + ?Sized,
    S::Item: PartialOrd,
{
    if begin == end {
        return;
    }

    let len = seq.distance(begin, end);
    let last = seq.predecessor(end);
    sort_inclusive(seq, Mark::new(begin, 0), Mark::new(last, len - 1));
}

/// A position paired with its offset from the start of the sorted range.
///
/// Forward-only positions cannot be ordered, so the offsets decide whether two
/// cursors have met or crossed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Mark<P> {
    pos: P,
    offset: usize,
}

impl<P: Copy + Eq> Mark<P> {
    fn new(pos: P, offset: usize) -> Self {
        Self { pos, offset }
    }

    #[inline(always)]
    fn forward<S>(self, seq: &S) -> Self
    where
        S: Bidirectional<Pos = P> + ?Sized,
    {
        Self::new(seq.successor(self.pos), self.offset + 1)
    }

    #[inline(always)]
    fn back<S>(self, seq: &S) -> Self
    where
        S: Bidirectional<Pos = P> + ?Sized,
    {
        Self::new(seq.predecessor(self.pos), self.offset - 1)
    }
}

/// Sorts `[lo, hi]`. Requires `lo.offset <= hi.offset`.
fn sort_inclusive<S>(seq: &mut S, mut lo: Mark<S::Pos>, mut hi: Mark<S::Pos>)
where
    S: Bidirectional + ?Sized,
    S::Item: PartialOrd,
{
    loop {
        let len = hi.offset - lo.offset + 1;
        if len <= SMALL_SORT_THRESHOLD {
            small_sort(seq, lo, hi, len);
            return;
        }

        // Both sides are non-empty: `[lo, split]` and `[split + 1, hi]`.
        let split = partition(seq, lo, hi);
        let left_len = split.offset - lo.offset + 1;
        let right_len = hi.offset - split.offset;

        if left_len < right_len {
            if left_len > 1 {
                sort_inclusive(seq, lo, split);
            }
            lo = split.forward(seq);
        } else {
            if right_len > 1 {
                sort_inclusive(seq, split.forward(seq), hi);
            }
            hi = split;
        }
    }
}

fn small_sort<S>(seq: &mut S, lo: Mark<S::Pos>, hi: Mark<S::Pos>, len: usize)
where
    S: Bidirectional + ?Sized,
    S::Item: PartialOrd,
{
    match len {
        0 | 1 => {}
        2 => sort2(seq, lo.pos, hi.pos),
        3 => {
            let mid = seq.successor(lo.pos);
            sort3(seq, lo.pos, mid, hi.pos);
        }
        _ => {
            let end = seq.successor(hi.pos);
            insertion_sort(seq, lo.pos, end);
        }
    }
}

/// Partitions `[lo, hi]` around a median-of-three pivot and returns the split.
///
/// On return no element of `[lo, split]` is greater than the pivot and no
/// element of `[split + 1, hi]` is less, with `lo <= split < hi`. Needs at
/// least three elements.
fn partition<S>(seq: &mut S, lo: Mark<S::Pos>, hi: Mark<S::Pos>) -> Mark<S::Pos>
where
    S: Bidirectional + ?Sized,
    S::Item: PartialOrd,
{
    debug_assert!(hi.offset - lo.offset >= 2);

    let half = (hi.offset - lo.offset) / 2;
    let mid = seq.advance(lo.pos, half);
    sort3(seq, lo.pos, mid, hi.pos);

    // The pivot is compared in place; follow it when a swap moves it.
    let mut pivot = mid;
    let mut left = lo;
    let mut right = hi;

    loop {
        while left.offset < hi.offset && seq.at(left.pos) < seq.at(pivot) {
            left = left.forward(seq);
        }
        while right.offset > lo.offset && seq.at(right.pos) > seq.at(pivot) {
            right = right.back(seq);
        }

        if left.offset >= right.offset {
            debug_assert!(right.offset < hi.offset);
            debug_assert!(is_split(seq, lo, hi, right, pivot));
            return right;
        }

        // A pair of equal keys may stay where it is. Every other pair,
        // incomparable ones included, is swapped.
        if seq.at(left.pos) != seq.at(right.pos) {
            seq.swap_at(left.pos, right.pos);
            if pivot == left.pos {
                pivot = right.pos;
            } else if pivot == right.pos {
                pivot = left.pos;
            }
        }
        left = left.forward(seq);
        right = right.back(seq);
    }
}

/// Checks the partition postcondition for `split` against the pivot at `pivot`.
///
/// Linear; only used by debug assertions.
#[allow(clippy::neg_cmp_op_on_partial_ord)]
fn is_split<S>(
    seq: &S,
    lo: Mark<S::Pos>,
    hi: Mark<S::Pos>,
    split: Mark<S::Pos>,
    pivot: S::Pos,
) -> bool
where
    S: Bidirectional + ?Sized,
    S::Item: PartialOrd,
{
    let value = seq.at(pivot);
    let mut cur = lo;
    loop {
        let item = seq.at(cur.pos);
        if cur.offset <= split.offset && item > value {
            return false;
        }
        if cur.offset > split.offset && item < value {
            return false;
        }
        if cur.offset == hi.offset {
            return true;
        }
        cur = cur.forward(seq);
    }
}
