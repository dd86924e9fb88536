//! Binary search over sorted forward sequences.
//!
//! Both searches here only step forwards, so they work on linked containers
//! as well as on slices. On slices `advance` is a constant-time jump and the
//! whole search costs O(log n); on a linked list it costs O(n) steps but
//! still only O(log n) comparisons.

use crate::core::Sequence;

/// Locates `target` in the sorted range `[first, last)`.
///
/// Returns a position holding an element equal to `target` if there is one.
/// With duplicates any of the equal elements may be returned. Otherwise the
/// result is the first position whose element is greater than `target`, or
/// `last` when `target` is greater than every element.
///
/// The range must be sorted ascending; this is not checked.
///
/// # Examples
///
/// ```
/// use seqsort::search;
///
/// let v = vec![2, 4, 6, 8, 9];
/// assert_eq!(search(&v, 0, v.len(), &8), 3);
/// assert_eq!(search(&v, 0, v.len(), &5), 2); // insertion point
/// assert_eq!(search(&v, 0, v.len(), &10), 5);
/// ```
pub fn search<S>(seq: &S, first: S::Pos, last: S::Pos, target: &S::Item) -> S::Pos
where
    S: Sequence + ?Sized,
    S::Item: PartialOrd,
{
    let len = seq.distance(first, last);
    if len == 0 {
        return first;
    }

    // Window is [lo, lo + span], both ends inclusive. Keeping the right bound
    // on the last element avoids ever reading `last`.
    let mut lo = first;
    let mut span = len - 1;

    while span > 0 {
        // Round up so a two-element window always moves.
        let half = span.div_ceil(2);
        let mid = seq.advance(lo, half);
        if seq.at(mid) > target {
            span = half - 1;
        } else {
            lo = mid;
            span -= half;
        }
    }

    // Everything before `lo` is <= target, everything after it is > target.
    if seq.at(lo) < target {
        seq.successor(lo)
    } else {
        lo
    }
}

/// Runs [`search`] over the whole sequence.
pub fn search_all<S>(seq: &S, target: &S::Item) -> S::Pos
where
    S: Sequence + ?Sized,
    S::Item: PartialOrd,
{
    search(seq, seq.start(), seq.end(), target)
}

/// First position in the sorted range `[first, last)` whose element is greater
/// than `value`, or `last`.
///
/// Unlike [`search`] this never stops early on an equal element, which is
/// what keeps insertion sort stable.
pub fn upper_bound<S>(seq: &S, mut first: S::Pos, last: S::Pos, value: &S::Item) -> S::Pos
where
    S: Sequence + ?Sized,
    S::Item: PartialOrd,
{
    let mut count = seq.distance(first, last);
    while count > 0 {
        let step = count / 2;
        let mid = seq.advance(first, step);
        if value < seq.at(mid) {
            count = step;
        } else {
            first = seq.successor(mid);
            count -= step + 1;
        }
    }
    first
}
