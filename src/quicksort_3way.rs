//! Three-way (Dutch national flag) quicksort over random-access sequences.
//!
//! Each partition step splits `[low, high]` into elements less than, equal
//! to and greater than the pivot. The equal zone is never visited again, so a
//! key repeated `k` times costs a single pass instead of `O(k log k)` work.
//! This is the variant to reach for when the input holds few distinct keys.

use crate::SMALL_SORT_THRESHOLD;
use crate::core::RandomAccess;
use crate::insertion::insertion_sort;
use crate::network::{sort2, sort3};

/// Sorts the whole sequence ascending, in place. Not stable.
///
/// # Examples
///
/// ```
/// use seqsort::quick_sort_3way;
///
/// let mut v = vec![3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5, 8, 9, 7, 9];
/// quick_sort_3way(&mut v);
/// assert_eq!(v, vec![1, 1, 2, 3, 3, 4, 5, 5, 5, 6, 7, 8, 9, 9, 9]);
/// ```
pub fn quick_sort_3way<S>(seq: &mut S)
where
    S: RandomAccess + ?Sized,
    S::Item: PartialOrd,
{
    let len = seq.len();
    if len > 1 {
        sort_range(seq, 0, len - 1);
    }
}

/// Sorts the inclusive range `[low, high]`.
///
/// The zone left of the equal block is sorted recursively when it is the
/// smaller one, otherwise the right zone is; the other zone is handled by the
/// loop. Recursion depth stays within O(log n).
fn sort_range<S>(seq: &mut S, mut low: usize, mut high: usize)
where
    S: RandomAccess + ?Sized,
    S::Item: PartialOrd,
{
    while low < high {
        let span = high - low;
        if span < SMALL_SORT_THRESHOLD {
            match span {
                1 => sort2(seq, low, high),
                2 => sort3(seq, low, low + 1, high),
                _ => insertion_sort(seq, low, high + 1),
            }
            return;
        }

        let (lt, gt) = partition_3way(seq, low, high);
        let left_len = lt - low;
        let right_len = high - gt;

        if left_len < right_len {
            if left_len > 1 {
                sort_range(seq, low, lt - 1);
            }
            low = gt + 1;
        } else {
            if right_len > 1 {
                sort_range(seq, gt + 1, high);
            }
            if left_len == 0 {
                return;
            }
            high = lt - 1;
        }
    }
}

/// Sorts the elements at `low`, the midpoint and `high` and returns the
/// midpoint, which then holds the median of the three.
///
/// Ranges shorter than three elements are left alone and `low` is returned.
///
/// # Examples
///
/// ```
/// use seqsort::median_of_three;
///
/// let mut v = vec![5, 2, 8];
/// let m = median_of_three(&mut v, 0, 2);
/// assert_eq!(v[m], 5);
/// assert_eq!(v, vec![2, 5, 8]);
/// ```
#[allow(clippy::neg_cmp_op_on_partial_ord)]
pub fn median_of_three<S>(seq: &mut S, low: usize, high: usize) -> usize
where
    S: RandomAccess + ?Sized,
    S::Item: PartialOrd,
{
    if high - low < 2 {
        return low;
    }

    let mid = low + (high - low) / 2;
    sort3(seq, low, mid, high);

    debug_assert!(!(seq.at(low) > seq.at(mid)) && !(seq.at(mid) > seq.at(high)));
    mid
}

/// Partitions `[low, high]` around a median-of-three pivot into three zones
/// and returns their walls `(lt, gt)`.
///
/// Afterwards elements at `low..lt` are less than the pivot, elements at
/// `lt..=gt` are equal to it and elements at `gt + 1..=high` are greater.
/// Requires `low <= high < seq.len()`.
///
/// # Examples
///
/// ```
/// use seqsort::partition_3way;
///
/// let mut v = vec![2, 7, 2, 1, 2, 9, 2];
/// let (lt, gt) = partition_3way(&mut v, 0, 6);
///
/// assert!(v[..lt].iter().all(|x| *x < 2));
/// assert!(v[lt..=gt].iter().all(|x| *x == 2));
/// assert!(v[gt + 1..].iter().all(|x| *x > 2));
/// ```
pub fn partition_3way<S>(seq: &mut S, low: usize, high: usize) -> (usize, usize)
where
    S: RandomAccess + ?Sized,
    S::Item: PartialOrd,
{
    debug_assert!(low <= high && high < seq.len());

    let mut pivot = median_of_three(seq, low, high);
    let mut lt = low;
    let mut eq = low;
    let mut gt = high;

    // The pivot element never compares less or greater than itself, so it
    // stays inside `[lt, gt]` and `gt` cannot drop below `low`.
    while eq <= gt {
        if seq.at(eq) < seq.at(pivot) {
            seq.swap_at(eq, lt);
            if pivot == lt {
                pivot = eq;
            }
            lt += 1;
            eq += 1;
        } else if seq.at(eq) > seq.at(pivot) {
            seq.swap_at(eq, gt);
            if pivot == gt {
                pivot = eq;
            }
            gt -= 1;
        } else {
            eq += 1;
        }
    }

    debug_assert!(low <= lt && lt <= gt && gt <= high);
    debug_assert!(zones_hold(seq, low, high, (lt, gt), pivot));
    (lt, gt)
}

/// Linear re-check of the three zones; only used by debug assertions.
#[allow(clippy::neg_cmp_op_on_partial_ord)]
fn zones_hold<S>(seq: &S, low: usize, high: usize, (lt, gt): (usize, usize), pivot: usize) -> bool
where
    S: RandomAccess + ?Sized,
    S::Item: PartialOrd,
{
    let p = seq.at(pivot);
    (low..lt).all(|i| seq.at(i) < p)
        && (lt..=gt).all(|i| !(seq.at(i) < p) && !(seq.at(i) > p))
        && (gt + 1..=high).all(|i| seq.at(i) > p)
}
