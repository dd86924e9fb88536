//! Capability traits for the sequences the algorithms operate on.
//!
//! This module defines:
//! - [`Sequence`]: forward traversal with an element accessor and a swap.
//! - [`Bidirectional`]: adds stepping backwards.
//! - [`RandomAccess`]: offsets are positions, length is known up front.
//!
//! Implementations are provided for `[T]`, `Vec<T>` and `VecDeque<T>`.

use std::collections::VecDeque;

/// A finite sequence reachable by forward traversal.
///
/// A position (`Pos`) names one element, or the one-past-the-end position
/// returned by [`end`](Sequence::end). Positions are plain values: copying one
/// does not borrow the sequence, so a single `&mut` to the sequence can be
/// combined with any number of cursors.
///
/// Only `successor`, `at` and `swap_at` are required; `advance`, `distance`
/// and `rotate_into` fall back to repeated stepping and swapping. Containers
/// with constant-time jumps should override them.
///
/// # Examples
///
/// ```
/// use seqsort::core::Sequence;
///
/// let v = vec![10, 20, 30];
/// let second = v.successor(v.start());
///
/// assert_eq!(*v.at(second), 20);
/// assert_eq!(v.distance(v.start(), v.end()), 3);
/// ```
pub trait Sequence {
    /// Element type.
    type Item;

    /// Cursor type. Two positions compare equal when they name the same slot.
    type Pos: Copy + Eq;

    /// Position of the first element, equal to [`end`](Sequence::end) when empty.
    fn start(&self) -> Self::Pos;

    /// One-past-the-end position.
    fn end(&self) -> Self::Pos;

    /// Position following `pos`. `pos` must not be `end()`.
    fn successor(&self, pos: Self::Pos) -> Self::Pos;

    /// Element at `pos`. `pos` must not be `end()`.
    fn at(&self, pos: Self::Pos) -> &Self::Item;

    /// Exchanges the elements at `a` and `b`.
    fn swap_at(&mut self, a: Self::Pos, b: Self::Pos);

    /// Moves `pos` forward by `n` elements.
    fn advance(&self, mut pos: Self::Pos, n: usize) -> Self::Pos {
        for _ in 0..n {
            pos = self.successor(pos);
        }
        pos
    }

    /// Number of steps from `from` to `to`. `to` must be reachable from `from`.
    fn distance(&self, mut from: Self::Pos, to: Self::Pos) -> usize {
        let mut n = 0;
        while from != to {
            from = self.successor(from);
            n += 1;
        }
        n
    }

    /// Moves the element at `src` to `dest`, shifting `[dest, src)` one slot
    /// towards `src`. `src` must be reachable from `dest`.
    ///
    /// Swapping each slot of `[dest, src)` with `src` in turn carries the
    /// displaced elements along, so forward traversal is enough.
    fn rotate_into(&mut self, dest: Self::Pos, src: Self::Pos) {
        let mut pos = dest;
        while pos != src {
            self.swap_at(pos, src);
            pos = self.successor(pos);
        }
    }
}

/// A [`Sequence`] that can also be walked backwards.
pub trait Bidirectional: Sequence {
    /// Position preceding `pos`. `pos` must not be `start()`; `end()` is allowed.
    fn predecessor(&self, pos: Self::Pos) -> Self::Pos;
}

/// A [`Bidirectional`] sequence addressed by `usize` offsets in `0..len()`.
pub trait RandomAccess: Bidirectional<Pos = usize> {
    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if the sequence holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Sequence for [T] {
    type Item = T;
    type Pos = usize;

    fn start(&self) -> usize {
        0
    }

    fn end(&self) -> usize {
        self.len()
    }

    #[inline(always)]
    fn successor(&self, pos: usize) -> usize {
        pos + 1
    }

    #[inline(always)]
    fn at(&self, pos: usize) -> &T {
        &self[pos]
    }

    #[inline(always)]
    fn swap_at(&mut self, a: usize, b: usize) {
        self.swap(a, b);
    }

    #[inline(always)]
    fn advance(&self, pos: usize, n: usize) -> usize {
        pos + n
    }

    #[inline(always)]
    fn distance(&self, from: usize, to: usize) -> usize {
        to - from
    }

    fn rotate_into(&mut self, dest: usize, src: usize) {
        self[dest..=src].rotate_right(1);
    }
}

impl<T> Bidirectional for [T] {
    #[inline(always)]
    fn predecessor(&self, pos: usize) -> usize {
        pos - 1
    }
}

impl<T> RandomAccess for [T] {
    fn len(&self) -> usize {
        self.len()
    }
}

// Explicit Vec impl so callers can pass `&mut vec` without `.as_mut_slice()`.
impl<T> Sequence for Vec<T> {
    type Item = T;
    type Pos = usize;

    fn start(&self) -> usize {
        0
    }

    fn end(&self) -> usize {
        self.len()
    }

    #[inline(always)]
    fn successor(&self, pos: usize) -> usize {
        pos + 1
    }

    #[inline(always)]
    fn at(&self, pos: usize) -> &T {
        &self[pos]
    }

    #[inline(always)]
    fn swap_at(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b);
    }

    #[inline(always)]
    fn advance(&self, pos: usize, n: usize) -> usize {
        pos + n
    }

    #[inline(always)]
    fn distance(&self, from: usize, to: usize) -> usize {
        to - from
    }

    fn rotate_into(&mut self, dest: usize, src: usize) {
        self[dest..=src].rotate_right(1);
    }
}

impl<T> Bidirectional for Vec<T> {
    #[inline(always)]
    fn predecessor(&self, pos: usize) -> usize {
        pos - 1
    }
}

impl<T> RandomAccess for Vec<T> {
    fn len(&self) -> usize {
        self.len()
    }
}

// Ring buffer: O(1) offsets, but the storage may wrap, so `rotate_into`
// keeps the swap-chain default.
impl<T> Sequence for VecDeque<T> {
    type Item = T;
    type Pos = usize;

    fn start(&self) -> usize {
        0
    }

    fn end(&self) -> usize {
        self.len()
    }

    fn successor(&self, pos: usize) -> usize {
        pos + 1
    }

    fn at(&self, pos: usize) -> &T {
        &self[pos]
    }

    fn swap_at(&mut self, a: usize, b: usize) {
        self.swap(a, b);
    }

    fn advance(&self, pos: usize, n: usize) -> usize {
        pos + n
    }

    fn distance(&self, from: usize, to: usize) -> usize {
        to - from
    }
}

impl<T> Bidirectional for VecDeque<T> {
    fn predecessor(&self, pos: usize) -> usize {
        pos - 1
    }
}

impl<T> RandomAccess for VecDeque<T> {
    fn len(&self) -> usize {
        self.len()
    }
}
