//! # Seqsort
//!
//! `seqsort` provides in-place comparison sorts and a binary search that are
//! generic over *how* a sequence can be traversed, not over a concrete
//! container type.
//!
//! ## Capabilities
//!
//! Sequences describe what they support through the traits in [`core`](crate::core):
//!
//! - [`Sequence`]: forward traversal, element access and swapping. Enough for
//!   [`search`] and [`insertion_sort`].
//! - [`Bidirectional`]: adds stepping backwards. Required by [`quick_sort`].
//! - [`RandomAccess`]: `usize` offsets and a known length. Required by
//!   [`quick_sort_3way`].
//!
//! `[T]`, `Vec<T>` and `VecDeque<T>` implement all three. Node-based
//! containers can implement `Sequence` and `Bidirectional` with their own
//! cursor type.
//!
//! ## Usage
//!
//! ```rust
//! use seqsort::prelude::*;
//!
//! let mut data = vec![3, 1, 4, 2, 1, 5, 4];
//! let len = data.len();
//! quick_sort(&mut data, 0, len);
//! assert_eq!(data, vec![1, 1, 2, 3, 4, 4, 5]);
//!
//! // Position of 4, or of the first element greater than it.
//! let pos = search_all(&data, &4);
//! assert_eq!(data[pos], 4);
//! ```
//!
//! ### Many duplicates
//!
//! ```rust
//! use seqsort::quick_sort_3way;
//!
//! let mut data: Vec<u8> = (0..1000).map(|i| (i % 3) as u8).collect();
//! quick_sort_3way(&mut data);
//! assert!(data.windows(2).all(|w| w[0] <= w[1]));
//! ```
//!
//! ## Ordering
//!
//! Elements only need [`PartialOrd`]. For a consistent order (a strict weak
//! ordering, as for integers, chars or floats without NaN) the sorts produce
//! ascending output. With incomparable values the routines still terminate
//! and stay in bounds, but the resulting order is unspecified.
//!
//! ## Performance Characteristics
//!
//! - [`quick_sort`] / [`quick_sort_3way`]: O(n log n) expected, median-of-three
//!   pivots, O(log n) recursion depth in the worst case.
//! - [`insertion_sort`]: O(n²), stable, used for ranges of at most
//!   [`SMALL_SORT_THRESHOLD`] elements.
//! - [`search`]: O(log n) comparisons.
//!
//! Nothing here allocates.

pub mod core;
pub mod insertion;
pub mod network;
pub mod quicksort;
pub mod quicksort_3way;
pub mod search;

pub use crate::core::{Bidirectional, RandomAccess, Sequence};
pub use insertion::insertion_sort;
pub use quicksort::quick_sort;
pub use quicksort_3way::{median_of_three, partition_3way, quick_sort_3way};
pub use search::{search, search_all, upper_bound};

/// Largest range the quicksorts hand to [`insertion_sort`] instead of
/// partitioning. Ranges of two and three elements use the fixed networks in
/// [`network`].
pub const SMALL_SORT_THRESHOLD: usize = 10;

pub mod prelude {
    pub use crate::core::{Bidirectional, RandomAccess, Sequence};
    pub use crate::insertion::insertion_sort;
    pub use crate::quicksort::quick_sort;
    pub use crate::quicksort_3way::quick_sort_3way;
    pub use crate::search::{search, search_all};
}
