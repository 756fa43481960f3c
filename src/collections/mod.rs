//! Index trees over fixed-length numeric sequences.
//!
//! Collections are organized by capability:
//! - `segment_tree`: lazy-propagation trees, one per combine operator
//! - `range_tree`: sum and minimum over one sequence
//! - `fenwick_tree`: prefix sums with point updates only

pub mod fenwick_tree;
pub mod range_tree;
pub mod segment_tree;
mod span;

pub use fenwick_tree::FenwickTree;
pub use range_tree::RangeAggregateTree;
pub use segment_tree::{LazySegmentTree, Min, RangeOp, Sum};

use crate::RangeError;
use core::ops::RangeBounds;

/// Point-add / range-sum access shared by every tree that can answer sums.
///
/// This is the common ground between the lazy trees and `FenwickTree`. Range
/// adds and minimum queries are deliberately absent since the Fenwick tree
/// cannot provide them.
pub trait SumIndex<T> {
    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if the index holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Adds `delta` to the element at `index`.
    ///
    /// # Errors
    /// `InvalidIndex` if `index >= len`.
    fn add(&mut self, index: usize, delta: T) -> Result<(), RangeError>;

    /// Sums the elements in `range`.
    ///
    /// # Errors
    /// `InvalidRange` if `range` is empty or not within `0..len`.
    fn sum<R: RangeBounds<usize>>(&mut self, range: R) -> Result<T, RangeError>;
}
