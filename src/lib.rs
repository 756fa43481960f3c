//! # `lazyseg` - Range Aggregate Trees
//!
//! A small toolkit of index trees over a fixed-length numeric sequence.
//! The primary structure answers range sums and range minimums and applies
//! range-additive updates, each in `O(log n)`, by deferring ("lazily
//! propagating") updates until a subtree is actually visited.
//!
//! ## Structures
//!
//! 1. **`LazySegmentTree<T, Op>`**:
//!    - Implicit binary tree over `n` leaves in `4n` slots (`2i` / `2i + 1` children)
//!    - Parametrized by one combine operator (`Sum` or `Min`), each with its
//!      own rule for folding a pending delta into an aggregate
//!    - Range add, point set, range query
//!
//! 2. **`RangeAggregateTree<T>`**:
//!    - One sum tree and one minimum tree driven in lockstep
//!    - Answers both `query_sum` and `query_min` over the same sequence
//!
//! 3. **`FenwickTree<T>`**:
//!    - Binary indexed tree with point add and prefix/range sums
//!    - No lazy state, no range add, no minimum
//!
//! ## Invariants
//!
//! **Invariant 1 (Aggregate)**: after a node has been pushed, its children's
//! aggregates are correct for their whole ranges. Any remaining staleness is
//! confined to descendants still carrying a pending delta.
//!
//! **Invariant 2 (Structure)**: leaves map 1:1 onto positions `0..n`, and an
//! internal aggregate equals the combine of its children whenever nothing is
//! pending above them.
//!
//! **Invariant 3 (Fixed storage)**: storage is sized once at construction and
//! never grows or shrinks.
//!
//! ## Concurrency
//!
//! Queries mutate internal state (they push pending deltas), so every
//! operation takes `&mut self`. Sharing a tree across threads therefore needs
//! external serialization such as a `Mutex`.
//!
//! ## Example
//!
//! ```rust
//! use lazyseg::RangeAggregateTree;
//!
//! let mut tree = RangeAggregateTree::from_slice(&[1, 3, 5, 7, 9, 11, 13, 15]).unwrap();
//! assert_eq!(tree.query_sum(1..=5).unwrap(), 35);
//!
//! tree.update_range(2..=6, 10).unwrap();
//! assert_eq!(tree.query_sum(1..=5).unwrap(), 75);
//! assert_eq!(tree.query_min(2..=6).unwrap(), 15);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod collections;
pub mod element;
pub mod error;

#[cfg(any(test, feature = "proptest"))]
pub mod testing;

pub use collections::{FenwickTree, LazySegmentTree, Min, RangeAggregateTree, RangeOp, Sum, SumIndex};
pub use element::Element;
pub use error::RangeError;

// Compile-time layout checks: the trees are thin owners of their arrays.
const _: () = {
    use core::mem;

    // The operator marker is a ZST.
    assert!(mem::size_of::<Sum>() == 0);
    assert!(mem::size_of::<Min>() == 0);

    // Two vectors plus the length; the operator adds nothing.
    assert!(mem::size_of::<LazySegmentTree<i64, Sum>>() == mem::size_of::<Vec<i64>>() * 2 + mem::size_of::<usize>());

    // One vector.
    assert!(mem::size_of::<FenwickTree<i64>>() == mem::size_of::<Vec<i64>>());
};
