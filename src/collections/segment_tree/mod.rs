//! `LazySegmentTree` — a range-aggregate tree with lazy range-add updates.
//!
//! The tree is parametrized by a single combine operator (`Sum` or `Min`).
//! Each operator carries its own rule for folding a pending delta into an
//! aggregate, so a tree never mixes sum and minimum state; to answer both,
//! keep two trees (see `RangeAggregateTree`).
//!
//! Time Complexity:
//! - Build: O(n)
//! - Range add: O(log n)
//! - Point set: O(log n)
//! - Range query: O(log n)
//! - Materialize: O(n)
//!
//! Space Complexity: O(4n)
//!
//! Nodes live in two flat arrays indexed from 1 (children `2i` and `2i + 1`).
//! The root covers `[0, n - 1]`; node ranges are derived during descent and
//! never stored.

mod lazy;
pub mod ops;


use self::lazy::midpoint;
pub use self::ops::{Min, RangeOp, Sum};
use super::span::Span;
use super::SumIndex;
use crate::{Element, RangeError};
use core::marker::PhantomData;
use core::ops::RangeBounds;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A lazy-propagation segment tree over a fixed-length sequence.
#[derive(Debug, Clone)]
pub struct LazySegmentTree<T, Op> {
    /// Combined value of each node's range, including the node's own pending delta.
    aggregate: Vec<T>,
    /// Delta each internal node still owes its children.
    pending: Vec<T>,
    /// Number of leaves.
    len: usize,
    _op: PhantomData<Op>,
}

impl<T: Element, Op: RangeOp<T>> LazySegmentTree<T, Op> {
    /// Builds a tree over `data` in O(n).
    ///
    /// # Errors
    /// - `EmptySequence` if `data` is empty.
    /// - `NumericOverflow` if `Op` scales deltas by node width and
    ///   `data.len()` is not representable in `T`.
    pub fn from_slice(data: &[T]) -> Result<Self, RangeError> {
        let len = data.len();
        if len == 0 {
            return Err(RangeError::EmptySequence);
        }
        if Op::SCALES_BY_WIDTH && T::from_len(len).is_none() {
            return Err(RangeError::NumericOverflow { len });
        }

        let size = 4 * len;
        let mut tree = Self {
            aggregate: vec![Op::identity(); size],
            pending: vec![T::zero(); size],
            len,
            _op: PhantomData,
        };
        tree.build_recursive(data, 1, 0, len - 1);

        #[cfg(feature = "tracing")]
        tracing::debug!(op = Op::NAME, len, "built lazy segment tree");

        Ok(tree)
    }

    fn build_recursive(&mut self, data: &[T], node: usize, start: usize, end: usize) {
        if start == end {
            self.aggregate[node] = data[start];
            return;
        }
        let mid = midpoint(start, end);
        self.build_recursive(data, 2 * node, start, mid);
        self.build_recursive(data, 2 * node + 1, mid + 1, end);
        self.pull(node);
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`: empty trees cannot be built.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Adds `delta` to every element in `range`.
    ///
    /// # Errors
    /// `InvalidRange` if `range` is empty or not within `0..len`.
    pub fn update_range<R: RangeBounds<usize>>(&mut self, range: R, delta: T) -> Result<(), RangeError> {
        let span = Span::resolve(&range, self.len)?;
        self.update_span(span, delta);
        Ok(())
    }

    pub(crate) fn update_span(&mut self, span: Span, delta: T) {
        #[cfg(feature = "tracing")]
        tracing::trace!(op = Op::NAME, first = span.first, last = span.last, ?delta, "update_range");

        self.update_recursive(1, 0, self.len - 1, span, delta);
    }

    fn update_recursive(&mut self, node: usize, start: usize, end: usize, span: Span, delta: T) {
        if span.is_disjoint(start, end) {
            return;
        }
        if span.covers(start, end) {
            // Stop here; the children inherit `delta` on their next visit.
            self.apply(node, start, end, delta);
            return;
        }
        self.push(node, start, end);
        let mid = midpoint(start, end);
        self.update_recursive(2 * node, start, mid, span, delta);
        self.update_recursive(2 * node + 1, mid + 1, end, span, delta);
        self.pull(node);
    }

    /// Overwrites the element at `index` with `value`, discarding any pending
    /// deltas that covered it.
    ///
    /// # Errors
    /// `InvalidIndex` if `index >= len`.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), RangeError> {
        Span::point(index, self.len)?;

        #[cfg(feature = "tracing")]
        tracing::trace!(op = Op::NAME, index, ?value, "set");

        self.set_recursive(1, 0, self.len - 1, index, value);
        Ok(())
    }

    fn set_recursive(&mut self, node: usize, start: usize, end: usize, index: usize, value: T) {
        if start == end {
            self.aggregate[node] = value;
            return;
        }
        self.push(node, start, end);
        let mid = midpoint(start, end);
        if index <= mid {
            self.set_recursive(2 * node, start, mid, index, value);
        } else {
            self.set_recursive(2 * node + 1, mid + 1, end, index, value);
        }
        self.pull(node);
    }

    /// Combines every element in `range`.
    ///
    /// Takes `&mut self` because the descent pushes pending deltas.
    ///
    /// # Errors
    /// `InvalidRange` if `range` is empty or not within `0..len`.
    pub fn query<R: RangeBounds<usize>>(&mut self, range: R) -> Result<T, RangeError> {
        let span = Span::resolve(&range, self.len)?;
        Ok(self.query_span(span))
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    /// `InvalidIndex` if `index >= len`.
    pub fn get(&mut self, index: usize) -> Result<T, RangeError> {
        let span = Span::point(index, self.len)?;
        Ok(self.query_span(span))
    }

    pub(crate) fn query_span(&mut self, span: Span) -> T {
        let result = self.query_recursive(1, 0, self.len - 1, span);

        #[cfg(feature = "tracing")]
        tracing::trace!(op = Op::NAME, first = span.first, last = span.last, ?result, "query");

        result
    }

    fn query_recursive(&mut self, node: usize, start: usize, end: usize, span: Span) -> T {
        if span.is_disjoint(start, end) {
            return Op::identity();
        }
        if span.covers(start, end) {
            return self.aggregate[node];
        }
        self.push(node, start, end);
        let mid = midpoint(start, end);
        let left = self.query_recursive(2 * node, start, mid, span);
        let right = self.query_recursive(2 * node + 1, mid + 1, end, span);
        Op::combine(left, right)
    }

    /// Materializes the current sequence.
    ///
    /// Equivalent to reading every index, but done in one O(n) walk that
    /// carries parked deltas downward instead of pushing them, so the tree is
    /// left as is.
    pub fn to_vec(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len);
        self.collect_recursive(1, 0, self.len - 1, T::zero(), &mut out);
        out
    }

    fn collect_recursive(&self, node: usize, start: usize, end: usize, carry: T, out: &mut Vec<T>) {
        if start == end {
            out.push(Op::apply(self.aggregate[node], carry, T::one()));
            return;
        }
        let carry = carry + self.pending[node];
        let mid = midpoint(start, end);
        self.collect_recursive(2 * node, start, mid, carry, out);
        self.collect_recursive(2 * node + 1, mid + 1, end, carry, out);
    }
}

impl<T: Element> SumIndex<T> for LazySegmentTree<T, Sum> {
    fn len(&self) -> usize {
        self.len
    }

    fn add(&mut self, index: usize, delta: T) -> Result<(), RangeError> {
        let span = Span::point(index, self.len)?;
        self.update_span(span, delta);
        Ok(())
    }

    fn sum<R: RangeBounds<usize>>(&mut self, range: R) -> Result<T, RangeError> {
        self.query(range)
    }
}

impl<T: Element, Op: RangeOp<T>> TryFrom<Vec<T>> for LazySegmentTree<T, Op> {
    type Error = RangeError;

    fn try_from(data: Vec<T>) -> Result<Self, Self::Error> {
        Self::from_slice(&data)
    }
}

impl<T: Element, Op: RangeOp<T>> From<LazySegmentTree<T, Op>> for Vec<T> {
    fn from(tree: LazySegmentTree<T, Op>) -> Self {
        tree.to_vec()
    }
}

/// Serialized as the materialized sequence.
impl<T: Element + Serialize, Op: RangeOp<T>> Serialize for LazySegmentTree<T, Op> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.to_vec())
    }
}

/// Rebuilt from a sequence, with the same validation as `from_slice`.
impl<'de, T: Element + Deserialize<'de>, Op: RangeOp<T>> Deserialize<'de> for LazySegmentTree<T, Op> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let data = Vec::<T>::deserialize(deserializer)?;
        Self::from_slice(&data).map_err(serde::de::Error::custom)
    }
}
