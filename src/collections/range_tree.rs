//! `RangeAggregateTree` — range sum and range minimum over one sequence.
//!
//! Sum and minimum need different rules for folding a pending delta into an
//! aggregate (`+ delta * len` versus `+ delta`), so they cannot share node
//! storage. This type owns one tree per operator and drives both with every
//! mutation. Validation happens once up front, so a rejected call leaves both
//! trees untouched.

use super::span::Span;
use super::{LazySegmentTree, Min, Sum, SumIndex};
use crate::{Element, RangeError};
use core::ops::RangeBounds;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A sequence answering range sums and range minimums under range adds.
#[derive(Debug, Clone)]
pub struct RangeAggregateTree<T> {
    sum: LazySegmentTree<T, Sum>,
    min: LazySegmentTree<T, Min>,
}

impl<T: Element> RangeAggregateTree<T> {
    /// Builds both trees over `data` in O(n).
    ///
    /// # Errors
    /// - `EmptySequence` if `data` is empty.
    /// - `NumericOverflow` if `data.len()` is not representable in `T`; the
    ///   sum tree scales deltas by node width.
    pub fn from_slice(data: &[T]) -> Result<Self, RangeError> {
        Ok(Self {
            sum: LazySegmentTree::from_slice(data)?,
            min: LazySegmentTree::from_slice(data)?,
        })
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.sum.len()
    }

    /// Always `false`: empty trees cannot be built.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sum.is_empty()
    }

    /// Adds `delta` to every element in `range`.
    ///
    /// # Errors
    /// `InvalidRange` if `range` is empty or not within `0..len`.
    pub fn update_range<R: RangeBounds<usize>>(&mut self, range: R, delta: T) -> Result<(), RangeError> {
        let span = Span::resolve(&range, self.len())?;
        self.sum.update_span(span, delta);
        self.min.update_span(span, delta);
        Ok(())
    }

    /// Sets the element at `index` to `value`.
    ///
    /// # Errors
    /// `InvalidIndex` if `index >= len`.
    pub fn update_point(&mut self, index: usize, value: T) -> Result<(), RangeError> {
        self.sum.set(index, value)?;
        self.min.set(index, value)
    }

    /// Sums the elements in `range`.
    ///
    /// # Errors
    /// `InvalidRange` if `range` is empty or not within `0..len`.
    pub fn query_sum<R: RangeBounds<usize>>(&mut self, range: R) -> Result<T, RangeError> {
        self.sum.query(range)
    }

    /// Returns the minimum element in `range`.
    ///
    /// # Errors
    /// `InvalidRange` if `range` is empty or not within `0..len`.
    pub fn query_min<R: RangeBounds<usize>>(&mut self, range: R) -> Result<T, RangeError> {
        self.min.query(range)
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    /// `InvalidIndex` if `index >= len`.
    pub fn get(&mut self, index: usize) -> Result<T, RangeError> {
        self.sum.get(index)
    }

    /// Materializes the current sequence.
    pub fn to_vec(&self) -> Vec<T> {
        self.sum.to_vec()
    }
}

impl<T: Element> SumIndex<T> for RangeAggregateTree<T> {
    fn len(&self) -> usize {
        self.sum.len()
    }

    fn add(&mut self, index: usize, delta: T) -> Result<(), RangeError> {
        let span = Span::point(index, self.len())?;
        self.sum.update_span(span, delta);
        self.min.update_span(span, delta);
        Ok(())
    }

    fn sum<R: RangeBounds<usize>>(&mut self, range: R) -> Result<T, RangeError> {
        self.query_sum(range)
    }
}

impl<T: Element> TryFrom<Vec<T>> for RangeAggregateTree<T> {
    type Error = RangeError;

    fn try_from(data: Vec<T>) -> Result<Self, Self::Error> {
        Self::from_slice(&data)
    }
}

impl<T: Element + Serialize> Serialize for RangeAggregateTree<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.sum.serialize(serializer)
    }
}

impl<'de, T: Element + Deserialize<'de>> Deserialize<'de> for RangeAggregateTree<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let data = Vec::<T>::deserialize(deserializer)?;
        Self::from_slice(&data).map_err(serde::de::Error::custom)
    }
}
