//! `FenwickTree` — a Binary Indexed Tree for prefix sums.
//!
//! A Fenwick Tree answers prefix sums and applies point updates by walking
//! the low set bit of a 1-based index.
//!
//! Time Complexity:
//! - Build: O(n)
//! - Add: O(log n)
//! - Prefix Sum: O(log n)
//! - Range Sum: O(log n)
//!
//! Space Complexity: O(n)
//!
//! Unlike `LazySegmentTree`, there is no pending state: adding to a range
//! would cost one `add` per element, and minimum queries are not supported at
//! all. This is the price of the much smaller structure, not a gap to fill.

use super::span::Span;
use super::SumIndex;
use crate::RangeError;
use core::ops::{RangeBounds, Sub};
use num_traits::Zero;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A prefix-sum tree over a fixed-length sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenwickTree<T> {
    /// 1-indexed partial sums; index 0 is unused.
    tree: Vec<T>,
}

/// The lowest set bit of `i`.
#[inline]
fn low_bit(i: usize) -> usize {
    i & (!i + 1)
}

impl<T> FenwickTree<T>
where
    T: Copy + Zero + Sub<Output = T>,
{
    /// Creates a tree of `len` zeros.
    ///
    /// # Errors
    /// `EmptySequence` if `len` is 0.
    pub fn zeroed(len: usize) -> Result<Self, RangeError> {
        if len == 0 {
            return Err(RangeError::EmptySequence);
        }
        Ok(Self { tree: vec![T::zero(); len + 1] })
    }

    /// Builds a tree over `data` in O(n).
    ///
    /// # Errors
    /// `EmptySequence` if `data` is empty.
    pub fn from_slice(data: &[T]) -> Result<Self, RangeError> {
        if data.is_empty() {
            return Err(RangeError::EmptySequence);
        }
        let mut tree = Vec::with_capacity(data.len() + 1);
        tree.push(T::zero());
        tree.extend_from_slice(data);

        // Each slot, once complete, folds into the slot responsible for it.
        let n = data.len();
        for i in 1..=n {
            let parent = i + low_bit(i);
            if parent <= n {
                tree[parent] = tree[parent] + tree[i];
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(len = n, "built fenwick tree");

        Ok(Self { tree })
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.tree.len() - 1
    }

    /// Always `false`: empty trees cannot be built.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Adds `delta` to the element at `index`.
    ///
    /// # Errors
    /// `InvalidIndex` if `index >= len`.
    pub fn add(&mut self, index: usize, delta: T) -> Result<(), RangeError> {
        let n = self.len();
        Span::point(index, n)?;

        let mut idx = index + 1;
        while idx <= n {
            self.tree[idx] = self.tree[idx] + delta;
            idx += low_bit(idx);
        }
        Ok(())
    }

    /// Sums `[0, index]`.
    ///
    /// # Errors
    /// `InvalidIndex` if `index >= len`.
    pub fn prefix_sum(&self, index: usize) -> Result<T, RangeError> {
        Span::point(index, self.len())?;
        Ok(self.prefix(index + 1))
    }

    /// Sum of the first `count` elements; `count` is already validated.
    fn prefix(&self, count: usize) -> T {
        let mut sum = T::zero();
        let mut idx = count;
        while idx > 0 {
            sum = sum + self.tree[idx];
            idx -= low_bit(idx);
        }
        sum
    }

    /// Sums the elements in `range`.
    ///
    /// # Errors
    /// `InvalidRange` if `range` is empty or not within `0..len`.
    pub fn range_sum<R: RangeBounds<usize>>(&self, range: R) -> Result<T, RangeError> {
        let span = Span::resolve(&range, self.len())?;
        Ok(self.prefix(span.last + 1) - self.prefix(span.first))
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    /// `InvalidIndex` if `index >= len`.
    pub fn get(&self, index: usize) -> Result<T, RangeError> {
        Span::point(index, self.len())?;
        Ok(self.prefix(index + 1) - self.prefix(index))
    }

    /// Materializes the sequence in O(n) by undoing the build in reverse.
    pub fn to_vec(&self) -> Vec<T> {
        let n = self.len();
        let mut values = self.tree.clone();
        for i in (1..=n).rev() {
            let parent = i + low_bit(i);
            if parent <= n {
                values[parent] = values[parent] - values[i];
            }
        }
        values.remove(0);
        values
    }
}

impl<T> SumIndex<T> for FenwickTree<T>
where
    T: Copy + Zero + Sub<Output = T>,
{
    fn len(&self) -> usize {
        self.tree.len() - 1
    }

    fn add(&mut self, index: usize, delta: T) -> Result<(), RangeError> {
        FenwickTree::add(self, index, delta)
    }

    fn sum<R: RangeBounds<usize>>(&mut self, range: R) -> Result<T, RangeError> {
        self.range_sum(range)
    }
}

impl<T> TryFrom<Vec<T>> for FenwickTree<T>
where
    T: Copy + Zero + Sub<Output = T>,
{
    type Error = RangeError;

    fn try_from(data: Vec<T>) -> Result<Self, Self::Error> {
        Self::from_slice(&data)
    }
}

impl<T> Serialize for FenwickTree<T>
where
    T: Copy + Zero + Sub<Output = T> + Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.to_vec())
    }
}

impl<'de, T> Deserialize<'de> for FenwickTree<T>
where
    T: Copy + Zero + Sub<Output = T> + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let data = Vec::<T>::deserialize(deserializer)?;
        Self::from_slice(&data).map_err(serde::de::Error::custom)
    }
}
