//! Property-testing support: operation strategies and a naive reference model.
//!
//! Enabled for this crate's own tests and, for downstream crates, through the
//! `proptest` feature.

use crate::RangeError;
use proptest::prelude::*;

/// One call against a range tree, with an inclusive `[start, end]` range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// `update_range(start..=end, delta)`
    AddRange {
        /// First index.
        start: usize,
        /// Last index.
        end: usize,
        /// Added to every element.
        delta: i64,
    },
    /// `update_point(index, value)`
    Set {
        /// Target index.
        index: usize,
        /// New value.
        value: i64,
    },
    /// `query_sum(start..=end)`
    QuerySum {
        /// First index.
        start: usize,
        /// Last index.
        end: usize,
    },
    /// `query_min(start..=end)`
    QueryMin {
        /// First index.
        start: usize,
        /// Last index.
        end: usize,
    },
}

/// Element values small enough that no sum over a generated sequence overflows `i64`.
pub fn values() -> impl Strategy<Value = i64> {
    -1_000i64..1_000
}

/// A non-empty sequence with at most `max_len` elements.
pub fn sequence(max_len: usize) -> impl Strategy<Value = Vec<i64>> {
    proptest::collection::vec(values(), 1..=max_len.max(1))
}

/// An ordered, valid inclusive range over a sequence of length `len`.
pub fn span(len: usize) -> impl Strategy<Value = (usize, usize)> {
    (0..len, 0..len).prop_map(|(a, b)| (a.min(b), a.max(b)))
}

/// A single valid operation over a sequence of length `len`.
pub fn operation(len: usize) -> impl Strategy<Value = Operation> {
    prop_oneof![
        (span(len), values()).prop_map(|((start, end), delta)| Operation::AddRange { start, end, delta }),
        (0..len, values()).prop_map(|(index, value)| Operation::Set { index, value }),
        span(len).prop_map(|(start, end)| Operation::QuerySum { start, end }),
        span(len).prop_map(|(start, end)| Operation::QueryMin { start, end }),
    ]
}

/// A sequence together with up to `max_ops` operations valid for it.
pub fn scenario(max_len: usize, max_ops: usize) -> impl Strategy<Value = (Vec<i64>, Vec<Operation>)> {
    sequence(max_len).prop_flat_map(move |data| {
        let ops = proptest::collection::vec(operation(data.len()), 0..=max_ops);
        (Just(data), ops)
    })
}

/// A plain `Vec` answering the same calls by brute force.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    values: Vec<i64>,
}

impl Model {
    /// Wraps an initial sequence.
    pub fn new(values: Vec<i64>) -> Self {
        Self { values }
    }

    /// The current sequence.
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    fn check(&self, start: usize, end: usize) -> Result<(), RangeError> {
        let len = self.values.len();
        if start > end || end >= len {
            return Err(RangeError::InvalidRange { start, end: end.saturating_add(1), len });
        }
        Ok(())
    }

    /// Adds `delta` to `[start, end]`.
    ///
    /// # Errors
    /// `InvalidRange` on a reversed or out-of-bounds range.
    pub fn add_range(&mut self, start: usize, end: usize, delta: i64) -> Result<(), RangeError> {
        self.check(start, end)?;
        for v in &mut self.values[start..=end] {
            *v += delta;
        }
        Ok(())
    }

    /// Sets the element at `index`.
    ///
    /// # Errors
    /// `InvalidIndex` if `index` is out of bounds.
    pub fn set(&mut self, index: usize, value: i64) -> Result<(), RangeError> {
        let len = self.values.len();
        let slot = self.values.get_mut(index).ok_or(RangeError::InvalidIndex { index, len })?;
        *slot = value;
        Ok(())
    }

    /// Sum over `[start, end]`.
    ///
    /// # Errors
    /// `InvalidRange` on a reversed or out-of-bounds range.
    pub fn sum(&self, start: usize, end: usize) -> Result<i64, RangeError> {
        self.check(start, end)?;
        Ok(self.values[start..=end].iter().sum())
    }

    /// Minimum over `[start, end]`.
    ///
    /// # Errors
    /// `InvalidRange` on a reversed or out-of-bounds range.
    pub fn min(&self, start: usize, end: usize) -> Result<i64, RangeError> {
        self.check(start, end)?;
        Ok(self.values[start..=end].iter().copied().min().unwrap_or(i64::MAX))
    }
}
