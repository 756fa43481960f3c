//! Normalization of `RangeBounds<usize>` into checked inclusive spans.

use crate::RangeError;
use core::ops::{Bound, RangeBounds};

/// A validated, non-empty, inclusive index span `[first, last]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Span {
    pub(crate) first: usize,
    pub(crate) last: usize,
}

impl Span {
    /// Resolves `range` against a sequence of length `len`.
    ///
    /// Fails with `InvalidRange` if the range is empty, reversed or reaches
    /// past `len - 1`.
    pub(crate) fn resolve(range: &impl RangeBounds<usize>, len: usize) -> Result<Self, RangeError> {
        let start = match range.start_bound() {
            Bound::Included(&s) => s,
            Bound::Excluded(&s) => s.saturating_add(1),
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&e) => e.saturating_add(1),
            Bound::Excluded(&e) => e,
            Bound::Unbounded => len,
        };
        // A bound saturated at usize::MAX always fails one of these checks.
        if start >= end || end > len {
            return Err(RangeError::InvalidRange { start, end, len });
        }
        Ok(Self { first: start, last: end - 1 })
    }

    /// Checks a single index against a sequence of length `len`.
    pub(crate) fn point(index: usize, len: usize) -> Result<Self, RangeError> {
        if index >= len {
            return Err(RangeError::InvalidIndex { index, len });
        }
        Ok(Self { first: index, last: index })
    }

    /// Whether `[start, end]` lies entirely inside the span.
    #[inline]
    pub(crate) fn covers(self, start: usize, end: usize) -> bool {
        self.first <= start && end <= self.last
    }

    /// Whether `[start, end]` shares no index with the span.
    #[inline]
    pub(crate) fn is_disjoint(self, start: usize, end: usize) -> bool {
        end < self.first || start > self.last
    }
}
