//! Error kinds returned by tree operations.

use core::fmt;

/// The error type for range tree operations.
///
/// Every error is reported synchronously by the call that caused it, and a
/// failed call leaves the tree untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    /// The range is empty, reversed, or extends past the end of the sequence.
    ///
    /// `start..end` is the range normalized to half-open form.
    InvalidRange {
        /// First index of the range.
        start: usize,
        /// One past the last index of the range.
        end: usize,
        /// Length of the sequence.
        len: usize,
    },
    /// A single index is outside `0..len`.
    InvalidIndex {
        /// The offending index.
        index: usize,
        /// Length of the sequence.
        len: usize,
    },
    /// A tree was requested over an empty sequence.
    EmptySequence,
    /// The sequence length cannot be represented in the element type, so
    /// range deltas cannot be scaled by node width.
    NumericOverflow {
        /// Length of the sequence.
        len: usize,
    },
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRange { start, end, len } => {
                write!(f, "invalid range {start}..{end} for sequence of length {len}")
            }
            Self::InvalidIndex { index, len } => {
                write!(f, "index {index} out of bounds for sequence of length {len}")
            }
            Self::EmptySequence => f.write_str("cannot build a tree over an empty sequence"),
            Self::NumericOverflow { len } => {
                write!(f, "sequence length {len} is not representable in the element type")
            }
        }
    }
}

impl std::error::Error for RangeError {}
