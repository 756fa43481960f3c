//! The numeric element abstraction shared by every tree.
//!
//! Trees store elements of any type that supports addition, subtraction and
//! multiplication, a total order for minimum queries, an additive identity and
//! a maximum sentinel. The bounds are expressed through `num-traits` and
//! collected into [`Element`], which is blanket-implemented for every type
//! satisfying them (all primitive integers and floats).
//!
//! ## Overflow
//!
//! Aggregates are combined with the element type's own arithmetic. No overflow
//! checking happens inside the trees: a sum that does not fit `T` panics in
//! debug builds and wraps in release builds for primitive integers. Pick a
//! type wide enough for `n * max(|element|)`.

use core::fmt::Debug;
use num_traits::{Bounded, Num, NumCast};

/// A numeric value that can be stored in a range tree.
pub trait Element: Copy + PartialOrd + Debug + Num + Bounded + NumCast {
    /// Converts a node width into the element type.
    ///
    /// Returns `None` if `len` is not representable in `Self`.
    #[inline]
    fn from_len(len: usize) -> Option<Self> {
        <Self as NumCast>::from(len)
    }

    /// The smaller of two elements. Incomparable values (NaN) keep `self`.
    #[inline]
    #[must_use]
    fn min_of(self, other: Self) -> Self {
        if other < self {
            other
        } else {
            self
        }
    }
}

impl<T> Element for T where T: Copy + PartialOrd + Debug + Num + Bounded + NumCast {}
