//! Combine operators for `LazySegmentTree`.
//!
//! An operator fixes three things: the identity contributed by ranges outside
//! a query, how two children merge into their parent, and how an additive
//! delta is folded into an aggregate covering `len` elements. The last rule is
//! what differs between sum and minimum, which is why a tree is bound to a
//! single operator.

use crate::Element;

/// A combine operator together with its lazy-apply rule.
///
/// Implementations must satisfy, for all `a`, `b`, `d` and widths `m`, `n`:
/// - `combine(a, identity()) == a`
/// - `combine` is associative
/// - `apply(combine(a, b), d, m + n) == combine(apply(a, d, m), apply(b, d, n))`
pub trait RangeOp<T: Element> {
    /// Short name used in logs.
    const NAME: &'static str;

    /// Whether `apply` uses the node width. Only then must the sequence
    /// length be representable in `T`.
    const SCALES_BY_WIDTH: bool;

    /// The value contributed by an empty range.
    fn identity() -> T;

    /// Merges two adjacent aggregates.
    fn combine(left: T, right: T) -> T;

    /// Folds `delta`, added to each of `len` elements, into their aggregate.
    ///
    /// `len` is the node width converted into `T`.
    fn apply(aggregate: T, delta: T, len: T) -> T;
}

/// Range sum. A delta over `len` elements moves the sum by `delta * len`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sum;

impl<T: Element> RangeOp<T> for Sum {
    const NAME: &'static str = "sum";
    const SCALES_BY_WIDTH: bool = true;

    #[inline]
    fn identity() -> T {
        T::zero()
    }

    #[inline]
    fn combine(left: T, right: T) -> T {
        left + right
    }

    #[inline]
    fn apply(aggregate: T, delta: T, len: T) -> T {
        aggregate + delta * len
    }
}

/// Range minimum. A uniform delta moves the minimum by exactly `delta`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Min;

impl<T: Element> RangeOp<T> for Min {
    const NAME: &'static str = "min";
    const SCALES_BY_WIDTH: bool = false;

    #[inline]
    fn identity() -> T {
        T::max_value()
    }

    #[inline]
    fn combine(left: T, right: T) -> T {
        left.min_of(right)
    }

    #[inline]
    fn apply(aggregate: T, delta: T, _len: T) -> T {
        aggregate + delta
    }
}
