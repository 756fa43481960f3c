//! The push/apply protocol.
//!
//! A node's `aggregate` always reflects its own `pending` delta; the delta is
//! only *owed* to the children. Before any descent passes through an internal
//! node, `push` settles that debt: both children absorb the delta into their
//! aggregates (scaled by their own width for `Sum`) and park it in their own
//! `pending`, then the parent's `pending` is cleared. Leaves have no children,
//! so `apply` never parks anything on them.

use super::{LazySegmentTree, RangeOp};
use crate::Element;

impl<T: Element, Op: RangeOp<T>> LazySegmentTree<T, Op> {
    /// Adds `delta` to every element under `node`, which covers `[start, end]`.
    ///
    /// The node's aggregate is corrected immediately; the children are not
    /// touched.
    #[inline]
    pub(super) fn apply(&mut self, node: usize, start: usize, end: usize, delta: T) {
        self.aggregate[node] = Op::apply(self.aggregate[node], delta, width(end - start + 1));
        if start != end {
            self.pending[node] = self.pending[node] + delta;
        }
    }

    /// Forwards the pending delta of `node` to its two children.
    #[inline]
    pub(super) fn push(&mut self, node: usize, start: usize, end: usize) {
        let delta = self.pending[node];
        if start == end || delta.is_zero() {
            return;
        }
        let mid = midpoint(start, end);
        self.apply(2 * node, start, mid, delta);
        self.apply(2 * node + 1, mid + 1, end, delta);
        self.pending[node] = T::zero();
    }

    /// Recomputes `node` from its children.
    #[inline]
    pub(super) fn pull(&mut self, node: usize) {
        self.aggregate[node] = Op::combine(self.aggregate[2 * node], self.aggregate[2 * node + 1]);
    }
}

/// Splits `[start, end]` into `[start, mid]` and `[mid + 1, end]`.
#[inline]
pub(super) fn midpoint(start: usize, end: usize) -> usize {
    start + (end - start) / 2
}

/// A node width as an element.
///
/// For operators that scale by width, construction rejects sequences whose
/// length does not fit `T`, and every node is at most that wide. Other
/// operators ignore the value.
#[inline]
fn width<T: Element>(len: usize) -> T {
    T::from_len(len).unwrap_or_else(T::max_value)
}
