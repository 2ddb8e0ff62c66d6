//! Sliding window maximum and minimum.
//!
//! The deque keeps the candidates for the current window's extremum at the
//! front. Items whose index has left the trailing window are removed from
//! the front with `evict_front_while`; dominated items are removed from the
//! back on insertion.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// Internal dependencies
use crate::primitives::deque::{
    DequeStats, Item, MonotonicDeque, Monotonicity, StrictlyDecreasing, StrictlyIncreasing,
};

/// Extremum of every full trailing window of length `window`, selected by the order `M`.
///
/// `StrictlyDecreasing` yields maxima, `StrictlyIncreasing` yields minima.
///
/// # Panics
///
/// Panics if `window` is zero.
pub fn sliding_extrema<T, M>(nums: &[T], window: usize) -> (Vec<T>, DequeStats)
where
    T: PartialOrd + Copy,
    M: Monotonicity,
{
    assert!(window > 0, "sliding window must span at least one element");

    let n = nums.len();
    let mut out = Vec::with_capacity((n + 1).saturating_sub(window));
    let mut deque = MonotonicDeque::<T, M>::with_capacity(window.min(n));

    for (i, &value) in nums.iter().enumerate() {
        deque.evict_front_while(|front| front.index + window <= i);
        deque.push_back(Item::new(value, i));

        if i + 1 >= window {
            out.push(deque.front().value);
        }
    }

    (out, deque.stats())
}

/// Maximum of each full window of length `window`; empty if `nums` is shorter.
///
/// ```
/// use monoscan::sliding_window_max;
///
/// assert_eq!(sliding_window_max(&[1, 3, -1, -3, 5, 3, 6, 7], 3), vec![3, 3, 5, 5, 6, 7]);
/// ```
pub fn sliding_window_max<T: PartialOrd + Copy>(nums: &[T], window: usize) -> Vec<T> {
    sliding_extrema::<T, StrictlyDecreasing>(nums, window).0
}

/// Minimum of each full window of length `window`; empty if `nums` is shorter.
pub fn sliding_window_min<T: PartialOrd + Copy>(nums: &[T], window: usize) -> Vec<T> {
    sliding_extrema::<T, StrictlyIncreasing>(nums, window).0
}
