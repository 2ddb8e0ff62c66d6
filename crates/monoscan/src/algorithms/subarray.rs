//! Shortest contiguous subarray with sum at least `K`.
//!
//! ## Purpose
//!
//! Given signed values and a positive threshold `K`, find the length of the
//! shortest non-empty window whose sum is `>= K`. Negative values make the
//! two-pointer technique unusable, so the scan works on prefix sums.
//!
//! ## Key concepts
//!
//! * **Prefix sums**: `P[j]` is the sum of `nums[0..j]`, so the window
//!   `nums[a..b]` sums to `P[b] - P[a]`. `P[0] = 0` is pushed first as the seed.
//! * **Back eviction**: A prefix that is not smaller than a later one can
//!   never be the left end of a better window, so the deque keeps prefix
//!   sums strictly increasing.
//! * **Front eviction**: Once the front reaches the threshold for the current
//!   right end, any later right end would only give a longer window with it,
//!   so it is recorded and dropped.
//!
//! ## Invariants
//!
//! * Prefix values in the deque are strictly increasing from front to back.
//! * At most `2(n + 1)` deque operations, counting the seed.
//!
//! ## Non-goals
//!
//! * `K <= 0` is outside the domain; the engine layer rejects it.
//! * Prefix sums that do not fit `T` are not wrapped. `try_step` and
//!   `checked_run` report them as `None`; `step` and `run` panic.

// Internal dependencies
use crate::primitives::deque::{DequeStats, Item, MonotonicDeque, StrictlyIncreasing};
use crate::primitives::scalar::Scalar;

/// A half-open window `start..end` of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    /// First element of the window.
    pub start: usize,

    /// One past the last element of the window.
    pub end: usize,
}

impl Window {
    /// Number of elements in the window.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the window is empty (never the case for a reported window).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }
}

/// Scan state for the shortest-subarray solver.
#[derive(Debug, Clone)]
pub struct SubarrayScan<T> {
    deque: MonotonicDeque<T, StrictlyIncreasing>,
    threshold: T,
    prefix: T,
    position: usize,
    best: Option<Window>,
}

impl<T: Scalar> SubarrayScan<T> {
    /// Prepare a scan over `n` elements with sum threshold `threshold`.
    pub fn new(n: usize, threshold: T) -> Self {
        let mut deque = MonotonicDeque::with_capacity(n + 1);
        deque.push_back(Item::new(T::zero(), 0));
        Self {
            deque,
            threshold,
            prefix: T::zero(),
            position: 0,
            best: None,
        }
    }

    /// Extend the prefix by the next element, left to right.
    ///
    /// # Panics
    ///
    /// Panics if the prefix sum does not fit `T`.
    #[track_caller]
    pub fn step(&mut self, value: T) {
        if self.try_step(value).is_none() {
            panic!("prefix sum overflows the value type");
        }
    }

    /// Like [`step`](Self::step), returning `None` (with the scan unchanged)
    /// if the prefix sum does not fit `T`.
    pub fn try_step(&mut self, value: T) -> Option<()> {
        let prefix = self.prefix.checked_add_value(value)?;
        self.prefix = prefix;
        self.position += 1;

        self.deque.evict_dominated_back(&prefix);

        // Everything left is strictly below `prefix`, so the difference is
        // positive. A difference too large for `T` certainly reaches the threshold.
        while !self.deque.is_empty()
            && prefix
                .checked_sub_value(self.deque.front().value)
                .map_or(true, |sum| sum >= self.threshold)
        {
            let left = self.deque.pop_front();
            let candidate = Window {
                start: left.index,
                end: self.position,
            };
            if self.best.map_or(true, |b| candidate.len() < b.len()) {
                self.best = Some(candidate);
            }
        }

        self.deque.push_back(Item::new(prefix, self.position));
        Some(())
    }

    /// Shortest qualifying window seen so far.
    #[inline]
    pub fn best(&self) -> Option<Window> {
        self.best
    }

    /// Run the full pass over `nums`.
    ///
    /// # Panics
    ///
    /// Panics if a prefix sum does not fit `T`.
    #[track_caller]
    pub fn run(nums: &[T], threshold: T) -> (Option<Window>, DequeStats) {
        match Self::checked_run(nums, threshold) {
            Some(outcome) => outcome,
            None => panic!("prefix sum overflows the value type"),
        }
    }

    /// Like [`run`](Self::run), returning `None` if a prefix sum does not fit `T`.
    pub fn checked_run(nums: &[T], threshold: T) -> Option<(Option<Window>, DequeStats)> {
        let mut scan = Self::new(nums.len(), threshold);
        for &value in nums {
            scan.try_step(value)?;
        }
        Some((scan.best, scan.deque.stats()))
    }
}

/// Length of the shortest contiguous subarray of `nums` with sum `>= k`.
///
/// `None` means no window reaches `k`. Requires `k > 0`.
///
/// # Panics
///
/// Panics if a prefix sum does not fit `T`.
///
/// ```
/// use monoscan::shortest_subarray_at_least_k;
///
/// assert_eq!(shortest_subarray_at_least_k(&[2, -1, 2], 3), Some(3));
/// assert_eq!(shortest_subarray_at_least_k(&[1, 2], 4), None);
/// ```
pub fn shortest_subarray_at_least_k<T: Scalar>(nums: &[T], k: T) -> Option<usize> {
    SubarrayScan::run(nums, k).0.map(|w| w.len())
}
