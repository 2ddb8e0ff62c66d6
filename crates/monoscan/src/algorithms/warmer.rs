//! Distance to the next strictly greater value ("next warmer day").
//!
//! ## Purpose
//!
//! For every position `i`, find the smallest `d > 0` with
//! `temps[i + d] > temps[i]`, or `0` when no later value is greater.
//!
//! ## Key concepts
//!
//! * **Right-to-left scan**: Indices are visited from `n - 1` down to `0`.
//! * **Strictly decreasing deque**: Residents not greater than the current
//!   value can never answer an earlier position, so they are evicted. An equal
//!   value is not warmer, and the current one is nearer anyway.
//! * **Answer before push**: After eviction the back item, if any, is the
//!   nearest strictly greater value to the right.
//!
//! ## Invariants
//!
//! * Every output slot is written exactly once.
//! * At most `2n` deque operations.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// Internal dependencies
use crate::primitives::buffer::ResultBuffer;
use crate::primitives::deque::{DequeStats, Item, MonotonicDeque, StrictlyDecreasing};

/// Scan state for the next-warmer finder.
#[derive(Debug, Clone)]
pub struct WarmerScan<T> {
    deque: MonotonicDeque<T, StrictlyDecreasing>,
    distances: ResultBuffer<usize>,
}

impl<T: PartialOrd + Copy> WarmerScan<T> {
    /// Prepare a scan over `n` elements.
    pub fn new(n: usize) -> Self {
        Self {
            deque: MonotonicDeque::with_capacity(n),
            distances: ResultBuffer::new(n, 0),
        }
    }

    /// Visit one element. Items must arrive in strictly descending index order.
    pub fn step(&mut self, current: Item<T>) {
        self.deque.evict_dominated_back(&current.value);

        let distance = if self.deque.is_empty() {
            0
        } else {
            self.deque.back().index - current.index
        };
        self.distances.write(current.index, distance);

        self.deque.push_back(current);
    }

    /// Run the full right-to-left pass over `temps`.
    pub fn run(temps: &[T]) -> (Vec<usize>, DequeStats) {
        let mut scan = Self::new(temps.len());
        for (index, &value) in temps.iter().enumerate().rev() {
            scan.step(Item::new(value, index));
        }
        scan.finish()
    }

    /// Return the distances and the deque counters.
    pub fn finish(self) -> (Vec<usize>, DequeStats) {
        (self.distances.finish(), self.deque.stats())
    }
}

/// Distance from each position to the next strictly greater value, `0` if none.
///
/// Equal values are not warmer:
///
/// ```
/// use monoscan::next_warmer_distances;
///
/// let temps = [73, 74, 75, 71, 69, 72, 76, 73];
/// assert_eq!(next_warmer_distances(&temps), vec![1, 1, 4, 2, 1, 1, 0, 0]);
/// assert_eq!(next_warmer_distances(&[5, 5, 5, 6]), vec![3, 2, 1, 0]);
/// ```
pub fn next_warmer_distances<T: PartialOrd + Copy>(temps: &[T]) -> Vec<usize> {
    WarmerScan::run(temps).0
}
