//! 132-pattern detection.
//!
//! ## Purpose
//!
//! Decide whether a sequence contains indices `i < j < k` with
//! `nums[i] < nums[k] < nums[j]`, and report one such triple.
//!
//! ## Key concepts
//!
//! * **Right-to-left scan** over a non-increasing deque, the same eviction
//!   direction as the next-warmer finder.
//! * **Candidate middle**: Every evicted value is smaller than the element
//!   that evicted it, which sits further left. The largest value evicted so
//!   far is therefore the best available `nums[k]`, with its evictor as `nums[j]`.
//! * **Detection**: Any later-visited (further left) value strictly below the
//!   candidate completes the triple as `nums[i]`.
//!
//! ## Invariants
//!
//! * The candidate is `None` until the first eviction, so no sentinel value
//!   is ever compared against the input.
//! * At most `2n` deque operations.

// Internal dependencies
use crate::primitives::deque::{DequeStats, Item, MonotonicDeque, NonIncreasing};

/// Indices of a 132 pattern: `i < j < k` and `nums[i] < nums[k] < nums[j]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Witness {
    /// The "1": smallest of the three, leftmost.
    pub i: usize,

    /// The "3": largest of the three, in the middle.
    pub j: usize,

    /// The "2": between the other two in value, rightmost.
    pub k: usize,
}

#[derive(Debug, Clone, Copy)]
struct Candidate<T> {
    middle: Item<T>,
    peak: usize,
}

/// Scan state for the 132-pattern detector.
#[derive(Debug, Clone)]
pub struct PatternScan<T> {
    deque: MonotonicDeque<T, NonIncreasing>,
    candidate: Option<Candidate<T>>,
}

impl<T: PartialOrd + Copy> PatternScan<T> {
    /// Prepare a scan over `n` elements.
    pub fn new(n: usize) -> Self {
        Self {
            deque: MonotonicDeque::with_capacity(n),
            candidate: None,
        }
    }

    /// Visit one element, in strictly descending index order.
    ///
    /// Returns the completed triple as soon as `current` closes one.
    pub fn step(&mut self, current: Item<T>) -> Option<Witness> {
        if let Some(c) = &self.candidate {
            if current.value < c.middle.value {
                return Some(Witness {
                    i: current.index,
                    j: c.peak,
                    k: c.middle.index,
                });
            }
        }

        let peak = current.index;
        let candidate = &mut self.candidate;
        self.deque.push_back_with(current, |evicted| {
            if candidate
                .as_ref()
                .map_or(true, |c| evicted.value > c.middle.value)
            {
                *candidate = Some(Candidate {
                    middle: evicted,
                    peak,
                });
            }
        });

        None
    }

    /// Value currently playing the role of `nums[k]`, if any.
    pub fn candidate_middle(&self) -> Option<T> {
        self.candidate.as_ref().map(|c| c.middle.value)
    }

    /// Run the right-to-left pass, stopping at the first triple.
    pub fn run(nums: &[T]) -> (Option<Witness>, DequeStats) {
        let mut scan = Self::new(nums.len());
        for (index, &value) in nums.iter().enumerate().rev() {
            if let Some(witness) = scan.step(Item::new(value, index)) {
                return (Some(witness), scan.deque.stats());
            }
        }
        (None, scan.deque.stats())
    }
}

/// One 132 pattern in `nums`, if any exists.
///
/// ```
/// use monoscan::find_132_pattern;
///
/// let nums = [-1, 3, 2, 0];
/// let w = find_132_pattern(&nums).unwrap();
/// assert!(w.i < w.j && w.j < w.k);
/// assert!(nums[w.i] < nums[w.k] && nums[w.k] < nums[w.j]);
/// ```
pub fn find_132_pattern<T: PartialOrd + Copy>(nums: &[T]) -> Option<Witness> {
    PatternScan::run(nums).0
}

/// Whether `nums` contains `i < j < k` with `nums[i] < nums[k] < nums[j]`.
///
/// ```
/// use monoscan::has_132_pattern;
///
/// assert!(has_132_pattern(&[-1, 3, 2, 0]));
/// assert!(!has_132_pattern(&[1, 2, 3, 4]));
/// ```
pub fn has_132_pattern<T: PartialOrd + Copy>(nums: &[T]) -> bool {
    find_132_pattern(nums).is_some()
}
