//! Largest rectangle in a histogram.
//!
//! ## Purpose
//!
//! Given bar heights, find the maximum area of an axis-aligned rectangle that
//! fits under the bars. The rectangle that uses bar `i` as its limiting height
//! extends up to (not including) the nearest strictly shorter bar on each side.
//!
//! ## Key concepts
//!
//! * **Two passes, one type**: The left pass pushes onto the back scanning
//!   left-to-right, the right pass pushes onto the front scanning
//!   right-to-left. Both are `MonotonicDeque<T, StrictlyIncreasing>`.
//! * **Tie-break**: Eviction uses `>=`, so an equal-height neighbour is
//!   evicted rather than reported as a boundary.
//! * **Combination pass**: `area(i) = heights[i] * (right[i] - left[i] - 1)`,
//!   with a missing left boundary read as `-1` and a missing right boundary as `n`.
//!
//! ## Invariants
//!
//! * `left[i] < i < right[i]` whenever the boundary exists.
//! * Every bar strictly between `left[i]` and `right[i]` is at least `heights[i]` tall.
//! * Each pass costs at most `2n` deque operations.
//!
//! ## Non-goals
//!
//! * Areas that do not fit `T` are not wrapped or saturated. `checked_run`
//!   reports them as `None`; `run` and `largest_rectangle_area` panic.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// Internal dependencies
use crate::primitives::buffer::ResultBuffer;
use crate::primitives::deque::{DequeStats, Item, MonotonicDeque, StrictlyIncreasing};
use crate::primitives::scalar::Scalar;

// ============================================================================
// Boundaries
// ============================================================================

/// Nearest strictly shorter bar on each side of every bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Boundaries {
    /// Index of the nearest strictly shorter bar to the left, `None` if there is none.
    pub left: Vec<Option<usize>>,

    /// Index of the nearest strictly shorter bar to the right, `None` if there is none.
    pub right: Vec<Option<usize>>,
}

impl Boundaries {
    /// Number of bars.
    #[inline]
    pub fn len(&self) -> usize {
        self.left.len()
    }

    /// Whether there are no bars.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }

    /// Inclusive `(start, end)` extent of the rectangle limited by bar `i`.
    #[inline]
    pub fn span(&self, i: usize) -> (usize, usize) {
        let start = self.left[i].map_or(0, |l| l + 1);
        let end = self.right[i].unwrap_or(self.len()) - 1;
        (start, end)
    }

    /// Number of bars covered by the rectangle limited by bar `i`.
    #[inline]
    pub fn width(&self, i: usize) -> usize {
        let (start, end) = self.span(i);
        end - start + 1
    }
}

// ============================================================================
// Boundary Passes
// ============================================================================

fn left_pass<T: PartialOrd + Copy>(heights: &[T]) -> (Vec<Option<usize>>, DequeStats) {
    let n = heights.len();
    let mut deque = MonotonicDeque::<T, StrictlyIncreasing>::with_capacity(n);
    let mut left = ResultBuffer::new(n, None);

    for (i, &h) in heights.iter().enumerate() {
        deque.evict_dominated_back(&h);
        left.write(i, (!deque.is_empty()).then(|| deque.back().index));
        deque.push_back(Item::new(h, i));
    }

    (left.finish(), deque.stats())
}

fn right_pass<T: PartialOrd + Copy>(heights: &[T]) -> (Vec<Option<usize>>, DequeStats) {
    let n = heights.len();
    let mut deque = MonotonicDeque::<T, StrictlyIncreasing>::with_capacity(n);
    let mut right = ResultBuffer::new(n, None);

    for (i, &h) in heights.iter().enumerate().rev() {
        deque.evict_dominated_front(&h);
        right.write(i, (!deque.is_empty()).then(|| deque.front().index));
        deque.push_front(Item::new(h, i));
    }

    (right.finish(), deque.stats())
}

/// Nearest strictly shorter bar on each side of every bar.
pub fn nearest_shorter_boundaries<T: PartialOrd + Copy>(heights: &[T]) -> Boundaries {
    let (left, _) = left_pass(heights);
    let (right, _) = right_pass(heights);
    Boundaries { left, right }
}

// ============================================================================
// Histogram Scan
// ============================================================================

/// A maximal rectangle, limited in height by one bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle<T> {
    /// Rectangle area.
    pub area: T,

    /// Index of the bar whose height limits the rectangle.
    pub bar: usize,

    /// First covered bar (inclusive).
    pub start: usize,

    /// Last covered bar (inclusive).
    pub end: usize,
}

/// Outcome of a full histogram scan.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramScan<T> {
    /// Boundary arrays from both passes.
    pub boundaries: Boundaries,

    /// Largest rectangle, `None` for an empty histogram.
    pub best: Option<Rectangle<T>>,

    /// Deque counters summed over both passes.
    pub stats: DequeStats,
}

impl<T: Scalar> HistogramScan<T> {
    /// Run both boundary passes and the combination pass.
    ///
    /// When several bars reach the maximum area the lowest index wins.
    ///
    /// # Panics
    ///
    /// Panics if a candidate area does not fit `T`.
    #[track_caller]
    pub fn run(heights: &[T]) -> Self {
        match Self::checked_run(heights) {
            Some(scan) => scan,
            None => panic!("rectangle area overflows the value type"),
        }
    }

    /// Like [`run`](Self::run), returning `None` if a candidate area does not fit `T`.
    pub fn checked_run(heights: &[T]) -> Option<Self> {
        let (left, left_stats) = left_pass(heights);
        let (right, right_stats) = right_pass(heights);
        let boundaries = Boundaries { left, right };

        let mut best: Option<Rectangle<T>> = None;
        for (bar, &h) in heights.iter().enumerate() {
            let (start, end) = boundaries.span(bar);
            let area = T::checked_from_len(end - start + 1)?.checked_mul_value(h)?;
            if best.map_or(true, |b| area > b.area) {
                best = Some(Rectangle {
                    area,
                    bar,
                    start,
                    end,
                });
            }
        }

        Some(Self {
            boundaries,
            best,
            stats: left_stats.merge(right_stats),
        })
    }

    /// Largest area, zero for an empty histogram.
    pub fn area(&self) -> T {
        self.best.map_or_else(T::zero, |b| b.area)
    }
}

/// Area of the largest rectangle under the histogram `heights`.
///
/// # Panics
///
/// Panics if a candidate area does not fit `T`.
///
/// ```
/// use monoscan::largest_rectangle_area;
///
/// assert_eq!(largest_rectangle_area(&[2, 1, 5, 6, 2, 3]), 10);
/// assert_eq!(largest_rectangle_area::<u32>(&[]), 0);
/// ```
pub fn largest_rectangle_area<T: Scalar>(heights: &[T]) -> T {
    HistogramScan::run(heights).area()
}
