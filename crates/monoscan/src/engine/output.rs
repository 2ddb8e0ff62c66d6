//! Result types returned by the `Scanner` API.
//!
//! ## Purpose
//!
//! Each scanner operation returns a small result struct wrapping the core
//! answer together with the optional extras requested on the builder
//! (deque counters, histogram boundaries).
//!
//! ## Design notes
//!
//! * **Optional outputs**: Extras are `Option`s, populated only on request.
//! * **No sentinels**: "Not found" is `None`; `SubarrayResult` converts to the
//!   conventional `-1` only on demand.
//! * **Ergonomics**: Every result implements `Display` as a short summary.
//!
//! ## Non-goals
//!
//! * This module does not compute anything; it only stores results.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result};

// Internal dependencies
use crate::algorithms::histogram::{Boundaries, Rectangle};
use crate::algorithms::pattern::Witness;
use crate::algorithms::subarray::Window;
use crate::primitives::deque::DequeStats;

fn write_stats(f: &mut Formatter<'_>, stats: &Option<DequeStats>) -> Result {
    if let Some(s) = stats {
        writeln!(f, "  Deque ops:  {} pushes, {} pops", s.pushes, s.pops)?;
    }
    Ok(())
}

// ============================================================================
// Next Warmer
// ============================================================================

/// Output of the next-warmer finder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WarmerResult {
    /// Distance to the next strictly greater value, `0` if none.
    pub distances: Vec<usize>,

    /// Deque counters, when requested.
    pub stats: Option<DequeStats>,
}

impl WarmerResult {
    /// Number of positions that have a strictly greater value later on.
    pub fn resolved(&self) -> usize {
        self.distances.iter().filter(|&&d| d != 0).count()
    }
}

impl Display for WarmerResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Next warmer:")?;
        writeln!(f, "  Positions:  {}", self.distances.len())?;
        writeln!(f, "  Resolved:   {}", self.resolved())?;
        write_stats(f, &self.stats)?;
        writeln!(f, "  Distances:  {:?}", self.distances)
    }
}

// ============================================================================
// Histogram
// ============================================================================

/// Output of the largest-rectangle solver.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramResult<T> {
    /// Largest area, zero for an empty histogram.
    pub area: T,

    /// The rectangle attaining `area`, `None` for an empty histogram.
    pub rectangle: Option<Rectangle<T>>,

    /// Nearest-shorter boundaries, when requested.
    pub boundaries: Option<Boundaries>,

    /// Deque counters over both passes, when requested.
    pub stats: Option<DequeStats>,
}

impl<T: Debug> Display for HistogramResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Largest rectangle:")?;
        writeln!(f, "  Area:       {:?}", self.area)?;
        if let Some(r) = &self.rectangle {
            writeln!(f, "  Bars:       {}..={} (limited by bar {})", r.start, r.end, r.bar)?;
        }
        write_stats(f, &self.stats)?;
        if let Some(b) = &self.boundaries {
            writeln!(f, "  Left:       {:?}", b.left)?;
            writeln!(f, "  Right:      {:?}", b.right)?;
        }
        Ok(())
    }
}

// ============================================================================
// Shortest Subarray
// ============================================================================

/// Output of the shortest-subarray solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubarrayResult {
    /// Shortest qualifying window, `None` if no window reaches the threshold.
    pub window: Option<Window>,

    /// Deque counters, when requested.
    pub stats: Option<DequeStats>,
}

impl SubarrayResult {
    /// Length of the shortest qualifying window.
    pub fn length(&self) -> Option<usize> {
        self.window.map(|w| w.len())
    }

    /// Length of the shortest qualifying window, or `-1` if there is none.
    pub fn length_or_sentinel(&self) -> isize {
        self.length().map_or(-1, |len| len as isize)
    }

    /// Whether a qualifying window exists.
    pub fn found(&self) -> bool {
        self.window.is_some()
    }
}

impl Display for SubarrayResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Shortest subarray:")?;
        match self.window {
            Some(w) => {
                writeln!(f, "  Length:     {}", w.len())?;
                writeln!(f, "  Window:     {}..{}", w.start, w.end)?;
            }
            None => writeln!(f, "  Length:     -1 (not found)")?,
        }
        write_stats(f, &self.stats)
    }
}

// ============================================================================
// 132 Pattern
// ============================================================================

/// Output of the 132-pattern detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternResult {
    /// One triple `i < j < k` with `nums[i] < nums[k] < nums[j]`, if any.
    pub witness: Option<Witness>,

    /// Deque counters up to detection, when requested.
    pub stats: Option<DequeStats>,
}

impl PatternResult {
    /// Whether a 132 pattern exists.
    pub fn found(&self) -> bool {
        self.witness.is_some()
    }
}

impl Display for PatternResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "132 pattern:")?;
        match self.witness {
            Some(w) => writeln!(f, "  Found:      i={}, j={}, k={}", w.i, w.j, w.k)?,
            None => writeln!(f, "  Found:      none")?,
        }
        write_stats(f, &self.stats)
    }
}

// ============================================================================
// Sliding Window
// ============================================================================

/// Output of a sliding window maximum or minimum.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowResult<T> {
    /// Window length used.
    pub window: usize,

    /// Extremum of each full window, in window order.
    pub extrema: Vec<T>,

    /// Deque counters, when requested.
    pub stats: Option<DequeStats>,
}

impl<T: Debug> Display for WindowResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Sliding window:")?;
        writeln!(f, "  Window:     {}", self.window)?;
        writeln!(f, "  Windows:    {}", self.extrema.len())?;
        write_stats(f, &self.stats)?;
        writeln!(f, "  Extrema:    {:?}", self.extrema)
    }
}
