//! High-level API for monotonic scans.
//!
//! ## Purpose
//!
//! This module provides the checked, user-facing entry point. A fluent
//! builder collects configuration, `build()` validates it, and the resulting
//! `Scanner` validates each input before running the matching scan.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Configuration is checked in `build()`, inputs per call.
//! * **Type-Safe**: Generic over any `Scalar` (integers and floats).
//! * **Reusable**: A `Scanner` holds no per-input state and can be shared across threads.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`ScanBuilder`] via `MonoScan::new()`.
//! 2. Chain configuration methods (`.threshold()`, `.window()`, `.return_stats()`, ...).
//! 3. Call `.build()` to obtain a [`Scanner`].

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::algorithms::histogram::HistogramScan;
use crate::algorithms::pattern::PatternScan;
use crate::algorithms::subarray::SubarrayScan;
use crate::algorithms::warmer::WarmerScan;
use crate::algorithms::window::sliding_extrema;
use crate::engine::batch::run_batch;
use crate::engine::validator::Validator;
use crate::primitives::deque::{DequeStats, StrictlyDecreasing, StrictlyIncreasing};

// Publicly re-exported types
pub use crate::algorithms::histogram::{Boundaries, Rectangle};
pub use crate::algorithms::pattern::Witness;
pub use crate::algorithms::subarray::Window;
pub use crate::engine::output::{
    HistogramResult, PatternResult, SubarrayResult, WarmerResult, WindowResult,
};
pub use crate::primitives::errors::ScanError;
pub use crate::primitives::scalar::Scalar;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a [`Scanner`].
#[derive(Debug, Clone)]
pub struct ScanBuilder<T> {
    /// Sum threshold `K` for the shortest-subarray operation.
    pub threshold: Option<T>,

    /// Window length for the sliding extremum operations.
    pub window: Option<usize>,

    /// Attach deque operation counters to results.
    pub return_stats: Option<bool>,

    /// Attach nearest-shorter boundary arrays to histogram results.
    pub return_boundaries: Option<bool>,

    /// Validate every input before scanning (default: true).
    pub validate: Option<bool>,

    /// Spread `Scanner::batch` over the rayon pool (needs the `parallel` feature).
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Scalar> Default for ScanBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar> ScanBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            threshold: None,
            window: None,
            return_stats: None,
            return_boundaries: None,
            validate: None,
            parallel: None,
            duplicate_param: None,
        }
    }

    /// Set the sum threshold `K` used by `shortest_subarray`.
    pub fn threshold(mut self, k: T) -> Self {
        if self.threshold.is_some() {
            self.duplicate_param = Some("threshold");
        }
        self.threshold = Some(k);
        self
    }

    /// Set the window length used by `sliding_max` and `sliding_min`.
    pub fn window(mut self, window: usize) -> Self {
        if self.window.is_some() {
            self.duplicate_param = Some("window");
        }
        self.window = Some(window);
        self
    }

    /// Enable or disable parallel batch dispatch.
    pub fn parallel(mut self, enabled: bool) -> Self {
        if self.parallel.is_some() {
            self.duplicate_param = Some("parallel");
        }
        self.parallel = Some(enabled);
        self
    }

    /// Include deque push/pop counters in results.
    pub fn return_stats(mut self) -> Self {
        self.return_stats = Some(true);
        self
    }

    /// Include both boundary arrays in histogram results.
    pub fn return_boundaries(mut self) -> Self {
        self.return_boundaries = Some(true);
        self
    }

    /// Trust inputs and skip per-call validation.
    pub fn skip_validation(mut self) -> Self {
        self.validate = Some(false);
        self
    }

    /// Validate the configuration and produce a scanner.
    pub fn build(self) -> Result<Scanner<T>, ScanError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        if let Some(k) = self.threshold {
            Validator::validate_threshold(k)?;
        }
        if let Some(window) = self.window {
            Validator::validate_window(window)?;
        }

        Ok(Scanner {
            threshold: self.threshold,
            window: self.window,
            return_stats: self.return_stats.unwrap_or(false),
            return_boundaries: self.return_boundaries.unwrap_or(false),
            validate: self.validate.unwrap_or(true),
            parallel: self.parallel.unwrap_or(false),
        })
    }
}

// ============================================================================
// Scanner
// ============================================================================

/// Configured, validated entry point for every scan.
#[derive(Debug, Clone)]
pub struct Scanner<T> {
    threshold: Option<T>,
    window: Option<usize>,
    return_stats: bool,
    return_boundaries: bool,
    validate: bool,
    parallel: bool,
}

impl<T: Scalar> Scanner<T> {
    /// Configured sum threshold, if any.
    pub fn threshold(&self) -> Option<T> {
        self.threshold
    }

    /// Configured window length, if any.
    pub fn window(&self) -> Option<usize> {
        self.window
    }

    #[inline]
    fn stats(&self, stats: DequeStats) -> Option<DequeStats> {
        self.return_stats.then_some(stats)
    }

    fn check_finite(&self, values: &[T]) -> Result<(), ScanError> {
        if self.validate {
            Validator::validate_finite(values)?;
        }
        Ok(())
    }

    /// Distance from each position to the next strictly greater value.
    pub fn next_warmer(&self, temps: &[T]) -> Result<WarmerResult, ScanError> {
        self.check_finite(temps)?;

        let (distances, stats) = WarmerScan::run(temps);
        let result = WarmerResult {
            distances,
            stats: self.stats(stats),
        };

        tracing::debug!(
            "next_warmer: n={}, resolved={}",
            temps.len(),
            result.resolved()
        );
        Ok(result)
    }

    /// Largest rectangle under the histogram `heights`.
    ///
    /// Returns `ScanError::Overflow` if a candidate area does not fit `T`.
    pub fn largest_rectangle(&self, heights: &[T]) -> Result<HistogramResult<T>, ScanError> {
        if self.validate {
            Validator::validate_heights(heights)?;
        }

        let scan = HistogramScan::checked_run(heights).ok_or(ScanError::Overflow {
            operation: "largest_rectangle",
        })?;
        let area = scan.area();

        tracing::debug!(
            "largest_rectangle: n={}, area={:?}, bar={:?}",
            heights.len(),
            area,
            scan.best.map(|r| r.bar)
        );
        Ok(HistogramResult {
            area,
            rectangle: scan.best,
            boundaries: self.return_boundaries.then_some(scan.boundaries),
            stats: self.stats(scan.stats),
        })
    }

    /// Shortest contiguous subarray with sum at least the configured threshold.
    ///
    /// Returns `ScanError::Overflow` if a prefix sum does not fit `T`.
    pub fn shortest_subarray(&self, nums: &[T]) -> Result<SubarrayResult, ScanError> {
        let k = Validator::require(self.threshold, "shortest_subarray", "threshold")?;
        self.check_finite(nums)?;

        let (window, stats) =
            SubarrayScan::checked_run(nums, k).ok_or(ScanError::Overflow {
                operation: "shortest_subarray",
            })?;

        tracing::debug!(
            "shortest_subarray: n={}, k={:?}, length={:?}",
            nums.len(),
            k,
            window.map(|w| w.len())
        );
        Ok(SubarrayResult {
            window,
            stats: self.stats(stats),
        })
    }

    /// Find a 132 pattern in `nums`.
    pub fn find_132(&self, nums: &[T]) -> Result<PatternResult, ScanError> {
        self.check_finite(nums)?;

        let (witness, stats) = PatternScan::run(nums);

        tracing::debug!("find_132: n={}, witness={:?}", nums.len(), witness);
        Ok(PatternResult {
            witness,
            stats: self.stats(stats),
        })
    }

    /// Maximum of each full window of the configured length.
    pub fn sliding_max(&self, nums: &[T]) -> Result<WindowResult<T>, ScanError> {
        let window = Validator::require(self.window, "sliding_max", "window")?;
        self.check_finite(nums)?;

        let (extrema, stats) = sliding_extrema::<T, StrictlyDecreasing>(nums, window);

        tracing::debug!(
            "sliding_max: n={}, window={}, windows={}",
            nums.len(),
            window,
            extrema.len()
        );
        Ok(WindowResult {
            window,
            extrema,
            stats: self.stats(stats),
        })
    }

    /// Minimum of each full window of the configured length.
    pub fn sliding_min(&self, nums: &[T]) -> Result<WindowResult<T>, ScanError> {
        let window = Validator::require(self.window, "sliding_min", "window")?;
        self.check_finite(nums)?;

        let (extrema, stats) = sliding_extrema::<T, StrictlyIncreasing>(nums, window);

        tracing::debug!(
            "sliding_min: n={}, window={}, windows={}",
            nums.len(),
            window,
            extrema.len()
        );
        Ok(WindowResult {
            window,
            extrema,
            stats: self.stats(stats),
        })
    }

    /// Run one operation over many independent inputs.
    ///
    /// Results come back in input order. Inputs are spread over the rayon
    /// pool when the `parallel` feature is enabled and `.parallel(true)` was set.
    ///
    /// ```
    /// use monoscan::prelude::*;
    ///
    /// let scanner = MonoScan::<i32>::new().build()?;
    /// let inputs = vec![vec![2, 1, 5, 6, 2, 3], vec![2, 4]];
    /// let areas: Vec<i32> = scanner
    ///     .batch(&inputs, |s, h| s.largest_rectangle(h).map(|r| r.area))
    ///     .into_iter()
    ///     .collect::<Result<_, _>>()?;
    /// assert_eq!(areas, vec![10, 4]);
    /// # Result::<(), ScanError>::Ok(())
    /// ```
    pub fn batch<I, R, F>(&self, inputs: &[I], op: F) -> Vec<Result<R, ScanError>>
    where
        I: AsRef<[T]> + Sync,
        T: Sync,
        R: Send,
        F: Fn(&Self, &[T]) -> Result<R, ScanError> + Sync + Send,
    {
        tracing::trace!(
            "batch: inputs={}, parallel={}",
            inputs.len(),
            self.parallel
        );
        run_batch(inputs, self.parallel, |input| op(self, input.as_ref()))
    }
}
