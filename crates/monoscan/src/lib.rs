//! # monoscan: monotonic-deque scans for Rust
//!
//! Single-pass, linear-time array algorithms built on one shared data
//! structure: a deque of `(value, index)` items kept monotonic by evicting
//! dominated items on every insertion.
//!
//! | Function | Answers |
//! |---|---|
//! | [`next_warmer_distances`] | distance from each position to the next strictly greater value |
//! | [`largest_rectangle_area`] | largest rectangle under a histogram |
//! | [`shortest_subarray_at_least_k`] | shortest contiguous window with sum `>= K` |
//! | [`has_132_pattern`] / [`find_132_pattern`] | `i < j < k` with `nums[i] < nums[k] < nums[j]` |
//! | [`sliding_window_max`] / [`sliding_window_min`] | extremum of each trailing window |
//!
//! ## Quick Start
//!
//! The free functions trust their input and return plain values:
//!
//! ```rust
//! use monoscan::*;
//!
//! assert_eq!(
//!     next_warmer_distances(&[73, 74, 75, 71, 69, 72, 76, 73]),
//!     vec![1, 1, 4, 2, 1, 1, 0, 0]
//! );
//! assert_eq!(largest_rectangle_area(&[2, 1, 5, 6, 2, 3]), 10);
//! assert_eq!(shortest_subarray_at_least_k(&[2, -1, 2], 3), Some(3));
//! assert_eq!(shortest_subarray_at_least_k(&[1, 2], 4), None);
//! assert!(has_132_pattern(&[-1, 3, 2, 0]));
//! assert!(!has_132_pattern(&[1, 2, 3, 4]));
//! ```
//!
//! ### Checked Use
//!
//! The `Scanner` validates inputs (finite values, non-negative heights,
//! positive threshold) and can attach extras to each result:
//!
//! ```rust
//! use monoscan::prelude::*;
//!
//! let scanner = MonoScan::new()
//!     .threshold(3.0)          // Sum threshold for shortest_subarray
//!     .window(2)               // Window length for sliding_max/min
//!     .return_stats()          // Deque push/pop counters
//!     .return_boundaries()     // Nearest-shorter boundaries for histograms
//!     .build()?;
//!
//! let hist = scanner.largest_rectangle(&[2.0, 1.0, 5.0, 6.0, 2.0, 3.0])?;
//! assert_eq!(hist.area, 10.0);
//!
//! let sub = scanner.shortest_subarray(&[2.0, -1.0, 2.0])?;
//! assert_eq!(sub.length_or_sentinel(), 3);
//!
//! let err = scanner.largest_rectangle(&[1.0, f64::NAN]).unwrap_err();
//! assert!(matches!(err, ScanError::NonFiniteValue { index: 1, .. }));
//! # Result::<(), ScanError>::Ok(())
//! ```
//!
//! ## Error Handling
//!
//! * Malformed input and configuration surface as [`ScanError`](prelude::ScanError)
//!   from the `Scanner` API, as do histogram areas or prefix sums that do not
//!   fit the value type (`ScanError::Overflow`). The free functions panic instead.
//! * "Not found" is an ordinary result: `None`, `false`, or `-1` via
//!   `SubarrayResult::length_or_sentinel`.
//! * Reading or popping an empty [`deque::MonotonicDeque`] is a contract
//!   violation and panics.
//!
//! ## Minimal Usage (no_std)
//!
//! ```toml
//! [dependencies]
//! monoscan = { version = "0.3", default-features = false }
//! ```
//!
//! Everything except `std::error::Error` and the `parallel` feature is
//! available with `alloc` only.
//!
//! ## Logging
//!
//! The `Scanner` emits a [`tracing`](https://docs.rs/tracing) event per
//! operation at `debug` level (`trace` for batch dispatch). No subscriber is installed.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - value trait, monotonic deque, buffers, errors.
mod primitives;

// Layer 2: Algorithms - the single-pass scans.
mod algorithms;

// Layer 3: Engine - validation, result types, batch dispatch.
mod engine;

// Layer 4: High-level fluent API.
mod api;

// Unchecked scans.
pub use crate::algorithms::histogram::{largest_rectangle_area, nearest_shorter_boundaries};
pub use crate::algorithms::pattern::{find_132_pattern, has_132_pattern};
pub use crate::algorithms::subarray::shortest_subarray_at_least_k;
pub use crate::algorithms::warmer::next_warmer_distances;
pub use crate::algorithms::window::{sliding_extrema, sliding_window_max, sliding_window_min};

/// The monotonic deque and its orders.
pub mod deque {
    pub use crate::primitives::deque::{
        DequeStats, End, Item, MonotonicDeque, Monotonicity, NonDecreasing, NonIncreasing,
        StrictlyDecreasing, StrictlyIncreasing,
    };
}

/// Step-by-step scan state, for callers that feed elements themselves.
pub mod scan {
    pub use crate::algorithms::histogram::{Boundaries, HistogramScan, Rectangle};
    pub use crate::algorithms::pattern::{PatternScan, Witness};
    pub use crate::algorithms::subarray::{SubarrayScan, Window};
    pub use crate::algorithms::warmer::WarmerScan;
}

// Standard prelude.
pub mod prelude {
    pub use crate::api::{
        Boundaries, HistogramResult, PatternResult, Rectangle, ScanBuilder as MonoScan, ScanError,
        Scalar, Scanner, SubarrayResult, WarmerResult, Window, WindowResult, Witness,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
