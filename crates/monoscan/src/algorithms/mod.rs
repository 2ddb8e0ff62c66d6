//! Layer 2: Algorithms
//!
//! This layer implements the single-pass scans. Each scan owns a private
//! monotonic deque, trusts its input, and never returns an error; input
//! validation happens in the engine layer.

// Distance to the next strictly greater value.
pub mod warmer;

// Largest rectangle in a histogram.
pub mod histogram;

// Shortest subarray with sum at least K.
pub mod subarray;

// 132-pattern detection.
pub mod pattern;

// Sliding window maximum and minimum.
pub mod window;
