//! Error types for monotonic scan operations.
//!
//! ## Purpose
//!
//! This module defines the recoverable error conditions raised at the
//! external boundary of the crate: malformed input values and invalid
//! builder configuration.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending index and value where one exists.
//! * **Deferred**: Builder errors (duplicates) are recorded during configuration
//!   and reported by `build()`.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Input validation**: Non-finite values, negative histogram heights.
//! 2. **Parameter validation**: Non-positive thresholds, zero-width windows.
//! 3. **Configuration**: Missing or duplicated builder parameters.
//! 4. **Arithmetic**: Areas or prefix sums that do not fit the value type.
//!
//! ## Non-goals
//!
//! * "Not found" outcomes (no qualifying subarray, no 132 triple) are results, not errors.
//! * Deque contract violations (reading an empty deque) are panics, not errors.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for monotonic scan operations.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanError {
    /// Input contains a NaN or infinite value.
    NonFiniteValue {
        /// Position of the offending element.
        index: usize,
        /// Debug rendering of the offending element.
        value: String,
    },

    /// Histogram bars must have non-negative heights.
    NegativeHeight {
        /// Position of the offending bar.
        index: usize,
        /// Debug rendering of the offending height.
        value: String,
    },

    /// The subarray sum threshold must be positive and finite.
    InvalidThreshold(String),

    /// Sliding windows must span at least one element.
    InvalidWindow(usize),

    /// An operation was invoked without a parameter it requires.
    MissingParameter {
        /// Name of the scanner operation.
        operation: &'static str,
        /// Name of the builder parameter that was not set.
        parameter: &'static str,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },

    /// An intermediate area or sum does not fit the value type.
    Overflow {
        /// Name of the scanner operation.
        operation: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for ScanError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::NonFiniteValue { index, value } => {
                write!(f, "Invalid numeric value at index {index}: {value}")
            }
            Self::NegativeHeight { index, value } => {
                write!(f, "Negative height at index {index}: {value}")
            }
            Self::InvalidThreshold(k) => {
                write!(f, "Invalid threshold: {k} (must be > 0 and finite)")
            }
            Self::InvalidWindow(w) => write!(f, "Invalid window: {w} (must be at least 1)"),
            Self::MissingParameter {
                operation,
                parameter,
            } => {
                write!(f, "Operation '{operation}' requires parameter '{parameter}'")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
            Self::Overflow { operation } => {
                write!(
                    f,
                    "Arithmetic overflow in '{operation}': result does not fit the value type"
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for ScanError {}
