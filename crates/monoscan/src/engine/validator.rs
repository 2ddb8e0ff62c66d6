//! Input and configuration validation at the crate boundary.
//!
//! ## Purpose
//!
//! The scans in the algorithms layer assume finite values, non-negative
//! histogram heights, a positive sum threshold and a non-zero window. This
//! module checks those preconditions before a scan runs.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//!
//! ## Invariants
//!
//! * Validation is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not clamp, filter or otherwise repair input.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// Internal dependencies
use crate::primitives::errors::ScanError;
use crate::primitives::scalar::Scalar;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for scan inputs and scanner configuration.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Input Validation
    // ========================================================================

    /// Reject NaN and infinite values.
    pub fn validate_finite<T: Scalar>(values: &[T]) -> Result<(), ScanError> {
        match values.iter().position(|v| !v.is_finite_value()) {
            Some(index) => Err(ScanError::NonFiniteValue {
                index,
                value: format!("{:?}", values[index]),
            }),
            None => Ok(()),
        }
    }

    /// Reject non-finite or negative histogram heights.
    pub fn validate_heights<T: Scalar>(heights: &[T]) -> Result<(), ScanError> {
        Self::validate_finite(heights)?;

        let zero = T::zero();
        match heights.iter().position(|&h| h < zero) {
            Some(index) => Err(ScanError::NegativeHeight {
                index,
                value: format!("{:?}", heights[index]),
            }),
            None => Ok(()),
        }
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// The subarray threshold must be finite and strictly positive.
    pub fn validate_threshold<T: Scalar>(k: T) -> Result<(), ScanError> {
        if !k.is_finite_value() || k <= T::zero() {
            return Err(ScanError::InvalidThreshold(format!("{:?}", k)));
        }
        Ok(())
    }

    /// Sliding windows must cover at least one element.
    pub fn validate_window(window: usize) -> Result<(), ScanError> {
        if window == 0 {
            return Err(ScanError::InvalidWindow(window));
        }
        Ok(())
    }

    /// Fetch a parameter an operation cannot run without.
    pub fn require<P: Copy>(
        value: Option<P>,
        operation: &'static str,
        parameter: &'static str,
    ) -> Result<P, ScanError> {
        value.ok_or(ScanError::MissingParameter {
            operation,
            parameter,
        })
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), ScanError> {
        if let Some(param) = duplicate_param {
            return Err(ScanError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
