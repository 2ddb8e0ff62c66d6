#![cfg(feature = "dev")]
//! Tests for input and configuration validation.
//!
//! ## Test Organization
//!
//! 1. **Input Validation** - Finite values, histogram heights
//! 2. **Parameter Validation** - Threshold, window, required parameters
//! 3. **Builder Validation** - Duplicate detection

use monoscan::internals::engine::validator::Validator;
use monoscan::internals::primitives::errors::ScanError;

// ============================================================================
// Input Validation Tests
// ============================================================================

/// Test finite input passes.
#[test]
fn test_validate_finite_ok() {
    assert!(Validator::validate_finite(&[1.0, -2.5, 0.0]).is_ok());
    assert!(Validator::validate_finite::<f64>(&[]).is_ok());
    assert!(Validator::validate_finite(&[i32::MIN, i32::MAX]).is_ok());
}

/// Test the first non-finite value is reported.
#[test]
fn test_validate_finite_reports_first() {
    let err = Validator::validate_finite(&[1.0, f64::INFINITY, f64::NAN]).unwrap_err();

    assert_eq!(
        err,
        ScanError::NonFiniteValue {
            index: 1,
            value: "inf".to_string(),
        }
    );
}

/// Test zero heights are allowed, negative ones are not.
#[test]
fn test_validate_heights() {
    assert!(Validator::validate_heights(&[0, 0, 3]).is_ok());
    assert!(Validator::validate_heights(&[0.0f32, 1.5]).is_ok());

    let err = Validator::validate_heights(&[1.0, -0.5]).unwrap_err();
    assert!(matches!(err, ScanError::NegativeHeight { index: 1, .. }));
}

/// Test unsigned heights can never be negative.
#[test]
fn test_validate_heights_unsigned() {
    assert!(Validator::validate_heights(&[0u8, 255]).is_ok());
}

// ============================================================================
// Parameter Validation Tests
// ============================================================================

/// Test threshold bounds.
#[test]
fn test_validate_threshold() {
    assert!(Validator::validate_threshold(1).is_ok());
    assert!(Validator::validate_threshold(1e-9).is_ok());

    assert_eq!(
        Validator::validate_threshold(0).unwrap_err(),
        ScanError::InvalidThreshold("0".to_string())
    );
    assert!(Validator::validate_threshold(-1i64).is_err());
    assert!(Validator::validate_threshold(f32::NAN).is_err());
}

/// Test window bounds.
#[test]
fn test_validate_window() {
    assert!(Validator::validate_window(1).is_ok());
    assert_eq!(
        Validator::validate_window(0).unwrap_err(),
        ScanError::InvalidWindow(0)
    );
}

/// Test require returns the value or names what is missing.
#[test]
fn test_require() {
    assert_eq!(Validator::require(Some(4), "op", "param"), Ok(4));
    assert_eq!(
        Validator::require::<usize>(None, "sliding_min", "window"),
        Err(ScanError::MissingParameter {
            operation: "sliding_min",
            parameter: "window",
        })
    );
}

// ============================================================================
// Builder Validation Tests
// ============================================================================

/// Test duplicate detection.
#[test]
fn test_validate_no_duplicates() {
    assert!(Validator::validate_no_duplicates(None).is_ok());
    assert_eq!(
        Validator::validate_no_duplicates(Some("threshold")).unwrap_err(),
        ScanError::DuplicateParameter {
            parameter: "threshold"
        }
    );
}
