//! Tests for the largest-rectangle solver.
//!
//! These tests verify:
//! - The reference histogram and degenerate shapes
//! - The `>=` tie-break on runs of equal height
//! - Boundary arrays from the two mirrored passes
//! - Agreement with an O(n^2) brute force
//!
//! ## Test Organization
//!
//! 1. **Reference Scenario**
//! 2. **Edge Cases** - Empty, zeros, monotone, equal runs
//! 3. **Boundaries** - Nearest strictly shorter bars
//! 4. **Correctness** - Brute force agreement, float heights

use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use monoscan::scan::HistogramScan;
use monoscan::{largest_rectangle_area, nearest_shorter_boundaries};

// ============================================================================
// Helper Functions
// ============================================================================

fn brute_force(heights: &[u64]) -> u64 {
    let mut best = 0;
    for i in 0..heights.len() {
        let mut min = u64::MAX;
        for j in i..heights.len() {
            min = min.min(heights[j]);
            best = best.max(min * (j - i + 1) as u64);
        }
    }
    best
}

// ============================================================================
// Reference Scenario
// ============================================================================

/// Test the canonical histogram.
#[test]
fn test_reference_histogram() {
    assert_eq!(largest_rectangle_area(&[2, 1, 5, 6, 2, 3]), 10);
}

/// Test the reference histogram reports the limiting bar and span.
#[test]
fn test_reference_rectangle() {
    let scan = HistogramScan::run(&[2, 1, 5, 6, 2, 3]);
    let best = scan.best.expect("non-empty histogram has a rectangle");

    assert_eq!(best.area, 10);
    assert_eq!(best.bar, 2, "Bar of height 5 limits the rectangle");
    assert_eq!((best.start, best.end), (2, 3));
}

// ============================================================================
// Edge Cases
// ============================================================================

/// Test an empty histogram has area 0.
#[test]
fn test_empty() {
    let heights: [i64; 0] = [];
    assert_eq!(largest_rectangle_area(&heights), 0);
    assert!(HistogramScan::run(&heights).best.is_none());
}

/// Test all-zero heights.
#[test]
fn test_all_zero() {
    assert_eq!(largest_rectangle_area(&[0, 0, 0]), 0);
}

/// Test strictly increasing heights.
///
/// Verifies that no bar has a right boundary.
#[test]
fn test_strictly_increasing() {
    let heights = [1, 2, 3, 4, 5];
    let b = nearest_shorter_boundaries(&heights);

    assert_eq!(largest_rectangle_area(&heights), 9);
    assert!(b.right.iter().all(Option::is_none));
    assert_eq!(b.left, vec![None, Some(0), Some(1), Some(2), Some(3)]);
}

/// Test strictly decreasing heights.
#[test]
fn test_strictly_decreasing() {
    let heights = [5, 4, 3, 2, 1];
    let b = nearest_shorter_boundaries(&heights);

    assert_eq!(largest_rectangle_area(&heights), 9);
    assert!(b.left.iter().all(Option::is_none));
    assert_eq!(b.right, vec![Some(1), Some(2), Some(3), Some(4), None]);
}

/// Test a run of equal heights counts once at full width.
///
/// Verifies the `>=` eviction: equal neighbours are never boundaries.
#[test]
fn test_equal_run() {
    let heights = [3, 3, 3, 3];
    let b = nearest_shorter_boundaries(&heights);

    assert!(b.left.iter().all(Option::is_none));
    assert!(b.right.iter().all(Option::is_none));
    assert_eq!(largest_rectangle_area(&heights), 12);
}

/// Test a single bar.
#[test]
fn test_single_bar() {
    assert_eq!(largest_rectangle_area(&[7u32]), 7);
}

// ============================================================================
// Boundary Tests
// ============================================================================

/// Test boundaries of the reference histogram.
#[test]
fn test_reference_boundaries() {
    let b = nearest_shorter_boundaries(&[2, 1, 5, 6, 2, 3]);

    assert_eq!(b.left, vec![None, None, Some(1), Some(2), Some(1), Some(4)]);
    assert_eq!(b.right, vec![Some(1), None, Some(4), Some(4), None, None]);
    assert_eq!(b.width(2), 2);
    assert_eq!(b.span(1), (0, 5), "Shortest bar spans everything");
}

/// Test the boundary invariants on random inputs.
///
/// Verifies that every bar strictly inside the span is at least as tall.
#[test]
fn test_boundary_invariants() {
    let mut rng = StdRng::seed_from_u64(99);

    for _ in 0..200 {
        let n = rng.random_range(1..50);
        let heights: Vec<u32> = (0..n).map(|_| rng.random_range(0..6)).collect();
        let b = nearest_shorter_boundaries(&heights);

        for i in 0..n {
            if let Some(l) = b.left[i] {
                assert!(l < i && heights[l] < heights[i]);
            }
            if let Some(r) = b.right[i] {
                assert!(r > i && heights[r] < heights[i]);
            }
            let (start, end) = b.span(i);
            assert!((start..=end).all(|j| heights[j] >= heights[i]));
        }
    }
}

// ============================================================================
// Correctness Tests
// ============================================================================

/// Test against brute force on random inputs.
#[test]
fn test_matches_brute_force() {
    let mut rng = StdRng::seed_from_u64(31337);

    for _ in 0..300 {
        let n = rng.random_range(0..60);
        let heights: Vec<u64> = (0..n).map(|_| rng.random_range(0..10)).collect();

        let scan = HistogramScan::run(&heights);
        let combined = (0..n)
            .map(|i| heights[i] * scan.boundaries.width(i) as u64)
            .max()
            .unwrap_or(0);

        assert_eq!(scan.area(), brute_force(&heights), "heights={heights:?}");
        assert_eq!(scan.area(), combined);
        assert!(scan.stats.total() <= 4 * n, "Two passes, 2n each");
    }
}

/// Test an area beyond the value type is reported instead of wrapped.
#[test]
fn test_checked_run_overflow() {
    let heights = vec![50_000i32; 50_000];
    assert!(HistogramScan::checked_run(&heights).is_none());

    let widened: Vec<i64> = heights.iter().map(|&h| i64::from(h)).collect();
    assert_eq!(largest_rectangle_area(&widened), 2_500_000_000);
}

/// Test a width that does not fit a narrow type is not truncated.
#[test]
fn test_checked_run_narrow_width() {
    let heights = [1u8; 300];
    assert!(HistogramScan::checked_run(&heights).is_none());

    let heights = [1u8; 255];
    assert_eq!(largest_rectangle_area(&heights), 255);
}

/// Test the unchecked entry point panics on overflow.
#[test]
#[should_panic(expected = "rectangle area overflows the value type")]
fn test_area_overflow_panics() {
    let _ = largest_rectangle_area(&[200u8, 200]);
}

/// Test float heights.
#[test]
fn test_float_heights() {
    let heights = [2.5, 1.0, 5.0, 6.0, 2.0, 3.0];
    assert_relative_eq!(largest_rectangle_area(&heights), 10.0, epsilon = 1e-12);

    let heights = [0.5, 0.5, 0.5];
    assert_relative_eq!(largest_rectangle_area(&heights), 1.5, epsilon = 1e-12);
}
