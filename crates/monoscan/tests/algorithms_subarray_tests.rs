//! Tests for the shortest-subarray solver.
//!
//! ## Test Organization
//!
//! 1. **Reference Scenarios** - The two canonical cases
//! 2. **Edge Cases** - Single element, negatives, empty input
//! 3. **Windows** - Reported window really reaches the threshold
//! 4. **Correctness** - Brute force agreement on signed inputs

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use monoscan::scan::{SubarrayScan, Window};
use monoscan::shortest_subarray_at_least_k;

// ============================================================================
// Helper Functions
// ============================================================================

fn brute_force(nums: &[i64], k: i64) -> Option<usize> {
    let mut best: Option<usize> = None;
    for start in 0..nums.len() {
        let mut sum = 0;
        for end in start..nums.len() {
            sum += nums[end];
            if sum >= k {
                let len = end - start + 1;
                best = Some(best.map_or(len, |b| b.min(len)));
                break;
            }
        }
    }
    best
}

// ============================================================================
// Reference Scenarios
// ============================================================================

/// Test the window that needs a negative element inside it.
#[test]
fn test_reference_with_negative() {
    assert_eq!(shortest_subarray_at_least_k(&[2, -1, 2], 3), Some(3));
}

/// Test the not-found case.
#[test]
fn test_reference_not_found() {
    assert_eq!(shortest_subarray_at_least_k(&[1, 2], 4), None);
}

// ============================================================================
// Edge Cases
// ============================================================================

/// Test a single element equal to K qualifies.
#[test]
fn test_single_element_equal_to_k() {
    assert_eq!(shortest_subarray_at_least_k(&[5], 5), Some(1));
    assert_eq!(shortest_subarray_at_least_k(&[1, 1, 7, 1], 7), Some(1));
}

/// Test empty input never finds a window.
#[test]
fn test_empty() {
    let nums: [i32; 0] = [];
    assert_eq!(shortest_subarray_at_least_k(&nums, 1), None);
}

/// Test all-negative input never reaches a positive K.
#[test]
fn test_all_negative() {
    assert_eq!(shortest_subarray_at_least_k(&[-1, -2, -3], 1), None);
}

/// Test a large negative dip resets the useful left endpoints.
#[test]
fn test_negative_dip() {
    assert_eq!(shortest_subarray_at_least_k(&[84, -37, 32, 40, 95], 167), Some(3));
}

/// Test unsigned input.
#[test]
fn test_unsigned() {
    assert_eq!(shortest_subarray_at_least_k(&[1u32, 2, 3, 4], 7), Some(2));
}

/// Test float input.
#[test]
fn test_float() {
    assert_eq!(shortest_subarray_at_least_k(&[0.5, 0.25, 1.5, -3.0, 1.0], 1.75), Some(2));
}

/// Test a difference of prefix sums beyond the value type still qualifies.
///
/// Verifies that `0 - i64::MIN` is treated as reaching any threshold.
#[test]
fn test_prefix_difference_overflow() {
    assert_eq!(
        shortest_subarray_at_least_k(&[i64::MIN, 1, i64::MAX], 5),
        Some(1)
    );
}

/// Test a prefix sum beyond the value type is reported.
#[test]
fn test_prefix_sum_overflow() {
    assert!(SubarrayScan::checked_run(&[100i8, 100], 1).is_none());
    assert_eq!(
        SubarrayScan::checked_run(&[100i8, 27], 120).map(|(window, _)| window),
        Some(Some(Window { start: 0, end: 2 }))
    );
}

/// Test a failed step leaves the scan untouched.
#[test]
fn test_try_step_keeps_state() {
    let mut scan = SubarrayScan::new(3, 100u8);
    assert_eq!(scan.try_step(200), Some(()));
    assert_eq!(scan.try_step(100), None);
    assert_eq!(scan.best(), Some(Window { start: 0, end: 1 }));

    assert_eq!(scan.try_step(10), Some(()));
    assert_eq!(scan.best(), Some(Window { start: 0, end: 1 }));
}

/// Test the unchecked entry point panics on overflow.
#[test]
#[should_panic(expected = "prefix sum overflows the value type")]
fn test_prefix_overflow_panics() {
    let _ = shortest_subarray_at_least_k(&[u8::MAX, 1], 1);
}

// ============================================================================
// Window Tests
// ============================================================================

/// Test the reported window of the reference case.
#[test]
fn test_reference_window() {
    let (window, _) = SubarrayScan::run(&[2, -1, 2], 3);

    assert_eq!(window, Some(Window { start: 0, end: 3 }));
}

/// Test the first minimal window wins ties.
#[test]
fn test_first_minimal_window() {
    let (window, _) = SubarrayScan::run(&[3, 0, 3], 3);

    assert_eq!(window, Some(Window { start: 0, end: 1 }));
}

/// Test stepping reports the best window found so far.
#[test]
fn test_step_best_so_far() {
    let mut scan = SubarrayScan::new(4, 4);
    scan.step(1);
    scan.step(2);
    assert_eq!(scan.best(), None);

    scan.step(3);
    assert_eq!(scan.best(), Some(Window { start: 1, end: 3 }));

    scan.step(4);
    assert_eq!(scan.best().map(|w| w.len()), Some(1));
}

// ============================================================================
// Correctness Tests
// ============================================================================

/// Test against brute force on random signed inputs.
///
/// Verifies that the window sums to at least K and no shorter one does.
#[test]
fn test_matches_brute_force() {
    let mut rng = StdRng::seed_from_u64(555);

    for _ in 0..400 {
        let n = rng.random_range(0..40);
        let nums: Vec<i64> = (0..n).map(|_| rng.random_range(-10..=10)).collect();
        let k = rng.random_range(1..=25);

        let (window, stats) = SubarrayScan::run(&nums, k);

        assert_eq!(
            window.map(|w| w.len()),
            brute_force(&nums, k),
            "nums={nums:?}, k={k}"
        );
        if let Some(w) = window {
            let sum: i64 = nums[w.start..w.end].iter().sum();
            assert!(sum >= k, "Reported window must reach K");
        }
        assert!(stats.total() <= 2 * (n + 1), "Seed counts as an item");
    }
}
