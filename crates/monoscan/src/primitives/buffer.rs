//! Write-once result buffers for single-pass scans.
//!
//! ## Purpose
//!
//! A scan produces one output slot per input index, filled in whatever order
//! the pass visits indices (right-to-left for the next-warmer finder and the
//! right histogram boundary). `ResultBuffer` holds those slots and checks that
//! the pass filled each one exactly once.
//!
//! ## Design notes
//!
//! * **Preallocated**: The buffer is sized to the input length up front.
//! * **Fail-fast**: Writing a slot twice or finishing with an unwritten slot
//!   panics; both are bugs in the calling scan, never input errors.
//!
//! ## Invariants
//!
//! * `finish()` only returns once every slot was written exactly once.

// Feature-gated dependencies
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// ============================================================================
// ResultBuffer
// ============================================================================

/// Fixed-length output buffer, written at most once per slot.
#[derive(Debug, Clone)]
pub struct ResultBuffer<T> {
    values: Vec<T>,
    written: Vec<bool>,
    remaining: usize,
}

impl<T: Clone> ResultBuffer<T> {
    /// Create a buffer of `len` slots holding `placeholder` until written.
    pub fn new(len: usize, placeholder: T) -> Self {
        Self {
            values: vec![placeholder; len],
            written: vec![false; len],
            remaining: len,
        }
    }
}

impl<T> ResultBuffer<T> {
    /// Number of slots not yet written.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Fill slot `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range or the slot was already written.
    #[inline]
    #[track_caller]
    pub fn write(&mut self, index: usize, value: T) {
        assert!(
            !self.written[index],
            "result slot {index} written more than once"
        );
        self.written[index] = true;
        self.values[index] = value;
        self.remaining -= 1;
    }

    /// Return the filled values.
    ///
    /// # Panics
    ///
    /// Panics if any slot was never written.
    #[track_caller]
    pub fn finish(self) -> Vec<T> {
        let remaining = self.remaining();
        assert_eq!(
            remaining,
            0,
            "{remaining} of {} result slots were never written",
            self.values.len()
        );
        self.values
    }
}
