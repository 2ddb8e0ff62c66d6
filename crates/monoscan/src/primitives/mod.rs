//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the value abstraction, the monotonic deque and the
//! result buffer shared by every scan. It has zero internal dependencies
//! within the crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Numeric value abstraction.
pub mod scalar;

/// Monotonic deque of indexed items.
pub mod deque;

/// Write-once result buffers.
pub mod buffer;

/// Shared error types.
pub mod errors;
