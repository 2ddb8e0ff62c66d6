//! Layer 3: Engine
//!
//! # Purpose
//!
//! This layer sits between the scans and the public API: it validates
//! inputs, packages results, and dispatches batches of independent inputs.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives
//! ```

/// Validation utilities.
pub mod validator;

/// Output types for scanner operations.
pub mod output;

/// Sequential and parallel batch dispatch.
pub mod batch;
