//! Layer 6: Adapters
//!
//! # Purpose
//!
//! This layer provides user-facing APIs that adapt the engine layer for different
//! execution modes and use cases:
//!
//! - **Single**: One profile at a time, for inspection
//! - **Batch**: Many profiles with per-profile failure isolation
//! - **Compare**: Moving-average comparison of two profiles
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters ← You are here
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Single-profile smoother.
pub mod single;

/// Batch smoother for profile collections.
pub mod batch;

/// Two-profile comparator.
pub mod compare;
