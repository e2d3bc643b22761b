//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer orchestrates smoothing runs by coordinating between
//! primitives (profiles, window sizing) and algorithms (convolution,
//! bidirectional combination, moving average). It validates inputs and
//! assembles the output records.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Execution engine for smoothing and comparison.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for smoothing operations.
pub mod output;
