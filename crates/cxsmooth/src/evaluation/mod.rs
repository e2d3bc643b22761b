//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer reduces smoothed series to the statistics consumed by reporting:
//! - Per-profile mean, minimum and maximum
//! - Pooled means for two-profile comparison
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Summary statistics.
pub mod summary;

/// Two-profile comparison statistics.
pub mod comparison;
