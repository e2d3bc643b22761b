//! Summary statistics for smoothed profiles.
//!
//! ## Purpose
//!
//! This module reduces a smoothed series to the scalars handed to external
//! reporting: length, arithmetic mean, minimum and maximum. Pooled statistics
//! over several series are obtained by feeding them into one accumulator.
//!
//! ## Design notes
//!
//! * **Streaming state**: `SummaryState` accumulates chunk by chunk, so a pooled mean
//!   over two arrays equals the mean of their concatenation (same summation order).
//! * **Generics**: All computations are generic over `Float` types.
//!
//! ## Invariants
//!
//! * `min <= mean <= max` for every non-empty summary.
//!
//! ## Non-goals
//!
//! * This module does not compute variances, quantiles or hypothesis tests.

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// ============================================================================
// Summary Structure
// ============================================================================

/// Scalar summary of one series.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProfileSummary<T> {
    /// Number of values summarised.
    pub len: usize,

    /// Arithmetic mean.
    pub mean: T,

    /// Smallest value.
    pub min: T,

    /// Largest value.
    pub max: T,
}

impl<T: Float> ProfileSummary<T> {
    /// Summarise `values`; `None` when empty.
    pub fn compute(values: &[T]) -> Option<Self> {
        let mut state = SummaryState::new();
        state.update(values);
        state.finalize()
    }
}

// ============================================================================
// Accumulator
// ============================================================================

/// Running totals for a summary that may span several series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryState<T> {
    /// Number of values seen.
    pub n: usize,
    /// Sum of values.
    pub sum: T,
    /// Smallest value seen.
    pub min: T,
    /// Largest value seen.
    pub max: T,
}

impl<T: Float> Default for SummaryState<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> SummaryState<T> {
    /// Create a new, empty state.
    pub fn new() -> Self {
        Self {
            n: 0,
            sum: T::zero(),
            min: T::infinity(),
            max: T::neg_infinity(),
        }
    }

    /// Fold a chunk of values into the state.
    pub fn update(&mut self, values: &[T]) {
        for &v in values {
            self.n += 1;
            self.sum = self.sum + v;
            self.min = self.min.min(v);
            self.max = self.max.max(v);
        }
    }

    /// Produce the summary, or `None` if nothing was accumulated.
    pub fn finalize(&self) -> Option<ProfileSummary<T>> {
        if self.n == 0 {
            return None;
        }
        let n_t = T::from(self.n)?;

        Some(ProfileSummary {
            len: self.n,
            mean: self.sum / n_t,
            min: self.min,
            max: self.max,
        })
    }
}

/// Mean over the concatenation of all `series`; `None` if they are all empty.
pub fn pooled_mean<T: Float>(series: &[&[T]]) -> Option<T> {
    let mut state = SummaryState::new();
    for s in series {
        state.update(s);
    }
    state.finalize().map(|summary| summary.mean)
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for ProfileSummary<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Profile Summary:")?;
        writeln!(f, "  Points: {}", self.len)?;
        writeln!(f, "  Mean:   {:.6}", self.mean)?;
        writeln!(f, "  Min:    {:.6}", self.min)?;
        writeln!(f, "  Max:    {:.6}", self.max)?;
        Ok(())
    }
}
