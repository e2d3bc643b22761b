//! Statistics for comparing two smoothed profiles.
//!
//! The two profiles may describe the same biological sequence under different
//! header conventions; they are treated as independent inputs and nothing here
//! attempts to deduplicate them.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::evaluation::summary::{ProfileSummary, pooled_mean};
use crate::primitives::errors::SmoothError;

/// Per-profile summaries plus the pooled mean of both series.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComparisonStats<T> {
    /// Summary of the first smoothed series.
    pub first: ProfileSummary<T>,

    /// Summary of the second smoothed series.
    pub second: ProfileSummary<T>,

    /// Mean over the concatenation of both series.
    pub pooled_mean: T,
}

impl<T: Float> ComparisonStats<T> {
    /// Summarise two smoothed series.
    pub fn compute(first: &[T], second: &[T]) -> Result<Self, SmoothError> {
        let first_summary = ProfileSummary::compute(first).ok_or(SmoothError::EmptyInput)?;
        let second_summary = ProfileSummary::compute(second).ok_or(SmoothError::EmptyInput)?;

        let pooled = pooled_mean(&[first, second]).ok_or(SmoothError::EmptyInput)?;

        Ok(Self {
            first: first_summary,
            second: second_summary,
            pooled_mean: pooled,
        })
    }

    /// Difference of the two means (`first - second`).
    #[inline]
    pub fn mean_difference(&self) -> T {
        self.first.mean - self.second.mean
    }
}
