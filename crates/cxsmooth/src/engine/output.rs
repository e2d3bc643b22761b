//! Output types for smoothing and comparison runs.
//!
//! ## Purpose
//!
//! This module defines [`SmoothedProfile`], the result of smoothing one
//! profile, and [`ComparisonResult`], the result of comparing two. Both carry
//! enough metadata (window, kernel, direction) to reproduce the run.
//!
//! ## Design notes
//!
//! * **Memory Efficiency**: Optional series use `Option<Vec<T>>`.
//! * **Alignment**: `positions[i]` is the base position of `values[i]`.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//!
//! ## Invariants
//!
//! * All populated series have the same length as `positions`.
//! * `positions` is strictly increasing and every entry is `>= k`.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations beyond summaries.
//! * This module does not render plots or write files.

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::algorithms::bidirectional::FilterDirection;
use crate::evaluation::summary::ProfileSummary;
use crate::math::kernel::KernelType;

// ============================================================================
// Smoothed Profile
// ============================================================================

/// One smoothed complexity profile.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SmoothedProfile<T> {
    /// Identifier copied from the input profile.
    pub sequence_id: String,

    /// Retained base positions (those `>= k`).
    pub positions: Vec<u64>,

    /// Smoothed complexity, one value per retained position.
    pub values: Vec<T>,

    /// Window length actually used.
    pub window_size: usize,

    /// Kernel shape used.
    pub kernel_type: KernelType,

    /// Which pass(es) produced `values`.
    pub direction: FilterDirection,

    /// Trimmed input values, if requested.
    pub raw: Option<Vec<T>>,

    /// Forward pass, if requested and computed.
    pub forward: Option<Vec<T>>,

    /// Backward pass, if requested and computed.
    pub backward: Option<Vec<T>>,
}

impl<T: Float> SmoothedProfile<T> {
    /// Number of retained points.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// `true` if no points were retained (never the case for engine output).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// `(position, value)` pairs in position order.
    pub fn points(&self) -> impl Iterator<Item = (u64, T)> + '_ {
        self.positions
            .iter()
            .copied()
            .zip(self.values.iter().copied())
    }

    /// Mean, minimum and maximum of the smoothed values.
    pub fn summary(&self) -> Option<ProfileSummary<T>> {
        ProfileSummary::compute(&self.values)
    }

    /// Check if both directional passes were kept.
    pub fn has_directional_passes(&self) -> bool {
        self.forward.is_some() && self.backward.is_some()
    }
}

// ============================================================================
// Comparison Result
// ============================================================================

/// Two moving-average smoothed profiles and their means.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComparisonResult<T> {
    /// First profile after smoothing.
    pub first: SmoothedProfile<T>,

    /// Second profile after smoothing.
    pub second: SmoothedProfile<T>,

    /// Mean of `first.values`.
    pub mean_first: T,

    /// Mean of `second.values`.
    pub mean_second: T,

    /// Mean over the concatenation of both smoothed series.
    pub pooled_mean: T,
}

impl<T: Float> ComparisonResult<T> {
    /// `mean_first - mean_second`.
    #[inline]
    pub fn mean_difference(&self) -> T {
        self.mean_first - self.mean_second
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display + Debug> Display for SmoothedProfile<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Sequence:    {}", self.sequence_id)?;
        writeln!(f, "  Data points: {}", self.len())?;
        writeln!(f, "  Window:      {}", self.window_size)?;
        writeln!(f, "  Kernel:      {}", self.kernel_type)?;
        writeln!(f, "  Direction:   {}", self.direction.name())?;
        writeln!(f)?;

        if let Some(summary) = self.summary() {
            writeln!(f, "{}", summary)?;
        }

        writeln!(f, "Smoothed Data:")?;

        let has_raw = self.raw.is_some();
        let has_passes = self.has_directional_passes();

        write!(f, "{:>12} {:>12}", "Position", "Smoothed")?;
        if has_raw {
            write!(f, " {:>12}", "Raw")?;
        }
        if has_passes {
            write!(f, " {:>12} {:>12}", "Forward", "Backward")?;
        }
        writeln!(f)?;

        let line_width = 25 + if has_raw { 13 } else { 0 } + if has_passes { 26 } else { 0 };
        writeln!(f, "{:-<width$}", "", width = line_width)?;

        // Show the first and last 10 rows of long profiles
        let n = self.len();
        let rows: Vec<usize> = if n <= 20 {
            (0..n).collect()
        } else {
            (0..10).chain(n - 10..n).collect()
        };

        let mut prev_idx = 0;
        for (i, &idx) in rows.iter().enumerate() {
            if i > 0 && idx != prev_idx + 1 {
                writeln!(f, "{:>12}", "...")?;
            }
            prev_idx = idx;

            write!(f, "{:>12} {:>12.6}", self.positions[idx], self.values[idx])?;

            if let Some(raw) = &self.raw {
                write!(f, " {:>12.6}", raw[idx])?;
            }

            if let (Some(fwd), Some(bwd)) = (&self.forward, &self.backward) {
                write!(f, " {:>12.6} {:>12.6}", fwd[idx], bwd[idx])?;
            }

            writeln!(f)?;
        }

        Ok(())
    }
}

impl<T: Float + Display + Debug> Display for ComparisonResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Comparison:")?;
        writeln!(f, "  Window:      {}", self.first.window_size)?;
        writeln!(
            f,
            "  {:<24} points: {:>8}  mean: {:.6}",
            self.first.sequence_id,
            self.first.len(),
            self.mean_first
        )?;
        writeln!(
            f,
            "  {:<24} points: {:>8}  mean: {:.6}",
            self.second.sequence_id,
            self.second.len(),
            self.mean_second
        )?;
        writeln!(f, "  Pooled mean: {:.6}", self.pooled_mean)?;
        Ok(())
    }
}
