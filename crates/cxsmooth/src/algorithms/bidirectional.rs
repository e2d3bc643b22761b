//! Forward/backward filtering combined by pointwise minimum.
//!
//! ## Purpose
//!
//! A one-directional low-pass filter can smear the edge of a low-complexity
//! region asymmetrically, leaking the dip earlier or later than the true
//! transition depending on scan direction. This module filters the signal in
//! both directions and keeps the smaller value at every position, so anything
//! flagged low by either scan stays low.
//!
//! This is a domain heuristic for locating repeats and other low-complexity
//! regions. It is not a statistically optimal filter.
//!
//! ## Design notes
//!
//! * **Backward pass**: Reverse the signal, filter, reverse the result back.
//! * **Join**: With the `parallel` feature both passes may run concurrently via
//!   `rayon::join`; the minimum is only taken once both have finished.
//!
//! ## Invariants
//!
//! * `combined[i] == min(forward[i], backward[i])` for every `i`.
//! * All three series have the input length.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::convolution::{ConvolutionOptions, Sample, window_filter_with};
use crate::math::kernel::WindowKernel;
use crate::primitives::errors::SmoothError;

// ============================================================================
// Filter Direction
// ============================================================================

/// Which filtering pass(es) produce the reported profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FilterDirection {
    /// Filter in scan order only.
    Forward,

    /// Filter the reversed signal and restore orientation.
    Backward,

    /// Pointwise minimum of the forward and backward passes.
    #[default]
    Bidirectional,
}

impl FilterDirection {
    /// Get the name of the direction.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            FilterDirection::Forward => "forward",
            FilterDirection::Backward => "backward",
            FilterDirection::Bidirectional => "bidirectional",
        }
    }
}

// ============================================================================
// Combined Output
// ============================================================================

/// Both directional passes and their pointwise minimum.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionalPasses<T> {
    /// Filter output in scan order.
    pub forward: Vec<T>,

    /// Filter output of the reversed signal, restored to scan order.
    pub backward: Vec<T>,

    /// `min(forward[i], backward[i])`.
    pub combined: Vec<T>,
}

// ============================================================================
// Passes
// ============================================================================

/// Filter the time-reversed signal and reverse the result back.
pub fn backward_filter<T: Sample>(
    signal: &[T],
    kernel: &WindowKernel<T>,
    options: ConvolutionOptions,
) -> Result<Vec<T>, SmoothError> {
    let reversed: Vec<T> = signal.iter().rev().copied().collect();
    let mut out = window_filter_with(&reversed, kernel, options)?;
    out.reverse();
    Ok(out)
}

/// Run both passes and combine them.
pub fn bidirectional_filter<T: Sample>(
    signal: &[T],
    kernel: &WindowKernel<T>,
    options: ConvolutionOptions,
) -> Result<DirectionalPasses<T>, SmoothError> {
    let (forward, backward) = run_passes(signal, kernel, options);
    let forward = forward?;
    let backward = backward?;
    let combined = pointwise_min(&forward, &backward);

    Ok(DirectionalPasses {
        forward,
        backward,
        combined,
    })
}

/// Elementwise minimum of two equal-length series.
pub fn pointwise_min<T: Float>(a: &[T], b: &[T]) -> Vec<T> {
    debug_assert_eq!(a.len(), b.len(), "pointwise_min: length mismatch");
    a.iter().zip(b.iter()).map(|(&x, &y)| x.min(y)).collect()
}

type PassResult<T> = Result<Vec<T>, SmoothError>;

#[cfg(feature = "parallel")]
fn run_passes<T: Sample>(
    signal: &[T],
    kernel: &WindowKernel<T>,
    options: ConvolutionOptions,
) -> (PassResult<T>, PassResult<T>) {
    if options.parallel {
        rayon::join(
            || window_filter_with(signal, kernel, options),
            || backward_filter(signal, kernel, options),
        )
    } else {
        (
            window_filter_with(signal, kernel, options),
            backward_filter(signal, kernel, options),
        )
    }
}

#[cfg(not(feature = "parallel"))]
fn run_passes<T: Sample>(
    signal: &[T],
    kernel: &WindowKernel<T>,
    options: ConvolutionOptions,
) -> (PassResult<T>, PassResult<T>) {
    (
        window_filter_with(signal, kernel, options),
        backward_filter(signal, kernel, options),
    )
}
