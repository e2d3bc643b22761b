//! Wide boxcar smoothing for trend-level comparison.
//!
//! This smoother is meant for comparing whole profiles, not for denoising: a
//! window of thousands of bases deliberately erases short-range structure.
//! Boundaries are handled explicitly through [`PadMode`] (edge replication by
//! default) instead of the implicit zero padding of a plain "same" convolution,
//! which would drag both ends of every profile towards zero. Windows of any
//! length from 1 up to the signal length are accepted; even windows lean one
//! sample to the left.

// Internal dependencies
use crate::algorithms::convolution::{ConvolutionOptions, Sample, convolve_same};
use crate::engine::validator::Validator;
use crate::math::boundary::PadMode;
use crate::primitives::errors::SmoothError;

/// Window used for profile comparison unless configured otherwise.
pub const DEFAULT_MOVING_WINDOW: usize = 2000;

/// Boxcar moving average of `signal` over `window_size` samples.
pub fn moving_average<T: Sample>(
    signal: &[T],
    window_size: usize,
    options: ConvolutionOptions,
) -> Result<Vec<T>, SmoothError> {
    Validator::validate_moving_window(window_size)?;
    let w = T::one() / T::from(window_size).unwrap_or_else(T::one);
    convolve_same(signal, &vec![w; window_size], options)
}

/// Moving average with the legacy zero padding at both ends.
///
/// Matches the numbers produced by older analyses that relied on an unqualified
/// "same"-length convolution.
pub fn moving_average_zero_padded<T: Sample>(
    signal: &[T],
    window_size: usize,
) -> Result<Vec<T>, SmoothError> {
    moving_average(
        signal,
        window_size,
        ConvolutionOptions {
            pad_mode: PadMode::Zero,
            ..ConvolutionOptions::default()
        },
    )
}
