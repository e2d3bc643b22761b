//! Layer 3: Algorithms
//!
//! Core smoothing algorithms: length-preserving convolution, bidirectional
//! minimum combination, and the wide moving average.

/// Padded "valid" convolution (direct and FFT).
pub mod convolution;

/// Forward/backward filtering with pointwise minimum.
pub mod bidirectional;

/// Boxcar moving average for trend comparison.
pub mod moving_average;
