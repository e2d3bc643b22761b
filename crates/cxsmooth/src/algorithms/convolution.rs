//! Length-preserving windowed convolution.
//!
//! ## Purpose
//!
//! This module implements the window filter: pad a signal according to a
//! [`PadMode`], then run a "valid" convolution so the output has exactly one
//! sample per input sample. Both the kernel filter and the moving-average
//! smoother are built on it.
//!
//! ## Design notes
//!
//! * **Direct**: O(L x W), optionally split across threads with `rayon`.
//! * **FFT**: O(L log L) through `rustfft`, used for wide windows on long signals.
//! * **Reference offset**: Both paths convolve deviations from a reference sample and
//!   add the reference back, so a constant signal comes out exactly constant. When a
//!   deviation overflows (magnitudes near the float limit) the direct path falls back
//!   to the plain weighted sum and the FFT path to the direct path.
//!
//! ## Invariants
//!
//! * Output length equals input length.
//! * The input buffer is never modified or aliased.
//! * For a given method the result is bit-identical across calls and thread counts.
//!
//! ## Non-goals
//!
//! * This module does not choose window sizes (see `primitives::window`).

// Feature-gated imports
#[cfg(feature = "parallel")]
use rayon::prelude::*;

// External dependencies
use log::debug;
use num_traits::Float;
use rustfft::num_complex::Complex;
use rustfft::{FftNum, FftPlanner};

// Internal dependencies
use crate::engine::validator::Validator;
use crate::math::boundary::{PadMode, pad_signal};
use crate::math::kernel::{KernelType, WindowKernel};
use crate::primitives::errors::SmoothError;
use crate::primitives::window::padding_for;

// ============================================================================
// Sample Trait
// ============================================================================

/// Floating-point sample type accepted by the filters (`f32` or `f64`).
pub trait Sample: Float + FftNum {}

impl<T: Float + FftNum> Sample for T {}

// ============================================================================
// Convolution Method
// ============================================================================

/// Smallest window for which `Auto` considers the FFT path.
pub const FFT_MIN_WINDOW: usize = 256;

/// Smallest padded length for which `Auto` considers the FFT path.
pub const FFT_MIN_LEN: usize = 65_536;

/// Algorithm used to evaluate the convolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ConvolutionMethod {
    /// Sliding dot product.
    Direct,

    /// Frequency-domain product.
    Fft,

    /// Direct for narrow windows or short signals, FFT otherwise.
    #[default]
    Auto,
}

impl ConvolutionMethod {
    /// Get the name of the method.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            ConvolutionMethod::Direct => "direct",
            ConvolutionMethod::Fft => "fft",
            ConvolutionMethod::Auto => "auto",
        }
    }

    /// Resolve `Auto` for a window of `window_size` over `padded_len` samples.
    #[inline]
    pub fn resolve(self, window_size: usize, padded_len: usize) -> ConvolutionMethod {
        match self {
            ConvolutionMethod::Auto => {
                if window_size >= FFT_MIN_WINDOW && padded_len >= FFT_MIN_LEN {
                    ConvolutionMethod::Fft
                } else {
                    ConvolutionMethod::Direct
                }
            }
            other => other,
        }
    }
}

// ============================================================================
// Options
// ============================================================================

/// Boundary and execution settings shared by every convolution call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConvolutionOptions {
    /// Padding policy applied before the valid convolution.
    pub pad_mode: PadMode,

    /// Convolution algorithm.
    pub method: ConvolutionMethod,

    /// Spread direct convolution across threads (needs the `parallel` feature).
    pub parallel: bool,
}

// ============================================================================
// Window Filter
// ============================================================================

/// Smooth `signal` with `kernel` using edge padding and automatic method choice.
pub fn window_filter<T: Sample>(
    signal: &[T],
    kernel: &WindowKernel<T>,
) -> Result<Vec<T>, SmoothError> {
    window_filter_with(signal, kernel, ConvolutionOptions::default())
}

/// Build a `kind` kernel of `window_size` taps and smooth `signal` with it.
///
/// The window is used as given: an even size is rejected, never rounded.
pub fn filter_signal<T: Sample>(
    signal: &[T],
    kind: KernelType,
    window_size: usize,
) -> Result<Vec<T>, SmoothError> {
    let kernel = WindowKernel::new(kind, window_size)?;
    window_filter(signal, &kernel)
}

/// Smooth `signal` with `kernel` under explicit options.
///
/// Fails with an invalid-input error for empty or non-finite signals and with an
/// invalid-parameter error if the kernel is longer than the signal.
pub fn window_filter_with<T: Sample>(
    signal: &[T],
    kernel: &WindowKernel<T>,
    options: ConvolutionOptions,
) -> Result<Vec<T>, SmoothError> {
    convolve_same(signal, kernel.weights(), options)
}

/// Pad and convolve `signal` with arbitrary `weights`, preserving length.
///
/// `weights` may have even length; the window then leans one sample left.
pub fn convolve_same<T: Sample>(
    signal: &[T],
    weights: &[T],
    options: ConvolutionOptions,
) -> Result<Vec<T>, SmoothError> {
    Validator::validate_signal(signal)?;
    Validator::validate_moving_window(weights.len())?;
    Validator::validate_window_fits(weights.len(), signal.len())?;

    let (left, right) = padding_for(weights.len());
    let padded = pad_signal(signal, left, right, options.pad_mode);

    let out = match options.method.resolve(weights.len(), padded.len()) {
        ConvolutionMethod::Fft => {
            let out = convolve_valid_fft(&padded, weights);
            if out.iter().all(|v| v.is_finite()) {
                out
            } else {
                debug!("fft convolution overflowed, recomputing directly");
                convolve_valid_direct(&padded, weights, left, options.parallel)
            }
        }
        _ => convolve_valid_direct(&padded, weights, left, options.parallel),
    };

    Validator::validate_output(&out, "convolution")?;
    Ok(out)
}

// ============================================================================
// Direct Convolution
// ============================================================================

/// Valid convolution by sliding dot product.
///
/// Output sample `i` is centred on `padded[i + anchor]`, which also serves as the
/// reference value deviations are taken from.
pub fn convolve_valid_direct<T: Sample>(
    padded: &[T],
    weights: &[T],
    anchor: usize,
    parallel: bool,
) -> Vec<T> {
    let m = weights.len();
    if m == 0 || padded.len() < m {
        return Vec::new();
    }
    let out_len = padded.len() - m + 1;

    if parallel {
        return direct_parallel(padded, weights, anchor, out_len);
    }

    (0..out_len)
        .map(|i| dot_at(padded, weights, i, anchor))
        .collect()
}

#[cfg(feature = "parallel")]
fn direct_parallel<T: Sample>(padded: &[T], weights: &[T], anchor: usize, out_len: usize) -> Vec<T> {
    (0..out_len)
        .into_par_iter()
        .map(|i| dot_at(padded, weights, i, anchor))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn direct_parallel<T: Sample>(padded: &[T], weights: &[T], anchor: usize, out_len: usize) -> Vec<T> {
    (0..out_len)
        .map(|i| dot_at(padded, weights, i, anchor))
        .collect()
}

#[inline]
fn dot_at<T: Float>(padded: &[T], weights: &[T], i: usize, anchor: usize) -> T {
    let reference = padded[i + anchor];
    let window = &padded[i..i + weights.len()];

    let acc = window
        .iter()
        .zip(weights.iter().rev())
        .fold(T::zero(), |acc, (&x, &w)| acc + w * (x - reference));

    let out = reference + acc;
    if out.is_finite() {
        return out;
    }

    // Deviations overflow near the float limit
    window
        .iter()
        .zip(weights.iter().rev())
        .fold(T::zero(), |acc, (&x, &w)| acc + w * x)
}

// ============================================================================
// FFT Convolution
// ============================================================================

/// Valid convolution through the FFT.
pub fn convolve_valid_fft<T: Sample>(padded: &[T], weights: &[T]) -> Vec<T> {
    let m = weights.len();
    let p = padded.len();
    if m == 0 || p < m {
        return Vec::new();
    }

    // Linear (not circular) convolution needs p + m - 1 bins.
    let size = (p + m - 1).next_power_of_two();
    let reference = padded[0];
    let zero = Complex::new(T::zero(), T::zero());

    let mut signal_bins: Vec<Complex<T>> = Vec::with_capacity(size);
    signal_bins.extend(padded.iter().map(|&v| Complex::new(v - reference, T::zero())));
    signal_bins.resize(size, zero);

    let mut kernel_bins: Vec<Complex<T>> = Vec::with_capacity(size);
    kernel_bins.extend(weights.iter().map(|&w| Complex::new(w, T::zero())));
    kernel_bins.resize(size, zero);

    let mut planner = FftPlanner::<T>::new();
    let forward = planner.plan_fft_forward(size);
    let inverse = planner.plan_fft_inverse(size);

    forward.process(&mut signal_bins);
    forward.process(&mut kernel_bins);
    for (s, k) in signal_bins.iter_mut().zip(kernel_bins.iter()) {
        *s = *s * *k;
    }
    inverse.process(&mut signal_bins);

    let scale = T::one() / T::from(size).unwrap_or_else(T::one);
    signal_bins[m - 1..p]
        .iter()
        .map(|c| reference + c.re * scale)
        .collect()
}
