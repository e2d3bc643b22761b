//! Window sizing for the convolution filters.
//!
//! This module resolves the filter length either from an explicit size or from
//! the length of the (trimmed) signal. Only adaptive sizing may adjust a size to
//! make it odd; explicit sizes are passed through untouched and validated later.

/// Fraction of the signal length covered by an adaptive window.
pub const ADAPTIVE_FRACTION: f64 = 0.05;

/// Smallest window the adaptive policy returns.
pub const MIN_KERNEL_WINDOW: usize = 3;

/// How the filter window length is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WindowSize {
    /// Use exactly this many samples.
    Fixed(usize),

    /// Derive the size from the signal length (see [`adaptive_window_size`]).
    #[default]
    Adaptive,
}

impl WindowSize {
    /// Resolve to a concrete length for a signal of `len` samples.
    #[inline]
    pub fn resolve(self, len: usize) -> usize {
        match self {
            WindowSize::Fixed(size) => size,
            WindowSize::Adaptive => adaptive_window_size(len),
        }
    }
}

/// Odd window covering roughly 5% of `len`, never below 3.
///
/// `max(round(0.05 * len), 3)`, bumped by one when even. Sequences range from
/// hundreds of bases to tens of megabases, so a fixed width would over-smooth
/// the short ones and under-smooth the long ones.
#[inline]
pub fn adaptive_window_size(len: usize) -> usize {
    let scaled = (ADAPTIVE_FRACTION * len as f64).round() as usize;
    let size = scaled.max(MIN_KERNEL_WINDOW);
    if size % 2 == 0 { size + 1 } else { size }
}

/// Left and right padding that centres a window of `window_size` samples.
///
/// Odd windows are symmetric. Even windows lean one sample to the left, which
/// matches the centring of a "same"-length convolution.
#[inline]
pub fn padding_for(window_size: usize) -> (usize, usize) {
    (window_size / 2, window_size.saturating_sub(1) / 2)
}
