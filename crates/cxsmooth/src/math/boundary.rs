//! Boundary padding strategies for windowed convolution.
//!
//! ## Purpose
//!
//! This module extends a signal beyond its ends so a "valid" convolution returns
//! exactly one output per input sample. The choice of padding decides how the
//! smoothed profile behaves near the sequence ends.
//!
//! ## Design notes
//!
//! * **Strategy Pattern**: Uses `PadMode` to select the padding method.
//! * **Allocation**: Always returns a fresh vector; the input is never aliased.
//!
//! ## Key concepts
//!
//! * **Edge**: Replicate the first/last value (default for both pathways).
//! * **Reflect**: Mirror interior samples across the boundary.
//! * **Zero**: Pad with zeros. This reproduces the implicit behaviour of an
//!   unqualified "same"-length convolution and pulls the ends towards zero; it is
//!   kept for parity with older analyses only.
//!
//! ## Invariants
//!
//! * Output length is `left + signal.len() + right`.
//! * The original signal occupies `[left, left + signal.len())` unchanged.
//!
//! ## Non-goals
//!
//! * This module does not validate the pad lengths against the signal length.

// External dependencies
use num_traits::Float;

// ============================================================================
// Pad Mode
// ============================================================================

/// Policy for extending a signal past its boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PadMode {
    /// Replicate the boundary value.
    #[default]
    Edge,

    /// Mirror values across the boundary (excluding the boundary sample).
    Reflect,

    /// Pad with zeros.
    Zero,
}

impl PadMode {
    /// Get the name of the pad mode.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            PadMode::Edge => "edge",
            PadMode::Reflect => "reflect",
            PadMode::Zero => "zero",
        }
    }
}

// ============================================================================
// Padding Function
// ============================================================================

/// Pad `signal` with `left` samples before and `right` samples after.
///
/// Reflection wraps back and forth when the pad is longer than the signal, so
/// every index stays in range for any non-empty input.
pub fn pad_signal<T: Float>(signal: &[T], left: usize, right: usize, mode: PadMode) -> Vec<T> {
    let n = signal.len();
    let mut padded = Vec::with_capacity(left + n + right);
    if n == 0 {
        return padded;
    }

    // 1. Prepend padding
    match mode {
        PadMode::Edge => padded.extend(core::iter::repeat_n(signal[0], left)),
        PadMode::Zero => padded.extend(core::iter::repeat_n(T::zero(), left)),
        PadMode::Reflect => {
            for i in (1..=left).rev() {
                padded.push(signal[reflect_index(-(i as isize), n)]);
            }
        }
    }

    // 2. Add original data
    padded.extend_from_slice(signal);

    // 3. Append padding
    match mode {
        PadMode::Edge => padded.extend(core::iter::repeat_n(signal[n - 1], right)),
        PadMode::Zero => padded.extend(core::iter::repeat_n(T::zero(), right)),
        PadMode::Reflect => {
            for i in 1..=right {
                padded.push(signal[reflect_index((n - 1 + i) as isize, n)]);
            }
        }
    }

    padded
}

/// Map an out-of-range index onto `[0, n)` by mirroring about the end samples.
#[inline]
fn reflect_index(idx: isize, n: usize) -> usize {
    if n == 1 {
        return 0;
    }
    let period = 2 * (n as isize - 1);
    let m = idx.rem_euclid(period);
    if m < n as isize {
        m as usize
    } else {
        (period - m) as usize
    }
}
