//! Error types for complexity-profile smoothing.
//!
//! ## Purpose
//!
//! This module defines every error condition raised while validating
//! profiles, building kernels, filtering signals and comparing profiles.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending values (lengths, window sizes, indices).
//! * **Classified**: Every variant maps onto one of three [`ErrorKind`]s so batch
//!   callers can record failures without matching on individual variants.
//! * **Deferred**: Builder misconfiguration is stored and surfaced by `build()`.
//!
//! ## Key concepts
//!
//! 1. **Invalid input**: Empty or mismatched arrays, non-finite values, bad `k`,
//!    unordered positions, or nothing left after trimming.
//! 2. **Invalid parameter**: Even or too-small windows, windows longer than the
//!    signal, unknown kernel names, duplicated builder parameters.
//! 3. **Numeric degeneracy**: Kernels that cannot be normalised, non-finite output.
//!
//! ## Invariants
//!
//! * Errors are never retried internally: every transform is deterministic.
//!
//! ## Non-goals
//!
//! * This module does not perform validation itself (see `engine::validator`).

// External dependencies
use core::fmt::{Display, Formatter, Result};
use std::error::Error;

// ============================================================================
// Error Kind
// ============================================================================

/// Coarse classification of a [`SmoothError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    /// The profile or signal handed in violates its invariants.
    InvalidInput,

    /// A caller-supplied parameter is out of range.
    InvalidParameter,

    /// A transform produced a numerically unusable result.
    NumericDegenerate,
}

impl ErrorKind {
    /// Get the name of the error kind.
    pub const fn name(&self) -> &'static str {
        match self {
            ErrorKind::InvalidInput => "InvalidInput",
            ErrorKind::InvalidParameter => "InvalidParameter",
            ErrorKind::NumericDegenerate => "NumericDegenerate",
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Error Type
// ============================================================================

/// Error type for smoothing operations.
#[derive(Debug, Clone, PartialEq)]
pub enum SmoothError {
    /// The complexity (or signal) array is empty.
    EmptyInput,

    /// `positions` and `complexity` must have the same number of elements.
    MismatchedInputs {
        /// Number of positions.
        positions_len: usize,
        /// Number of complexity values.
        values_len: usize,
    },

    /// Input data contains NaN or infinite values.
    InvalidNumericValue(String),

    /// The estimator context length `k` must be at least 1.
    InvalidContextLength(u64),

    /// Profiles must carry a non-empty sequence identifier.
    EmptySequenceId,

    /// Positions must be strictly increasing.
    UnorderedPositions {
        /// Index of the first offending position.
        index: usize,
        /// Position preceding the offending one.
        previous: u64,
        /// The offending position.
        current: u64,
    },

    /// No positions remain once positions below `k` are discarded.
    EmptyAfterTrim {
        /// Identifier of the profile.
        sequence_id: String,
        /// Context length used for trimming.
        k: u64,
    },

    /// Kernel windows must have odd length.
    EvenWindowSize(usize),

    /// Window is below the minimum length for the operation.
    WindowTooSmall {
        /// The window size provided.
        got: usize,
        /// Minimum accepted window size.
        min: usize,
    },

    /// Window is longer than the signal it is applied to.
    WindowExceedsSignal {
        /// The window size provided.
        window_size: usize,
        /// Length of the signal.
        signal_len: usize,
    },

    /// Kernel name is not recognised.
    UnknownKernel(String),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },

    /// Kernel weights cannot be normalised to sum to one.
    DegenerateKernel(String),

    /// A transform produced NaN or infinite output.
    NonFiniteOutput(String),
}

impl SmoothError {
    /// Classify the error.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyInput
            | Self::MismatchedInputs { .. }
            | Self::InvalidNumericValue(_)
            | Self::InvalidContextLength(_)
            | Self::EmptySequenceId
            | Self::UnorderedPositions { .. }
            | Self::EmptyAfterTrim { .. } => ErrorKind::InvalidInput,
            Self::EvenWindowSize(_)
            | Self::WindowTooSmall { .. }
            | Self::WindowExceedsSignal { .. }
            | Self::UnknownKernel(_)
            | Self::DuplicateParameter { .. } => ErrorKind::InvalidParameter,
            Self::DegenerateKernel(_) | Self::NonFiniteOutput(_) => ErrorKind::NumericDegenerate,
        }
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SmoothError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input arrays are empty"),
            Self::MismatchedInputs {
                positions_len,
                values_len,
            } => write!(
                f,
                "Length mismatch: {positions_len} positions, {values_len} complexity values"
            ),
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::InvalidContextLength(k) => {
                write!(f, "Invalid context length k={k} (must be >= 1)")
            }
            Self::EmptySequenceId => write!(f, "Sequence identifier is empty"),
            Self::UnorderedPositions {
                index,
                previous,
                current,
            } => write!(
                f,
                "Positions must be strictly increasing: positions[{index}]={current} follows {previous}"
            ),
            Self::EmptyAfterTrim { sequence_id, k } => write!(
                f,
                "Profile '{sequence_id}' has no positions >= k={k}"
            ),
            Self::EvenWindowSize(size) => {
                write!(f, "Invalid window_size: {size} (must be odd)")
            }
            Self::WindowTooSmall { got, min } => {
                write!(f, "Invalid window_size: {got} (must be at least {min})")
            }
            Self::WindowExceedsSignal {
                window_size,
                signal_len,
            } => write!(
                f,
                "Invalid window_size: {window_size} exceeds signal length {signal_len}"
            ),
            Self::UnknownKernel(name) => {
                write!(f, "Unknown kernel type '{name}' (expected blackman or boxcar)")
            }
            Self::DuplicateParameter { parameter } => write!(
                f,
                "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
            ),
            Self::DegenerateKernel(msg) => write!(f, "Degenerate kernel: {msg}"),
            Self::NonFiniteOutput(msg) => write!(f, "Non-finite output: {msg}"),
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

impl Error for SmoothError {}
