//! Input validation for smoothing configuration and data.
//!
//! ## Purpose
//!
//! This module provides the validation functions shared by profile
//! construction, kernel construction and the filters. It checks input lengths,
//! finiteness, position ordering and window bounds.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not trim, transform, or coerce input data.
//! * This module does not round even windows up; only adaptive sizing may do that.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::SmoothError;
use crate::primitives::window::MIN_KERNEL_WINDOW;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for profiles, signals and window parameters.
///
/// All methods return `Result<(), SmoothError>` and fail fast upon identifying
/// the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate the parts of a complexity profile.
    pub fn validate_profile<T: Float>(
        sequence_id: &str,
        k: u64,
        positions: &[u64],
        complexity: &[T],
    ) -> Result<(), SmoothError> {
        // Check 1: Identity and context length
        if sequence_id.trim().is_empty() {
            return Err(SmoothError::EmptySequenceId);
        }
        if k < 1 {
            return Err(SmoothError::InvalidContextLength(k));
        }

        // Check 2: Non-empty, matching lengths
        if complexity.is_empty() || positions.is_empty() {
            return Err(SmoothError::EmptyInput);
        }
        if positions.len() != complexity.len() {
            return Err(SmoothError::MismatchedInputs {
                positions_len: positions.len(),
                values_len: complexity.len(),
            });
        }

        // Check 3: Strictly increasing positions
        if let Some(i) = positions.windows(2).position(|w| w[1] <= w[0]) {
            return Err(SmoothError::UnorderedPositions {
                index: i + 1,
                previous: positions[i],
                current: positions[i + 1],
            });
        }

        // Check 4: Finite values
        Self::validate_finite(complexity, "complexity")
    }

    /// Validate a raw signal handed directly to a filter.
    pub fn validate_signal<T: Float>(signal: &[T]) -> Result<(), SmoothError> {
        if signal.is_empty() {
            return Err(SmoothError::EmptyInput);
        }
        Self::validate_finite(signal, "signal")
    }

    /// Validate that every value is finite.
    pub fn validate_finite<T: Float>(values: &[T], name: &str) -> Result<(), SmoothError> {
        match values.iter().position(|v| !v.is_finite()) {
            Some(i) => Err(SmoothError::InvalidNumericValue(format!(
                "{}[{}]={}",
                name,
                i,
                values[i].to_f64().unwrap_or(f64::NAN)
            ))),
            None => Ok(()),
        }
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate a kernel window: odd and at least 3.
    pub fn validate_kernel_window(window_size: usize) -> Result<(), SmoothError> {
        if window_size < MIN_KERNEL_WINDOW {
            return Err(SmoothError::WindowTooSmall {
                got: window_size,
                min: MIN_KERNEL_WINDOW,
            });
        }
        if window_size % 2 == 0 {
            return Err(SmoothError::EvenWindowSize(window_size));
        }
        Ok(())
    }

    /// Validate a moving-average window: at least one sample.
    pub fn validate_moving_window(window_size: usize) -> Result<(), SmoothError> {
        if window_size < 1 {
            return Err(SmoothError::WindowTooSmall {
                got: window_size,
                min: 1,
            });
        }
        Ok(())
    }

    /// Validate that a window does not exceed the signal it is applied to.
    pub fn validate_window_fits(window_size: usize, signal_len: usize) -> Result<(), SmoothError> {
        if window_size > signal_len {
            return Err(SmoothError::WindowExceedsSignal {
                window_size,
                signal_len,
            });
        }
        Ok(())
    }

    // ========================================================================
    // Output Validation
    // ========================================================================

    /// Validate that a transform produced finite output.
    pub fn validate_output<T: Float>(values: &[T], stage: &str) -> Result<(), SmoothError> {
        match values.iter().position(|v| !v.is_finite()) {
            Some(i) => Err(SmoothError::NonFiniteOutput(format!(
                "{stage} produced {} at index {i}",
                values[i].to_f64().unwrap_or(f64::NAN)
            ))),
            None => Ok(()),
        }
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), SmoothError> {
        if let Some(param) = duplicate_param {
            return Err(SmoothError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
