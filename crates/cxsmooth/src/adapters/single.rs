//! Single-profile adapter for kernel smoothing.
//!
//! ## Purpose
//!
//! This module provides the adapter used to inspect one sequence at a time:
//! the profile is trimmed, a window is resolved (adaptively by default), and
//! the bidirectional Blackman filter (or the configured variant) is applied.
//!
//! ## Design notes
//!
//! * **Delegation**: Computation is delegated to [`SmoothingExecutor`].
//! * **Validation**: Fixed windows are checked in `build()`, adaptive ones per profile.
//! * **Generics**: The built smoother is not tied to a sample type; `f32` and
//!   `f64` profiles can go through the same instance.
//!
//! ## Non-goals
//!
//! * This adapter does not process many profiles at once (see `batch`).

// Internal dependencies
use crate::algorithms::bidirectional::FilterDirection;
use crate::algorithms::convolution::{ConvolutionMethod, Sample};
use crate::engine::executor::{SmoothingConfig, SmoothingExecutor};
use crate::engine::output::SmoothedProfile;
use crate::engine::validator::Validator;
use crate::math::boundary::PadMode;
use crate::math::kernel::KernelType;
use crate::primitives::errors::SmoothError;
use crate::primitives::profile::ComplexityProfile;
use crate::primitives::window::WindowSize;

// ============================================================================
// Single Smoother Builder
// ============================================================================

/// Builder for the single-profile smoother.
#[derive(Debug, Clone, Default)]
pub struct SingleSmootherBuilder {
    /// Kernel shape
    pub kernel_type: KernelType,

    /// Fixed or adaptive window
    pub window_size: WindowSize,

    /// Boundary padding
    pub pad_mode: PadMode,

    /// Which pass(es) produce the result
    pub direction: FilterDirection,

    /// Convolution algorithm
    pub method: ConvolutionMethod,

    /// Whether to keep the trimmed input
    pub return_raw: bool,

    /// Whether to keep the forward/backward passes
    pub return_directional: bool,

    /// Deferred error from adapter conversion
    pub deferred_error: Option<SmoothError>,

    /// Parallel execution hint.
    #[doc(hidden)]
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl SingleSmootherBuilder {
    /// Set the kernel shape.
    pub fn kernel_type(mut self, kind: KernelType) -> Self {
        self.kernel_type = kind;
        self
    }

    /// Set the window size.
    pub fn window_size(mut self, size: WindowSize) -> Self {
        self.window_size = size;
        self
    }

    /// Set the boundary padding.
    pub fn pad_mode(mut self, mode: PadMode) -> Self {
        self.pad_mode = mode;
        self
    }

    /// Set the filter direction.
    pub fn direction(mut self, direction: FilterDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Set parallel execution hint.
    #[doc(hidden)]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }

    /// Resolved configuration.
    pub(crate) fn to_config(&self) -> SmoothingConfig {
        SmoothingConfig {
            kernel_type: self.kernel_type,
            window_size: self.window_size,
            pad_mode: self.pad_mode,
            direction: self.direction,
            method: self.method,
            return_raw: self.return_raw,
            return_directional: self.return_directional,
            parallel: self.parallel.unwrap_or(false),
        }
    }

    /// Check builder state shared by the single and batch adapters.
    pub(crate) fn validate(&self) -> Result<(), SmoothError> {
        if let Some(err) = &self.deferred_error {
            return Err(err.clone());
        }

        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        // Adaptive windows are odd by construction; fixed ones are taken as given
        if let WindowSize::Fixed(size) = self.window_size {
            Validator::validate_kernel_window(size)?;
        }

        Ok(())
    }

    /// Build the smoother.
    pub fn build(self) -> Result<SingleSmoother, SmoothError> {
        self.validate()?;
        Ok(SingleSmoother {
            executor: SmoothingExecutor::from_config(self.to_config()),
        })
    }
}

// ============================================================================
// Single Smoother
// ============================================================================

/// Kernel smoother for one profile at a time.
#[derive(Debug, Clone, Copy)]
pub struct SingleSmoother {
    executor: SmoothingExecutor,
}

impl SingleSmoother {
    /// Smooth one profile.
    pub fn smooth<T: Sample>(
        &self,
        profile: &ComplexityProfile<T>,
    ) -> Result<SmoothedProfile<T>, SmoothError> {
        self.executor.run(profile)
    }

    /// Smooth a bare signal without position bookkeeping or trimming.
    pub fn smooth_values<T: Sample>(&self, signal: &[T]) -> Result<Vec<T>, SmoothError> {
        Validator::validate_signal(signal)?;
        self.executor.run_values(signal).map(|out| out.smoothed)
    }

    /// Get the resolved configuration.
    pub fn config(&self) -> &SmoothingConfig {
        self.executor.config()
    }
}
