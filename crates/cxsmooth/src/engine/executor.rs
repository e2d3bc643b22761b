//! Execution engine for profile smoothing and comparison.
//!
//! ## Purpose
//!
//! This module turns a validated [`ComplexityProfile`] into a
//! [`SmoothedProfile`]: trim positions below `k`, resolve the window length,
//! build the kernel, run the requested filter direction(s), and attach the
//! retained positions. The comparison executor does the same with the
//! moving-average smoother for two profiles and adds summary means.
//!
//! ## Design notes
//!
//! * Provides both configuration-based and value-based entry points.
//! * Kernels are rebuilt per call; nothing is cached between runs.
//! * Window and method resolution are logged at `debug` level.
//! * Generic over [`Sample`] types (`f32`, `f64`).
//!
//! ## Invariants
//!
//! * Output length equals the trimmed input length.
//! * The input profile is never modified.
//!
//! ## Non-goals
//!
//! * This module does not fan out over many profiles (see `adapters::batch`).
//! * This module does not load or write profile files.

// External dependencies
use log::debug;

// Internal dependencies
use crate::algorithms::bidirectional::{FilterDirection, backward_filter, bidirectional_filter};
use crate::algorithms::convolution::{
    ConvolutionMethod, ConvolutionOptions, Sample, window_filter_with,
};
use crate::algorithms::moving_average::{DEFAULT_MOVING_WINDOW, moving_average};
use crate::engine::output::{ComparisonResult, SmoothedProfile};
use crate::evaluation::comparison::ComparisonStats;
use crate::math::boundary::PadMode;
use crate::math::kernel::{KernelType, WindowKernel};
use crate::primitives::errors::SmoothError;
use crate::primitives::profile::ComplexityProfile;
use crate::primitives::window::WindowSize;

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for single-profile smoothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SmoothingConfig {
    /// Kernel shape.
    pub kernel_type: KernelType,

    /// Fixed or adaptive window length.
    pub window_size: WindowSize,

    /// Boundary padding.
    pub pad_mode: PadMode,

    /// Which pass(es) produce the result.
    pub direction: FilterDirection,

    /// Convolution algorithm.
    pub method: ConvolutionMethod,

    /// Keep the trimmed input alongside the result.
    pub return_raw: bool,

    /// Keep the forward/backward passes alongside the result.
    pub return_directional: bool,

    /// Whether to use parallel execution
    #[doc(hidden)]
    pub parallel: bool,
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            kernel_type: KernelType::Blackman,
            window_size: WindowSize::Adaptive,
            pad_mode: PadMode::Edge,
            direction: FilterDirection::Bidirectional,
            method: ConvolutionMethod::Auto,
            return_raw: false,
            return_directional: false,
            parallel: false,
        }
    }
}

impl SmoothingConfig {
    /// Convolution options derived from this configuration.
    #[inline]
    pub fn convolution_options(&self) -> ConvolutionOptions {
        ConvolutionOptions {
            pad_mode: self.pad_mode,
            method: self.method,
            parallel: self.parallel,
        }
    }
}

/// Configuration for two-profile comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComparisonConfig {
    /// Moving-average window length (any value `>= 1`).
    pub window_size: usize,

    /// Boundary padding.
    pub pad_mode: PadMode,

    /// Convolution algorithm.
    pub method: ConvolutionMethod,

    /// Whether to use parallel execution
    #[doc(hidden)]
    pub parallel: bool,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_MOVING_WINDOW,
            pad_mode: PadMode::Edge,
            method: ConvolutionMethod::Auto,
            parallel: false,
        }
    }
}

impl ComparisonConfig {
    /// Convolution options derived from this configuration.
    #[inline]
    pub fn convolution_options(&self) -> ConvolutionOptions {
        ConvolutionOptions {
            pad_mode: self.pad_mode,
            method: self.method,
            parallel: self.parallel,
        }
    }
}

// ============================================================================
// Executor Output
// ============================================================================

/// Filter output for a bare signal.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutorOutput<T> {
    /// Series selected by the configured direction.
    pub smoothed: Vec<T>,

    /// Forward pass (if computed and requested).
    pub forward: Option<Vec<T>>,

    /// Backward pass (if computed and requested).
    pub backward: Option<Vec<T>>,

    /// Window length actually used.
    pub window_size: usize,
}

// ============================================================================
// Smoothing Executor
// ============================================================================

/// Runs the kernel filter on one profile.
#[derive(Debug, Clone, Copy, Default)]
pub struct SmoothingExecutor {
    config: SmoothingConfig,
}

impl SmoothingExecutor {
    /// Create an executor from a configuration.
    pub fn from_config(config: SmoothingConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &SmoothingConfig {
        &self.config
    }

    /// Smooth a profile: trim, resolve the window, filter.
    pub fn run<T: Sample>(
        &self,
        profile: &ComplexityProfile<T>,
    ) -> Result<SmoothedProfile<T>, SmoothError> {
        let trimmed = profile.trimmed()?;
        debug!(
            "{}: {} of {} points retained at k = {}",
            profile.sequence_id(),
            trimmed.len(),
            profile.len(),
            profile.k()
        );

        let out = self.run_values(trimmed.values)?;

        Ok(SmoothedProfile {
            sequence_id: profile.sequence_id().to_string(),
            positions: trimmed.positions.to_vec(),
            values: out.smoothed,
            window_size: out.window_size,
            kernel_type: self.config.kernel_type,
            direction: self.config.direction,
            raw: self.config.return_raw.then(|| trimmed.values.to_vec()),
            forward: out.forward,
            backward: out.backward,
        })
    }

    /// Smooth a bare signal with the configured kernel and direction.
    pub fn run_values<T: Sample>(&self, signal: &[T]) -> Result<ExecutorOutput<T>, SmoothError> {
        let cfg = &self.config;
        let window_size = cfg.window_size.resolve(signal.len());
        let kernel = WindowKernel::new(cfg.kernel_type, window_size)?;
        let options = cfg.convolution_options();

        debug!(
            "filter: kernel {} window {} ({:?}), pad {}, direction {}, method {}",
            cfg.kernel_type,
            window_size,
            cfg.window_size,
            cfg.pad_mode.name(),
            cfg.direction.name(),
            cfg.method
                .resolve(window_size, signal.len() + window_size - 1)
                .name()
        );

        let (smoothed, forward, backward) = match cfg.direction {
            FilterDirection::Forward => {
                let fwd = window_filter_with(signal, &kernel, options)?;
                let kept = cfg.return_directional.then(|| fwd.clone());
                (fwd, kept, None)
            }
            FilterDirection::Backward => {
                let bwd = backward_filter(signal, &kernel, options)?;
                let kept = cfg.return_directional.then(|| bwd.clone());
                (bwd, None, kept)
            }
            FilterDirection::Bidirectional => {
                let passes = bidirectional_filter(signal, &kernel, options)?;
                if cfg.return_directional {
                    (passes.combined, Some(passes.forward), Some(passes.backward))
                } else {
                    (passes.combined, None, None)
                }
            }
        };

        Ok(ExecutorOutput {
            smoothed,
            forward,
            backward,
            window_size,
        })
    }
}

// ============================================================================
// Comparison Executor
// ============================================================================

/// Runs the moving-average comparison on two profiles.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComparisonExecutor {
    config: ComparisonConfig,
}

impl ComparisonExecutor {
    /// Create an executor from a configuration.
    pub fn from_config(config: ComparisonConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &ComparisonConfig {
        &self.config
    }

    /// Trim and moving-average smooth one profile.
    pub fn smooth<T: Sample>(
        &self,
        profile: &ComplexityProfile<T>,
    ) -> Result<SmoothedProfile<T>, SmoothError> {
        let trimmed = profile.trimmed()?;
        let cfg = &self.config;

        debug!(
            "{}: moving average window {} over {} points, pad {}",
            profile.sequence_id(),
            cfg.window_size,
            trimmed.len(),
            cfg.pad_mode.name()
        );

        let values = moving_average(trimmed.values, cfg.window_size, cfg.convolution_options())?;

        Ok(SmoothedProfile {
            sequence_id: profile.sequence_id().to_string(),
            positions: trimmed.positions.to_vec(),
            values,
            window_size: cfg.window_size,
            kernel_type: KernelType::Boxcar,
            direction: FilterDirection::Forward,
            raw: None,
            forward: None,
            backward: None,
        })
    }

    /// Smooth both profiles and compute their means and pooled mean.
    pub fn run<T: Sample>(
        &self,
        first: &ComplexityProfile<T>,
        second: &ComplexityProfile<T>,
    ) -> Result<ComparisonResult<T>, SmoothError> {
        let first = self.smooth(first)?;
        let second = self.smooth(second)?;
        let stats = ComparisonStats::compute(&first.values, &second.values)?;

        Ok(ComparisonResult {
            first,
            second,
            mean_first: stats.first.mean,
            mean_second: stats.second.mean,
            pooled_mean: stats.pooled_mean,
        })
    }
}
