//! Two-profile comparison adapter.
//!
//! Smooths two profiles with a wide moving average (2000 samples unless
//! configured) and reports both means plus the pooled mean. Profiles are
//! compared as given; two headers naming the same biological sequence are
//! not merged.

// Internal dependencies
use crate::algorithms::convolution::{ConvolutionMethod, Sample};
use crate::engine::executor::{ComparisonConfig, ComparisonExecutor};
use crate::engine::output::{ComparisonResult, SmoothedProfile};
use crate::engine::validator::Validator;
use crate::math::boundary::PadMode;
use crate::primitives::errors::SmoothError;
use crate::primitives::profile::ComplexityProfile;

// ============================================================================
// Comparator Builder
// ============================================================================

/// Fluent builder for [`ProfileComparator`].
#[derive(Debug, Clone, Default)]
pub struct ComparatorBuilder {
    /// Moving-average window.
    pub window_size: Option<usize>,

    /// Boundary padding (default: Edge).
    pub pad_mode: Option<PadMode>,

    /// Convolution algorithm (default: Auto).
    pub method: Option<ConvolutionMethod>,

    /// Parallel execution hint.
    #[doc(hidden)]
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl ComparatorBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the moving-average window (any length `>= 1`).
    pub fn window_size(mut self, size: usize) -> Self {
        if self.window_size.is_some() {
            self.duplicate_param = Some("window_size");
        }
        self.window_size = Some(size);
        self
    }

    /// Set the boundary padding.
    pub fn pad_mode(mut self, mode: PadMode) -> Self {
        if self.pad_mode.is_some() {
            self.duplicate_param = Some("pad_mode");
        }
        self.pad_mode = Some(mode);
        self
    }

    /// Set the convolution algorithm.
    pub fn method(mut self, method: ConvolutionMethod) -> Self {
        if self.method.is_some() {
            self.duplicate_param = Some("method");
        }
        self.method = Some(method);
        self
    }

    /// Set parallel execution hint (only for dev)
    #[doc(hidden)]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }

    /// Build the comparator.
    pub fn build(self) -> Result<ProfileComparator, SmoothError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let defaults = ComparisonConfig::default();
        let config = ComparisonConfig {
            window_size: self.window_size.unwrap_or(defaults.window_size),
            pad_mode: self.pad_mode.unwrap_or(defaults.pad_mode),
            method: self.method.unwrap_or(defaults.method),
            parallel: self.parallel.unwrap_or(defaults.parallel),
        };
        Validator::validate_moving_window(config.window_size)?;

        Ok(ProfileComparator {
            executor: ComparisonExecutor::from_config(config),
        })
    }
}

// ============================================================================
// Comparator
// ============================================================================

/// Moving-average comparison of two profiles.
#[derive(Debug, Clone, Copy)]
pub struct ProfileComparator {
    executor: ComparisonExecutor,
}

impl ProfileComparator {
    /// Smooth both profiles and summarise them.
    ///
    /// Fails if either profile is empty after trimming or shorter than the
    /// window.
    pub fn compare<T: Sample>(
        &self,
        first: &ComplexityProfile<T>,
        second: &ComplexityProfile<T>,
    ) -> Result<ComparisonResult<T>, SmoothError> {
        self.executor.run(first, second)
    }

    /// Moving-average smooth one profile with the comparison settings.
    pub fn smooth<T: Sample>(
        &self,
        profile: &ComplexityProfile<T>,
    ) -> Result<SmoothedProfile<T>, SmoothError> {
        self.executor.smooth(profile)
    }

    /// Get the resolved configuration.
    pub fn config(&self) -> &ComparisonConfig {
        self.executor.config()
    }
}
