//! High-level API for complexity-profile smoothing.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry points. It implements a
//! fluent builder for configuring the kernel filter and choosing an execution
//! adapter (Single or Batch), plus the comparator builder for the
//! moving-average pathway.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with defaults for all parameters.
//! * **Polymorphic**: Uses marker types to transition to specialized adapter builders.
//! * **Validated**: Parameters are validated when `.build()` is called on the adapter.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`SmootherBuilder`] via `Smoother::new()`.
//! 2. Chain configuration methods (`.kernel_type()`, `.window_size()`, etc.).
//! 3. Select an adapter via `.adapter(Adapter::Single)` to get an execution builder.
//! 4. Call `.build()`.

// Internal dependencies
use crate::adapters::batch::BatchSmootherBuilder;
use crate::adapters::single::SingleSmootherBuilder;

// Publicly re-exported types
pub use crate::adapters::batch::{BatchReport, BatchSmoother, ProfileFailure};
pub use crate::adapters::compare::{ComparatorBuilder, ProfileComparator};
pub use crate::adapters::single::SingleSmoother;
pub use crate::algorithms::bidirectional::{
    DirectionalPasses, FilterDirection, backward_filter, bidirectional_filter, pointwise_min,
};
pub use crate::algorithms::convolution::{
    ConvolutionMethod, ConvolutionOptions, Sample, filter_signal, window_filter,
    window_filter_with,
};
pub use crate::algorithms::moving_average::{
    DEFAULT_MOVING_WINDOW, moving_average, moving_average_zero_padded,
};
pub use crate::engine::executor::{ComparisonConfig, SmoothingConfig};
pub use crate::engine::output::{ComparisonResult, SmoothedProfile};
pub use crate::evaluation::comparison::ComparisonStats;
pub use crate::evaluation::summary::{ProfileSummary, pooled_mean};
pub use crate::math::boundary::PadMode;
pub use crate::math::kernel::{KernelType, WindowKernel};
pub use crate::primitives::errors::{ErrorKind, SmoothError};
pub use crate::primitives::profile::{ComplexityProfile, ProfileRecord};
pub use crate::primitives::window::{WindowSize, adaptive_window_size};

/// Marker types for selecting execution adapters.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::{Batch, Single};
}

/// Fluent builder for configuring the kernel filter and execution mode.
#[derive(Debug, Clone, Default)]
pub struct SmootherBuilder {
    /// Kernel shape (default: Blackman).
    pub kernel_type: Option<KernelType>,

    /// Fixed or adaptive window (default: Adaptive).
    pub window_size: Option<WindowSize>,

    /// Boundary padding (default: Edge).
    pub pad_mode: Option<PadMode>,

    /// Which pass(es) produce the result (default: Bidirectional).
    pub direction: Option<FilterDirection>,

    /// Convolution algorithm (default: Auto).
    pub method: Option<ConvolutionMethod>,

    /// Keep the trimmed input in the output.
    pub return_raw: Option<bool>,

    /// Keep the forward/backward passes in the output.
    pub return_directional: Option<bool>,

    /// Error from parsing a kernel name, reported by `build()`.
    pub(crate) deferred_error: Option<SmoothError>,

    // ======================================
    // DEV
    // ======================================
    /// Parallel execution hint.
    #[doc(hidden)]
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl SmootherBuilder {
    /// Select an execution adapter to transition to an execution builder.
    pub fn adapter<A>(self, _adapter: A) -> A::Output
    where
        A: SmootherAdapter,
    {
        A::convert(self)
    }

    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the kernel shape.
    pub fn kernel_type(mut self, kind: KernelType) -> Self {
        if self.kernel_type.is_some() {
            self.duplicate_param = Some("kernel_type");
        }
        self.kernel_type = Some(kind);
        self
    }

    /// Set the kernel shape by name (`"blackman"` or `"boxcar"`, any case).
    ///
    /// An unknown name is reported when the adapter is built.
    pub fn kernel(self, name: &str) -> Self {
        match name.parse::<KernelType>() {
            Ok(kind) => self.kernel_type(kind),
            Err(err) => {
                let mut builder = self;
                builder.deferred_error = Some(err);
                builder
            }
        }
    }

    /// Use a fixed window of `size` samples (odd, `>= 3`).
    pub fn window_size(mut self, size: usize) -> Self {
        if self.window_size.is_some() {
            self.duplicate_param = Some("window_size");
        }
        self.window_size = Some(WindowSize::Fixed(size));
        self
    }

    /// Derive the window from each profile's trimmed length.
    pub fn adaptive_window(mut self) -> Self {
        if self.window_size.is_some() {
            self.duplicate_param = Some("window_size");
        }
        self.window_size = Some(WindowSize::Adaptive);
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

    /// Set the filter direction.
    pub fn direction(mut self, direction: FilterDirection) -> Self {
        if self.direction.is_some() {
            self.duplicate_param = Some("direction");
        }
        self.direction = Some(direction);
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

    /// Include the trimmed input in the output.
    pub fn return_raw(mut self) -> Self {
        self.return_raw = Some(true);
        self
    }

    /// Include the forward and backward passes in the output.
    pub fn return_directional(mut self) -> Self {
        self.return_directional = Some(true);
        self
    }

    // ==========================
    // Development Options
    // ==========================

    /// Set parallel execution hint (only for dev)
    #[doc(hidden)]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }
}

/// Trait for transitioning from a generic builder to an execution builder.
pub trait SmootherAdapter {
    /// The output execution builder.
    type Output;

    /// Convert a generic [`SmootherBuilder`] into a specialized execution builder.
    fn convert(builder: SmootherBuilder) -> Self::Output;
}

/// Marker for one-profile-at-a-time smoothing.
#[derive(Debug, Clone, Copy)]
pub struct Single;

impl SmootherAdapter for Single {
    type Output = SingleSmootherBuilder;

    fn convert(builder: SmootherBuilder) -> Self::Output {
        let mut result = SingleSmootherBuilder::default();

        if let Some(kind) = builder.kernel_type {
            result.kernel_type = kind;
        }
        if let Some(size) = builder.window_size {
            result.window_size = size;
        }
        if let Some(mode) = builder.pad_mode {
            result.pad_mode = mode;
        }
        if let Some(direction) = builder.direction {
            result.direction = direction;
        }
        if let Some(method) = builder.method {
            result.method = method;
        }
        if let Some(raw) = builder.return_raw {
            result.return_raw = raw;
        }
        if let Some(directional) = builder.return_directional {
            result.return_directional = directional;
        }

        // ======================================
        // DEV
        // ======================================
        if let Some(p) = builder.parallel {
            result.parallel = Some(p);
        }

        result.deferred_error = builder.deferred_error;
        result.duplicate_param = builder.duplicate_param;
        result
    }
}

/// Marker for smoothing collections of profiles.
#[derive(Debug, Clone, Copy)]
pub struct Batch;

impl SmootherAdapter for Batch {
    type Output = BatchSmootherBuilder;

    fn convert(builder: SmootherBuilder) -> Self::Output {
        BatchSmootherBuilder {
            profile: Single::convert(builder),
        }
    }
}
