//! # cxsmooth — Smoothing of genomic complexity profiles
//!
//! Denoising and trend comparison for per-position sequence-complexity
//! signals (bits per base), as produced by an external complexity estimator
//! with context length `k`.
//!
//! Two pathways are provided:
//!
//! - **Inspection**: a bidirectional, edge-padded window filter (Blackman by
//!   default) whose window adapts to the sequence length. The forward and
//!   backward passes are combined by their pointwise minimum, so a dip that
//!   either scan direction sees survives in the output.
//! - **Comparison**: a wide boxcar moving average (2000 samples by default)
//!   applied to two profiles, reported with both means and the pooled mean.
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use cxsmooth::prelude::*;
//!
//! let positions: Vec<u64> = (1..=60).collect();
//! let complexity: Vec<f64> = positions
//!     .iter()
//!     .map(|&p| if (25..35).contains(&p) { 0.4 } else { 1.9 })
//!     .collect();
//!
//! // Positions below k = 5 are dropped before smoothing
//! let profile = ComplexityProfile::new("chr1", 5, positions, complexity)?;
//!
//! let smoother = Smoother::new()
//!     .kernel_type(Blackman)     // Low side-lobe kernel
//!     .direction(Bidirectional)  // min(forward, backward)
//!     .adapter(Single)
//!     .build()?;
//!
//! let result = smoother.smooth(&profile)?;
//!
//! assert_eq!(result.len(), 56);
//! assert_eq!(result.window_size, 3); // 5% of 56, odd, at least 3
//! println!("{}", result);
//! # Result::<(), SmoothError>::Ok(())
//! ```
//!
//! ### Comparing Two Profiles
//!
//! ```rust
//! use cxsmooth::prelude::*;
//!
//! let first = ComplexityProfile::<f64>::new("NC_000001", 2, (1..=100).collect(), vec![1.9; 100])?;
//! let second = ComplexityProfile::new("chr1", 2, (1..=100).collect(), vec![1.5; 100])?;
//!
//! let comparator = Comparator::new()
//!     .window_size(20)
//!     .pad_mode(Edge)
//!     .build()?;
//!
//! let result = comparator.compare(&first, &second)?;
//!
//! assert!((result.mean_first - 1.9).abs() < 1e-12);
//! assert!((result.mean_second - 1.5).abs() < 1e-12);
//! assert!((result.pooled_mean - 1.7).abs() < 1e-12);
//! # Result::<(), SmoothError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Every entry point returns `Result<_, SmoothError>`. Errors fall into three
//! classes, available through [`SmoothError::kind`](prelude::SmoothError::kind):
//!
//! - **InvalidInput**: empty profile, mismatched lengths, non-finite values,
//!   unordered positions, nothing left after trimming.
//! - **InvalidParameter**: even or too-small kernel windows, windows longer
//!   than the signal, unknown kernel names, duplicated builder parameters.
//! - **NumericDegenerate**: degenerate kernels or non-finite output.
//!
//! ```rust
//! use cxsmooth::prelude::*;
//!
//! let err = Smoother::new().window_size(4).adapter(Single).build().unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::InvalidParameter);
//! ```
//!
//! ## Features
//!
//! - `parallel` (default): `rayon` for batch fan-out, concurrent directional
//!   passes and direct convolution, enabled per builder with `.parallel(true)`.
//! - `serde`: `Serialize`/`Deserialize` on records, configuration and outputs.
//!
//! ## Logging
//!
//! The crate logs through the `log` facade (`debug` for resolved windows and
//! methods, `warn` for profiles skipped by the batch adapter). Install any
//! `log`-compatible logger to see the messages.

// Layer 1: Primitives - profiles, errors and window sizing.
mod primitives;

// Layer 2: Math - kernels and boundary padding.
mod math;

// Layer 3: Algorithms - convolution, bidirectional combination, moving average.
mod algorithms;

// Layer 4: Evaluation - summaries and comparison statistics.
mod evaluation;

// Layer 5: Engine - orchestration and validation.
mod engine;

// Layer 6: Adapters - execution mode adapters.
mod adapters;

// High-level fluent API.
mod api;

// Standard cxsmooth prelude.
pub mod prelude {
    pub use crate::api::{
        Adapter::{Batch, Single},
        BatchReport, BatchSmoother, ComparatorBuilder as Comparator, ComparisonResult,
        ComplexityProfile,
        ConvolutionMethod::Auto,
        ConvolutionMethod::Direct,
        ConvolutionMethod::Fft,
        ErrorKind,
        FilterDirection::Backward,
        FilterDirection::Bidirectional,
        FilterDirection::Forward,
        KernelType::Blackman,
        KernelType::Boxcar,
        PadMode::Edge,
        PadMode::Reflect,
        PadMode::Zero,
        ProfileComparator, ProfileFailure, ProfileRecord, ProfileSummary, SingleSmoother,
        SmoothError, SmoothedProfile, SmootherBuilder as Smoother,
    };
}

// Standalone transforms and configuration types.
pub use crate::api::{
    ComparisonConfig, ComparisonStats, ConvolutionMethod, ConvolutionOptions,
    DEFAULT_MOVING_WINDOW, DirectionalPasses, FilterDirection, KernelType, PadMode, Sample,
    SmoothingConfig, WindowKernel, WindowSize, adaptive_window_size, backward_filter,
    bidirectional_filter, filter_signal, moving_average, moving_average_zero_padded,
    pointwise_min, pooled_mean, window_filter, window_filter_with,
};

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
