#![cfg(feature = "dev")]
//! Tests for the Single adapter.
//!
//! The Single adapter smooths one complexity profile at a time:
//! - Trimming of positions below `k`
//! - Adaptive or fixed windows
//! - Forward, backward or bidirectional filtering
//! - Optional raw and directional outputs
//!
//! ## Test Organization
//!
//! 1. **Basic Functionality** - Core smoothing behavior
//! 2. **Configuration** - Directions, kernels, outputs
//! 3. **Builder Validation** - Rejected configurations
//! 4. **Edge Cases** - Empty and short profiles

use approx::assert_relative_eq;
use cxsmooth::prelude::*;

use cxsmooth::internals::api::{KernelType, WindowSize};
use cxsmooth::internals::primitives::window::adaptive_window_size;

fn step_profile(n: u64, k: u64) -> ComplexityProfile<f64> {
    let positions: Vec<u64> = (1..=n).collect();
    let values = positions
        .iter()
        .map(|&p| if p > n / 3 && p <= n / 2 { 0.5 } else { 1.9 })
        .collect();
    ComplexityProfile::new("step", k, positions, values).unwrap()
}

// ============================================================================
// Basic Functionality Tests
// ============================================================================

/// Default smoothing keeps trimmed positions and uses an adaptive window.
#[test]
fn test_single_default_smoothing() {
    let profile = step_profile(2_009, 10);
    let result = Smoother::new()
        .adapter(Single)
        .build()
        .unwrap()
        .smooth(&profile)
        .expect("smoothing should succeed");

    // Positions 1..=9 are dropped
    assert_eq!(result.len(), 2_000);
    assert_eq!(result.positions[0], 10);
    assert_eq!(*result.positions.last().unwrap(), 2_009);
    assert_eq!(result.window_size, 101);
    assert_eq!(result.kernel_type, Blackman);
    assert_eq!(result.direction, Bidirectional);
    assert_eq!(result.sequence_id, "step");
    assert!(result.values.iter().all(|v| v.is_finite()));
    assert!(result.raw.is_none());
    assert!(!result.has_directional_passes());
}

/// Default configuration values.
#[test]
fn test_single_default_config() {
    let smoother = Smoother::new().adapter(Single).build().unwrap();
    let cfg = smoother.config();

    assert_eq!(cfg.kernel_type, KernelType::Blackman);
    assert_eq!(cfg.window_size, WindowSize::Adaptive);
    assert_eq!(cfg.pad_mode, Edge);
    assert_eq!(cfg.direction, Bidirectional);
    assert_eq!(cfg.method, Auto);
    assert!(!cfg.parallel);
}

/// Boxcar of width 3 over a step down and back up.
#[test]
fn test_single_boxcar_step() {
    let profile = ComplexityProfile::new(
        "scenario",
        1,
        (1..=9).collect(),
        vec![2.0, 2.0, 2.0, 0.0, 0.0, 0.0, 2.0, 2.0, 2.0],
    )
    .unwrap();

    let smoother = Smoother::new()
        .kernel_type(Boxcar)
        .window_size(3)
        .direction(Forward)
        .adapter(Single)
        .build()
        .unwrap();
    let result = smoother.smooth(&profile).unwrap();

    let expected = [
        2.0,
        2.0,
        4.0 / 3.0,
        2.0 / 3.0,
        0.0,
        2.0 / 3.0,
        4.0 / 3.0,
        2.0,
        2.0,
    ];
    for (got, want) in result.values.iter().zip(expected.iter()) {
        assert_relative_eq!(*got, *want, epsilon = 1e-12);
    }
}

/// `points()` pairs positions with values.
#[test]
fn test_single_points() {
    let profile = step_profile(60, 1);
    let result = Smoother::new()
        .adapter(Single)
        .build()
        .unwrap()
        .smooth(&profile)
        .unwrap();

    let points: Vec<(u64, f64)> = result.points().collect();
    assert_eq!(points.len(), 60);
    assert_eq!(points[0], (1, result.values[0]));
    assert_eq!(points[59], (60, result.values[59]));
}

/// Summary statistics of the smoothed values.
#[test]
fn test_single_summary() {
    let profile = ComplexityProfile::new("flat", 2, (1..=50).collect(), vec![1.8; 50]).unwrap();
    let result = Smoother::new()
        .adapter(Single)
        .build()
        .unwrap()
        .smooth(&profile)
        .unwrap();
    let summary = result.summary().unwrap();

    assert_eq!(summary.len, 49);
    assert_eq!(summary.min, 1.8);
    assert_eq!(summary.max, 1.8);
    assert_relative_eq!(summary.mean, 1.8, epsilon = 1e-12);
}

/// `f32` profiles are supported.
#[test]
fn test_single_f32() {
    let profile =
        ComplexityProfile::new("f32", 1, (1..=200).collect(), vec![1.25_f32; 200]).unwrap();
    let result = Smoother::new()
        .adapter(Single)
        .build()
        .unwrap()
        .smooth(&profile)
        .unwrap();
    assert!(result.values.iter().all(|&v| v == 1.25_f32));
}

// ============================================================================
// Configuration Tests
// ============================================================================

/// Raw and directional outputs are attached on request.
#[test]
fn test_single_optional_outputs() {
    let profile = step_profile(500, 3);
    let result = Smoother::new()
        .return_raw()
        .return_directional()
        .adapter(Single)
        .build()
        .unwrap()
        .smooth(&profile)
        .unwrap();

    let raw = result.raw.as_ref().unwrap();
    let forward = result.forward.as_ref().unwrap();
    let backward = result.backward.as_ref().unwrap();

    assert_eq!(raw.as_slice(), &profile.complexity()[2..]);
    assert_eq!(forward.len(), result.len());
    assert_eq!(backward.len(), result.len());
    for i in 0..result.len() {
        assert_eq!(result.values[i], forward[i].min(backward[i]));
    }
}

/// Single-direction runs return the chosen pass.
#[test]
fn test_single_directions() {
    let profile = step_profile(300, 1);
    let run = |direction| {
        Smoother::new()
            .direction(direction)
            .return_directional()
            .adapter(Single)
            .build()
            .unwrap()
            .smooth(&profile)
            .unwrap()
    };

    let forward = run(Forward);
    let backward = run(Backward);
    let both = run(Bidirectional);

    assert_eq!(forward.forward.as_deref(), Some(forward.values.as_slice()));
    assert!(forward.backward.is_none());
    assert_eq!(backward.backward.as_deref(), Some(backward.values.as_slice()));
    assert!(backward.forward.is_none());
    assert_eq!(both.forward.as_deref(), Some(forward.values.as_slice()));
    assert_eq!(both.backward.as_deref(), Some(backward.values.as_slice()));
}

/// Kernels can be selected by name.
#[test]
fn test_single_kernel_by_name() {
    let smoother = Smoother::new().kernel("Boxcar").adapter(Single).build().unwrap();
    assert_eq!(smoother.config().kernel_type, KernelType::Boxcar);
}

/// The FFT path gives the same answer as the direct path.
#[test]
fn test_single_fft_matches_direct() {
    let profile = step_profile(6_000, 1);
    let run = |method| {
        Smoother::new()
            .method(method)
            .adapter(Single)
            .build()
            .unwrap()
            .smooth(&profile)
            .unwrap()
    };

    let direct = run(Direct);
    let fft = run(Fft);
    assert_eq!(direct.window_size, adaptive_window_size(6_000));
    for (d, f) in direct.values.iter().zip(fft.values.iter()) {
        assert!((d - f).abs() < 1e-9);
    }
}

/// Parallel execution matches sequential execution.
#[test]
fn test_single_parallel_matches_sequential() {
    let profile = step_profile(5_000, 4);
    let run = |parallel| {
        Smoother::new()
            .method(Direct)
            .parallel(parallel)
            .adapter(Single)
            .build()
            .unwrap()
            .smooth(&profile)
            .unwrap()
    };
    assert_eq!(run(false), run(true));
}

/// Bare signals can be smoothed without a profile.
#[test]
fn test_single_smooth_values() {
    let smoother = Smoother::new()
        .kernel_type(Boxcar)
        .window_size(3)
        .adapter(Single)
        .build()
        .unwrap();
    let out = smoother.smooth_values(&[3.0, 3.0, 0.0, 3.0, 3.0]).unwrap();

    assert_eq!(out.len(), 5);
    assert_relative_eq!(out[2], 2.0, epsilon = 1e-12);
}

// ============================================================================
// Builder Validation Tests
// ============================================================================

/// Fixed even windows are rejected at build time.
#[test]
fn test_single_even_window_rejected() {
    let err = Smoother::new().window_size(4).adapter(Single).build().unwrap_err();
    assert_eq!(err, SmoothError::EvenWindowSize(4));
    assert_eq!(err.kind(), ErrorKind::InvalidParameter);
}

/// Unknown kernel names surface at build time.
#[test]
fn test_single_unknown_kernel() {
    let err = Smoother::new().kernel("hann").adapter(Single).build().unwrap_err();
    assert_eq!(err, SmoothError::UnknownKernel("hann".to_string()));

    let err = Smoother::new().kernel("flat").adapter(Batch).build().unwrap_err();
    assert_eq!(err, SmoothError::UnknownKernel("flat".to_string()));
}

/// Setting a parameter twice is an error.
#[test]
fn test_single_duplicate_parameter() {
    let err = Smoother::new()
        .window_size(5)
        .window_size(7)
        .adapter(Single)
        .build()
        .unwrap_err();
    assert_eq!(err, SmoothError::DuplicateParameter { parameter: "window_size" });

    let err = Smoother::new()
        .kernel_type(Boxcar)
        .kernel("blackman")
        .adapter(Single)
        .build()
        .unwrap_err();
    assert_eq!(err, SmoothError::DuplicateParameter { parameter: "kernel_type" });
}

// ============================================================================
// Edge Case Tests
// ============================================================================

/// Empty signals are invalid input.
#[test]
fn test_single_empty_signal() {
    let smoother = Smoother::new().adapter(Single).build().unwrap();
    let err = smoother.smooth_values::<f64>(&[]).unwrap_err();
    assert_eq!(err, SmoothError::EmptyInput);
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

/// Profiles shorter than the smallest kernel cannot be smoothed.
#[test]
fn test_single_short_profile() {
    let profile = ComplexityProfile::new("short", 3, vec![1, 2, 3, 4], vec![1.0; 4]).unwrap();
    let err = Smoother::new()
        .adapter(Single)
        .build()
        .unwrap()
        .smooth(&profile)
        .unwrap_err();
    assert_eq!(
        err,
        SmoothError::WindowExceedsSignal {
            window_size: 3,
            signal_len: 2
        }
    );
}

/// Profiles trimmed to nothing are invalid input.
#[test]
fn test_single_fully_trimmed() {
    let profile = ComplexityProfile::new("gone", 10, vec![1, 2, 3], vec![1.0; 3]).unwrap();
    let err = Smoother::new()
        .adapter(Single)
        .build()
        .unwrap()
        .smooth(&profile)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

/// Display shows a truncated table for long profiles.
#[test]
fn test_single_display() {
    let profile = step_profile(100, 1);
    let text = Smoother::new()
        .return_raw()
        .adapter(Single)
        .build()
        .unwrap()
        .smooth(&profile)
        .unwrap()
        .to_string();

    assert!(text.contains("Sequence:    step"));
    assert!(text.contains("Smoothed Data:"));
    assert!(text.contains("Raw"));
    assert!(text.contains("..."));
}
