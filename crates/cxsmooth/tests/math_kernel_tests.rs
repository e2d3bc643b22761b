#![cfg(feature = "dev")]
//! Tests for convolution kernels.
//!
//! These tests verify the window kernels used by the profile filter:
//! - Normalisation (weights sum to one)
//! - Exact symmetry
//! - Name parsing
//! - Window validation
//!
//! ## Test Organization
//!
//! 1. **Kernel Properties** - Names, defaults, parsing
//! 2. **Weight Computation** - Normalisation, symmetry, shape
//! 3. **Validation** - Even, small and unknown inputs

use approx::assert_relative_eq;

use cxsmooth::internals::math::kernel::{KernelType, WindowKernel};
use cxsmooth::internals::primitives::errors::{ErrorKind, SmoothError};

// ============================================================================
// Kernel Properties Tests
// ============================================================================

/// Test kernel names and default.
#[test]
fn test_kernel_names_and_default() {
    assert_eq!(KernelType::Blackman.name(), "blackman");
    assert_eq!(KernelType::Boxcar.name(), "boxcar");
    assert_eq!(KernelType::default(), KernelType::Blackman);
    assert_eq!(KernelType::Boxcar.to_string(), "boxcar");
}

/// Test that kernel names parse case-insensitively.
#[test]
fn test_kernel_name_parsing() {
    assert_eq!("blackman".parse::<KernelType>(), Ok(KernelType::Blackman));
    assert_eq!("BLACKMAN".parse::<KernelType>(), Ok(KernelType::Blackman));
    assert_eq!(" Boxcar ".parse::<KernelType>(), Ok(KernelType::Boxcar));

    let err = "hann".parse::<KernelType>().unwrap_err();
    assert_eq!(err, SmoothError::UnknownKernel("hann".to_string()));
    assert_eq!(err.kind(), ErrorKind::InvalidParameter);
}

/// Only the two canonical names are accepted; aliases are rejected.
#[test]
fn test_kernel_aliases_rejected() {
    for name in ["flat", "rect", "box", "blackman-harris", ""] {
        let err = name.parse::<KernelType>().unwrap_err();
        assert_eq!(err, SmoothError::UnknownKernel(name.to_string()));
        assert_eq!(err.kind(), ErrorKind::InvalidParameter);
    }
}

/// Test building a kernel from its name.
#[test]
fn test_kernel_from_name() {
    let kernel = WindowKernel::<f64>::from_name("Boxcar", 5).unwrap();
    assert_eq!(kernel.kind(), KernelType::Boxcar);
    assert_eq!(kernel.len(), 5);
    assert_eq!(kernel.half_width(), 2);
    assert!(!kernel.is_empty());

    assert!(WindowKernel::<f64>::from_name("gaussian", 5).is_err());
}

// ============================================================================
// Weight Computation Tests
// ============================================================================

/// Test that every kernel sums to one within 1e-9.
#[test]
fn test_kernel_normalisation() {
    for kind in [KernelType::Blackman, KernelType::Boxcar] {
        for size in (3..=501).step_by(2) {
            let kernel = WindowKernel::<f64>::new(kind, size).unwrap();
            assert_eq!(kernel.len(), size);
            assert!(
                (kernel.sum() - 1.0).abs() < 1e-9,
                "{kind} kernel of size {size} sums to {}",
                kernel.sum()
            );
        }
    }
}

/// Test exact symmetry of the weights.
#[test]
fn test_kernel_symmetry() {
    for kind in [KernelType::Blackman, KernelType::Boxcar] {
        for size in [3, 5, 11, 101, 2001] {
            let kernel = WindowKernel::<f64>::new(kind, size).unwrap();
            let w = kernel.weights();
            for i in 0..size {
                assert_eq!(w[i], w[size - 1 - i], "{kind} size {size} index {i}");
            }
        }
    }
}

/// Test that the boxcar kernel is flat.
#[test]
fn test_boxcar_weights() {
    let kernel = WindowKernel::<f64>::new(KernelType::Boxcar, 4001).unwrap();
    for &w in kernel.weights() {
        assert_relative_eq!(w, 1.0 / 4001.0);
    }
}

/// Test the Blackman shape: vanishing ends, single central peak.
#[test]
fn test_blackman_shape() {
    let kernel = WindowKernel::<f64>::new(KernelType::Blackman, 11).unwrap();
    let w = kernel.weights();

    assert!(w[0].abs() < 1e-12);
    assert!(w[10].abs() < 1e-12);
    for i in 1..=5 {
        assert!(w[i] > w[i - 1], "weights should rise towards the centre");
    }

    // Unnormalised centre value is 0.42 + 0.5 + 0.08 = 1
    let raw_sum: f64 = (0..11)
        .map(|n| {
            let x = n as f64 / 10.0;
            0.42 - 0.5 * (2.0 * std::f64::consts::PI * x).cos()
                + 0.08 * (4.0 * std::f64::consts::PI * x).cos()
        })
        .sum();
    assert_relative_eq!(w[5], 1.0 / raw_sum, epsilon = 1e-12);
}

/// Test that `f32` kernels are normalised too.
#[test]
fn test_kernel_f32() {
    let kernel = WindowKernel::<f32>::new(KernelType::Blackman, 101).unwrap();
    assert!((kernel.sum() - 1.0).abs() < 1e-5);
}

// ============================================================================
// Validation Tests
// ============================================================================

/// Test that even windows are rejected, never rounded.
#[test]
fn test_even_window_rejected() {
    let err = WindowKernel::<f64>::new(KernelType::Blackman, 4).unwrap_err();
    assert_eq!(err, SmoothError::EvenWindowSize(4));
    assert_eq!(err.kind(), ErrorKind::InvalidParameter);
}

/// Test that windows below 3 are rejected.
#[test]
fn test_small_window_rejected() {
    for size in [0, 1, 2] {
        let err = WindowKernel::<f64>::new(KernelType::Boxcar, size).unwrap_err();
        assert_eq!(err, SmoothError::WindowTooSmall { got: size, min: 3 });
    }
}
