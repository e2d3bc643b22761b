#![cfg(feature = "dev")]
//! Tests for complexity profiles and their validation.
//!
//! ## Test Organization
//!
//! 1. **Construction** - Valid profiles and record conversion
//! 2. **Validation** - Each rejected input
//! 3. **Trimming** - Positions below `k`
//! 4. **Errors** - Kinds and messages

use cxsmooth::internals::engine::validator::Validator;
use cxsmooth::internals::primitives::errors::{ErrorKind, SmoothError};
use cxsmooth::internals::primitives::profile::{ComplexityProfile, ProfileRecord};

// ============================================================================
// Construction Tests
// ============================================================================

/// A well-formed profile is accepted and exposes its parts.
#[test]
fn test_profile_construction() {
    let profile =
        ComplexityProfile::new("NC_045512.2", 4, vec![1, 2, 3, 4, 5], vec![1.9, 1.8, 1.95, 1.7, 1.6])
            .unwrap();

    assert_eq!(profile.sequence_id(), "NC_045512.2");
    assert_eq!(profile.k(), 4);
    assert_eq!(profile.len(), 5);
    assert!(!profile.is_empty());
    assert_eq!(profile.positions(), &[1, 2, 3, 4, 5]);
    assert_eq!(profile.complexity(), &[1.9, 1.8, 1.95, 1.7, 1.6]);
}

/// Positions need not be contiguous.
#[test]
fn test_profile_sparse_positions() {
    let profile = ComplexityProfile::new("seq", 1, vec![10, 20, 35], vec![1.0, 1.1, 1.2]).unwrap();
    assert_eq!(profile.positions(), &[10, 20, 35]);
}

/// Records convert with full validation.
#[test]
fn test_record_conversion() {
    let record = ProfileRecord {
        sequence_id: "chrM".to_string(),
        k: 2,
        positions: vec![1, 2, 3],
        complexity: vec![1.5_f64, 1.6, 1.7],
    };
    let profile = ComplexityProfile::try_from(record.clone()).unwrap();
    assert_eq!(profile.sequence_id(), record.sequence_id);

    let bad = ProfileRecord {
        positions: vec![3, 2, 1],
        ..record
    };
    assert!(matches!(
        ComplexityProfile::try_from(bad),
        Err(SmoothError::UnorderedPositions { index: 1, .. })
    ));
}

// ============================================================================
// Validation Tests
// ============================================================================

/// Empty or blank identifiers are rejected.
#[test]
fn test_empty_sequence_id() {
    for id in ["", "   "] {
        let err = ComplexityProfile::new(id, 1, vec![1], vec![1.0]).unwrap_err();
        assert_eq!(err, SmoothError::EmptySequenceId);
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }
}

/// `k` must be at least one.
#[test]
fn test_zero_context_length() {
    let err = ComplexityProfile::new("seq", 0, vec![1], vec![1.0]).unwrap_err();
    assert_eq!(err, SmoothError::InvalidContextLength(0));
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

/// Empty profiles are rejected.
#[test]
fn test_empty_profile() {
    let err = ComplexityProfile::<f64>::new("seq", 1, vec![], vec![]).unwrap_err();
    assert_eq!(err, SmoothError::EmptyInput);
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

/// Positions and values must line up.
#[test]
fn test_mismatched_lengths() {
    let err = ComplexityProfile::new("seq", 1, vec![1, 2, 3], vec![1.0, 1.0]).unwrap_err();
    assert_eq!(
        err,
        SmoothError::MismatchedInputs {
            positions_len: 3,
            values_len: 2
        }
    );
}

/// Duplicate and decreasing positions are rejected.
#[test]
fn test_unordered_positions() {
    let err = ComplexityProfile::new("seq", 1, vec![1, 2, 2, 3], vec![1.0; 4]).unwrap_err();
    assert_eq!(
        err,
        SmoothError::UnorderedPositions {
            index: 2,
            previous: 2,
            current: 2
        }
    );

    let err = ComplexityProfile::new("seq", 1, vec![5, 4], vec![1.0; 2]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

/// NaN and infinite values are rejected.
#[test]
fn test_non_finite_values() {
    for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let err = ComplexityProfile::new("seq", 1, vec![1, 2, 3], vec![1.0, bad, 1.0]).unwrap_err();
        assert!(matches!(err, SmoothError::InvalidNumericValue(_)));
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }
}

/// The validator reports the first failing check.
#[test]
fn test_validator_check_order() {
    // Blank id wins over every other problem
    let err = Validator::validate_profile::<f64>("", 0, &[], &[]).unwrap_err();
    assert_eq!(err, SmoothError::EmptySequenceId);

    // Then k
    let err = Validator::validate_profile::<f64>("seq", 0, &[], &[]).unwrap_err();
    assert_eq!(err, SmoothError::InvalidContextLength(0));
}

// ============================================================================
// Trimming Tests
// ============================================================================

/// Trimming drops positions strictly below `k`.
#[test]
fn test_trimmed_profile() {
    let profile = ComplexityProfile::new(
        "seq",
        10,
        (1..=20).collect(),
        (1..=20).map(|v| v as f64).collect(),
    )
    .unwrap();
    let view = profile.trimmed().unwrap();

    assert_eq!(view.len(), 11);
    assert!(!view.is_empty());
    assert_eq!(view.positions[0], 10);
    assert_eq!(view.values[0], 10.0);
    assert_eq!(*view.positions.last().unwrap(), 20);
}

/// Positions all at or above `k` are kept untouched.
#[test]
fn test_trimmed_keeps_everything() {
    let profile = ComplexityProfile::new("seq", 3, vec![3, 4, 5], vec![1.0, 2.0, 3.0]).unwrap();
    let view = profile.trimmed().unwrap();
    assert_eq!(view.values, profile.complexity());
}

/// A profile that trims to nothing is invalid input.
#[test]
fn test_trimmed_to_nothing() {
    let profile = ComplexityProfile::new("tiny", 5, vec![1, 2, 3, 4], vec![1.0; 4]).unwrap();
    let err = profile.trimmed().unwrap_err();

    assert_eq!(
        err,
        SmoothError::EmptyAfterTrim {
            sequence_id: "tiny".to_string(),
            k: 5
        }
    );
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

// ============================================================================
// Error Tests
// ============================================================================

/// Error kinds cover every variant.
#[test]
fn test_error_kinds() {
    assert_eq!(SmoothError::EvenWindowSize(4).kind(), ErrorKind::InvalidParameter);
    assert_eq!(
        SmoothError::DuplicateParameter { parameter: "method" }.kind(),
        ErrorKind::InvalidParameter
    );
    assert_eq!(
        SmoothError::DegenerateKernel(String::new()).kind(),
        ErrorKind::NumericDegenerate
    );
    assert_eq!(
        SmoothError::NonFiniteOutput(String::new()).kind(),
        ErrorKind::NumericDegenerate
    );
    assert_eq!(ErrorKind::InvalidInput.name(), "InvalidInput");
}

/// Error messages carry their context.
#[test]
fn test_error_display() {
    let msg = SmoothError::WindowExceedsSignal {
        window_size: 2001,
        signal_len: 500,
    }
    .to_string();
    assert!(msg.contains("2001"));
    assert!(msg.contains("500"));

    let msg = SmoothError::UnknownKernel("hann".to_string()).to_string();
    assert!(msg.contains("hann"));

    let err: Box<dyn std::error::Error> = Box::new(SmoothError::EmptyInput);
    assert!(!err.to_string().is_empty());
}
