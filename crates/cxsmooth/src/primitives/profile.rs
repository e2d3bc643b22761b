//! Complexity profiles supplied by the external estimator.
//!
//! ## Purpose
//!
//! This module defines the validated, immutable [`ComplexityProfile`] and the
//! loosely-typed [`ProfileRecord`] a loader produces before validation.
//!
//! ## Design notes
//!
//! * **Validated once**: All invariants are checked at construction; no setters exist.
//! * **Trimming**: Positions below the estimator context length `k` are undefined and
//!   are dropped by [`ComplexityProfile::trimmed`] before any smoothing.
//!
//! ## Invariants
//!
//! * `positions.len() == complexity.len() > 0`.
//! * `positions` is strictly increasing.
//! * Every complexity value is finite.
//! * `k >= 1` and `sequence_id` is non-empty.
//!
//! ## Non-goals
//!
//! * This module does not read files or parse CSV.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::errors::SmoothError;

// ============================================================================
// Raw Record
// ============================================================================

/// Unvalidated profile data as handed over by an external loader.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProfileRecord<T> {
    /// Sequence identifier (FASTA header or accession).
    pub sequence_id: String,

    /// Context length of the upstream estimator.
    pub k: u64,

    /// 1-based or 0-based base positions, as emitted by the estimator.
    pub positions: Vec<u64>,

    /// Complexity estimates in bits per base.
    pub complexity: Vec<T>,
}

// ============================================================================
// Validated Profile
// ============================================================================

/// A validated per-position complexity profile.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ComplexityProfile<T> {
    sequence_id: String,
    k: u64,
    positions: Vec<u64>,
    complexity: Vec<T>,
}

/// Index-aligned view of the positions `>= k` of a profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrimmedProfile<'a, T> {
    /// Retained positions.
    pub positions: &'a [u64],

    /// Retained complexity values.
    pub values: &'a [T],
}

impl<T> TrimmedProfile<'_, T> {
    /// Number of retained points.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether nothing was retained (never true for a view returned by `trimmed`).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<T: Float> ComplexityProfile<T> {
    /// Build a profile, checking every invariant eagerly.
    pub fn new(
        sequence_id: impl Into<String>,
        k: u64,
        positions: Vec<u64>,
        complexity: Vec<T>,
    ) -> Result<Self, SmoothError> {
        let sequence_id = sequence_id.into();
        Validator::validate_profile(&sequence_id, k, &positions, &complexity)?;

        Ok(Self {
            sequence_id,
            k,
            positions,
            complexity,
        })
    }

    /// Sequence identifier.
    #[inline]
    pub fn sequence_id(&self) -> &str {
        &self.sequence_id
    }

    /// Estimator context length.
    #[inline]
    pub fn k(&self) -> u64 {
        self.k
    }

    /// All positions, including those below `k`.
    #[inline]
    pub fn positions(&self) -> &[u64] {
        &self.positions
    }

    /// All complexity values, including those below `k`.
    #[inline]
    pub fn complexity(&self) -> &[T] {
        &self.complexity
    }

    /// Number of points before trimming.
    #[inline]
    pub fn len(&self) -> usize {
        self.complexity.len()
    }

    /// Always `false`; kept for API symmetry with slices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.complexity.is_empty()
    }

    /// Drop positions below `k`.
    ///
    /// Positions are sorted, so the retained points form a suffix.
    pub fn trimmed(&self) -> Result<TrimmedProfile<'_, T>, SmoothError> {
        let start = self.positions.partition_point(|&p| p < self.k);
        if start == self.positions.len() {
            return Err(SmoothError::EmptyAfterTrim {
                sequence_id: self.sequence_id.clone(),
                k: self.k,
            });
        }

        Ok(TrimmedProfile {
            positions: &self.positions[start..],
            values: &self.complexity[start..],
        })
    }
}

impl<T: Float> TryFrom<ProfileRecord<T>> for ComplexityProfile<T> {
    type Error = SmoothError;

    fn try_from(record: ProfileRecord<T>) -> Result<Self, Self::Error> {
        Self::new(
            record.sequence_id,
            record.k,
            record.positions,
            record.complexity,
        )
    }
}
