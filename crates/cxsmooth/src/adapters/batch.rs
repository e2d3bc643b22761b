//! Batch adapter for smoothing many profiles.
//!
//! ## Purpose
//!
//! This module applies the single-profile smoother to a whole collection of
//! profiles, such as every sequence found by an external loader. Profiles are
//! independent, so they may be fanned out across threads.
//!
//! ## Design notes
//!
//! * **Isolation**: A profile that fails validation or smoothing is recorded as a
//!   [`ProfileFailure`] and logged; the remaining profiles are still processed.
//! * **Ordering**: Successful results keep the relative input order.
//! * **Parallelism**: With the `parallel` feature and hint, profiles are processed
//!   with `rayon`; results are identical to the sequential run.
//!
//! ## Invariants
//!
//! * `results.len() + failures.len()` equals the number of inputs.
//!
//! ## Non-goals
//!
//! * This adapter does not discover files or name outputs.

// Feature-gated imports
#[cfg(feature = "parallel")]
use rayon::prelude::*;

// External dependencies
use log::{debug, warn};

// Internal dependencies
use crate::adapters::single::SingleSmootherBuilder;
use crate::algorithms::convolution::Sample;
use crate::engine::executor::{SmoothingConfig, SmoothingExecutor};
use crate::engine::output::SmoothedProfile;
use crate::primitives::errors::{ErrorKind, SmoothError};
use crate::primitives::profile::{ComplexityProfile, ProfileRecord};

// ============================================================================
// Batch Report
// ============================================================================

/// A profile that could not be smoothed.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileFailure {
    /// Position of the profile in the input collection.
    pub index: usize,

    /// Identifier of the failed profile (may be empty for malformed records).
    pub sequence_id: String,

    /// Coarse error classification.
    pub kind: ErrorKind,

    /// The error itself.
    pub error: SmoothError,
}

impl ProfileFailure {
    fn new(index: usize, sequence_id: &str, error: SmoothError) -> Self {
        warn!("skipping profile #{index} ({sequence_id}): {error}");
        Self {
            index,
            sequence_id: sequence_id.to_string(),
            kind: error.kind(),
            error,
        }
    }
}

/// Outcome of a batch run.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchReport<T> {
    /// Smoothed profiles, in input order.
    pub results: Vec<SmoothedProfile<T>>,

    /// Profiles that failed, in input order.
    pub failures: Vec<ProfileFailure>,
}

impl<T> BatchReport<T> {
    /// `true` if every profile was smoothed.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Total number of profiles processed.
    pub fn total(&self) -> usize {
        self.results.len() + self.failures.len()
    }
}

// ============================================================================
// Batch Smoother Builder
// ============================================================================

/// Builder for the batch smoother.
#[derive(Debug, Clone, Default)]
pub struct BatchSmootherBuilder {
    /// Per-profile smoothing settings
    pub profile: SingleSmootherBuilder,
}

impl BatchSmootherBuilder {
    /// Set parallel execution hint.
    #[doc(hidden)]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.profile.parallel = Some(parallel);
        self
    }

    /// Build the batch smoother.
    pub fn build(self) -> Result<BatchSmoother, SmoothError> {
        self.profile.validate()?;
        Ok(BatchSmoother {
            executor: SmoothingExecutor::from_config(self.profile.to_config()),
        })
    }
}

// ============================================================================
// Batch Smoother
// ============================================================================

/// Kernel smoother for collections of profiles.
#[derive(Debug, Clone, Copy)]
pub struct BatchSmoother {
    executor: SmoothingExecutor,
}

impl BatchSmoother {
    /// Get the resolved configuration.
    pub fn config(&self) -> &SmoothingConfig {
        self.executor.config()
    }

    /// Smooth validated profiles.
    pub fn run<T: Sample>(&self, profiles: &[ComplexityProfile<T>]) -> BatchReport<T> {
        debug!("batch: smoothing {} profiles", profiles.len());
        let outcomes = self.map_indexed(profiles, |index, profile| {
            self.executor
                .run(profile)
                .map_err(|e| ProfileFailure::new(index, profile.sequence_id(), e))
        });
        collect_report(outcomes)
    }

    /// Validate and smooth raw loader records; malformed ones become failures.
    pub fn run_records<T: Sample>(&self, records: &[ProfileRecord<T>]) -> BatchReport<T> {
        debug!("batch: smoothing {} records", records.len());
        let outcomes = self.map_indexed(records, |index, record| {
            ComplexityProfile::new(
                record.sequence_id.as_str(),
                record.k,
                record.positions.clone(),
                record.complexity.clone(),
            )
            .and_then(|profile| self.executor.run(&profile))
            .map_err(|e| ProfileFailure::new(index, &record.sequence_id, e))
        });
        collect_report(outcomes)
    }

    #[cfg(feature = "parallel")]
    fn map_indexed<I, O, F>(&self, items: &[I], f: F) -> Vec<O>
    where
        I: Sync,
        O: Send,
        F: Fn(usize, &I) -> O + Sync + Send,
    {
        if self.executor.config().parallel {
            items.par_iter().enumerate().map(|(i, x)| f(i, x)).collect()
        } else {
            items.iter().enumerate().map(|(i, x)| f(i, x)).collect()
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn map_indexed<I, O, F>(&self, items: &[I], f: F) -> Vec<O>
    where
        F: Fn(usize, &I) -> O,
    {
        items.iter().enumerate().map(|(i, x)| f(i, x)).collect()
    }
}

fn collect_report<T>(outcomes: Vec<Result<SmoothedProfile<T>, ProfileFailure>>) -> BatchReport<T> {
    let mut results = Vec::with_capacity(outcomes.len());
    let mut failures = Vec::new();
    for outcome in outcomes {
        match outcome {
            Ok(profile) => results.push(profile),
            Err(failure) => failures.push(failure),
        }
    }
    BatchReport { results, failures }
}
