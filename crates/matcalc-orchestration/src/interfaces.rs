//! Orchestration interfaces.

use std::time::Duration;

use serde::Serialize;

use matcalc_core::{Matrix, MatrixError};

/// Position of a sweep within its run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepProgress {
    /// Dimension currently being timed.
    pub n: usize,
    /// Algorithm currently being timed.
    pub algorithm: String,
    /// Steps completed so far (one step = one algorithm at one size).
    pub step: u64,
    /// Total number of steps.
    pub total: u64,
}

/// Trait for reporting sweep progress to the user.
pub trait ProgressReporter: Send + Sync {
    /// Called once before the first step.
    fn start(&self, total: u64);

    /// Report a progress update.
    fn report(&self, progress: &SweepProgress);

    /// Report completion.
    fn complete(&self);
}

/// Trait for presenting results to the user.
pub trait ResultPresenter: Send + Sync {
    /// Present a labelled matrix.
    fn present_matrix(&self, label: &str, matrix: &Matrix);

    /// Present per-algorithm outcomes of one comparison run.
    fn present_comparison(&self, results: &[MultiplicationResult]);

    /// Present the equivalence oracle verdict.
    fn present_verdict(&self, equal: bool);

    /// Present one row of a timing sweep.
    fn present_sweep_row(&self, row: &SweepRow);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// Result of a single multiplication.
#[derive(Debug, Clone)]
pub struct MultiplicationResult {
    /// Algorithm name.
    pub algorithm: String,
    /// The product or a structured error.
    pub outcome: Result<Matrix, MatrixError>,
    /// Wall-clock duration of the multiply call.
    pub duration: Duration,
}

/// Mean time of one algorithm at one size.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlgorithmTiming {
    /// Algorithm name.
    pub algorithm: String,
    /// Mean duration over all rounds, in microseconds.
    pub mean_us: f64,
}

impl AlgorithmTiming {
    /// Build a timing from a mean duration.
    #[must_use]
    pub fn new(algorithm: impl Into<String>, mean: Duration) -> Self {
        Self {
            algorithm: algorithm.into(),
            mean_us: mean.as_secs_f64() * 1_000_000.0,
        }
    }
}

/// All algorithm timings for one dimension of a sweep.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepRow {
    /// Logical matrix dimension.
    pub n: usize,
    /// One entry per timed algorithm, in selection order.
    pub timings: Vec<AlgorithmTiming>,
}

/// Null progress reporter (does nothing).
pub struct NullProgressReporter;

impl ProgressReporter for NullProgressReporter {
    fn start(&self, _total: u64) {}
    fn report(&self, _progress: &SweepProgress) {}
    fn complete(&self) {}
}
