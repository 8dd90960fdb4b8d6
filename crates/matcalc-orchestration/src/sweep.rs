//! Timing sweep over doubling matrix sizes.

use std::hint::black_box;
use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use matcalc_core::generator::{check_product_bounds, populate_padded};
use matcalc_core::{
    CancellationToken, Element, MatrixError, Multiplier, DEFAULT_LOWER_BOUND, DEFAULT_MAX_N,
    DEFAULT_MIN_N, DEFAULT_ROUNDS, DEFAULT_UPPER_BOUND,
};

use crate::interfaces::{AlgorithmTiming, ProgressReporter, SweepProgress, SweepRow};

/// Parameters of a timing sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepConfig {
    /// Lower bound of random elements (inclusive).
    pub low: Element,
    /// Upper bound of random elements (inclusive).
    pub high: Element,
    /// Timed multiplications per algorithm and size.
    pub rounds: u32,
    /// First dimension of the sweep.
    pub min_n: usize,
    /// Largest dimension of the sweep.
    pub max_n: usize,
    /// Seed for reproducible operands. Entropy-seeded when absent.
    pub seed: Option<u64>,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            low: DEFAULT_LOWER_BOUND,
            high: DEFAULT_UPPER_BOUND,
            rounds: DEFAULT_ROUNDS,
            min_n: DEFAULT_MIN_N,
            max_n: DEFAULT_MAX_N,
            seed: None,
        }
    }
}

impl SweepConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), MatrixError> {
        if self.low > self.high {
            return Err(MatrixError::InvalidBounds {
                low: self.low,
                high: self.high,
            });
        }
        if self.rounds == 0 {
            return Err(MatrixError::Config("rounds must be at least 1".into()));
        }
        if self.min_n == 0 {
            return Err(MatrixError::Config("min_n must be at least 1".into()));
        }
        if self.min_n > self.max_n {
            return Err(MatrixError::Config(format!(
                "min_n ({}) exceeds max_n ({})",
                self.min_n, self.max_n
            )));
        }
        check_product_bounds(self.max_n, self.low, self.high)
    }

    /// Dimensions visited by the sweep: `min_n`, doubling, up to `max_n`.
    pub fn sizes(&self) -> Vec<usize> {
        let mut sizes = Vec::new();
        if self.min_n == 0 {
            return sizes;
        }
        let mut n = self.min_n;
        while n <= self.max_n {
            sizes.push(n);
            match n.checked_mul(2) {
                Some(next) => n = next,
                None => break,
            }
        }
        sizes
    }

    /// Random generator for this sweep.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Mean duration of `rounds` multiplications of fresh `n×n` random operands.
///
/// Operands are generated padded to the next power of two and only the
/// multiply call is timed.
pub fn time_algorithm<R: Rng + ?Sized>(
    multiplier: &dyn Multiplier,
    n: usize,
    config: &SweepConfig,
    rng: &mut R,
    cancel: &CancellationToken,
) -> Result<Duration, MatrixError> {
    let rounds = config.rounds.max(1);
    let mut total = Duration::ZERO;

    for _ in 0..rounds {
        cancel.check_cancelled()?;
        let a = populate_padded(n, config.low, config.high, rng)?;
        let b = populate_padded(n, config.low, config.high, rng)?;

        let start = Instant::now();
        let product = multiplier.multiply(&a, &b)?;
        total += start.elapsed();
        black_box(product);
    }

    Ok(total / rounds)
}

/// Time every multiplier at every sweep size.
///
/// Rows are returned in increasing order of `n`; timings within a row follow
/// the order of `multipliers`.
pub fn run_sweep(
    multipliers: &[Arc<dyn Multiplier>],
    config: &SweepConfig,
    cancel: &CancellationToken,
    reporter: &dyn ProgressReporter,
) -> Result<Vec<SweepRow>, MatrixError> {
    config.validate()?;

    let sizes = config.sizes();
    let total = (sizes.len() * multipliers.len()) as u64;
    let mut rng = config.rng();
    let mut step = 0u64;

    reporter.start(total);

    let time_size = |n: usize| -> Result<SweepRow, MatrixError> {
        let mut timings = Vec::with_capacity(multipliers.len());
        for mult in multipliers {
            let mean = time_algorithm(mult.as_ref(), n, config, &mut rng, cancel)?;
            timings.push(AlgorithmTiming::new(mult.name(), mean));

            step += 1;
            reporter.report(&SweepProgress {
                n,
                algorithm: mult.name().to_string(),
                step,
                total,
            });
        }
        tracing::info!(n, algorithms = timings.len(), "sweep size complete");
        Ok(SweepRow { n, timings })
    };
    let rows: Result<Vec<SweepRow>, MatrixError> = sizes.into_iter().map(time_size).collect();

    // Finish the progress display on cancellation too.
    reporter.complete();
    rows
}
