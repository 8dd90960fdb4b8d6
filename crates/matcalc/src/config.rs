//! Application configuration from CLI flags and environment.

use clap::Parser;

use matcalc_core::{
    Element, DEFAULT_LOWER_BOUND, DEFAULT_MAX_N, DEFAULT_MIN_N, DEFAULT_ROUNDS,
    DEFAULT_UPPER_BOUND,
};
use matcalc_orchestration::SweepConfig;

/// MatCalc: compare classical, divide-and-conquer, and Strassen matrix multiplication.
///
/// Without a mode flag, runs the fixed 4x4 sanity check.
#[derive(Parser, Debug)]
#[command(name = "matcalc", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Multiply two random n x n matrices with every selected algorithm.
    #[arg(short, long, env = "MATCALC_N")]
    pub n: Option<usize>,

    /// Algorithms to run: classical, dc, strassen, a comma-separated list, or all.
    #[arg(long, default_value = "all")]
    pub algo: String,

    /// Time every selected algorithm for doubling sizes.
    #[arg(long, conflicts_with = "menu")]
    pub sweep: bool,

    /// Interactive menu on stdin.
    #[arg(long)]
    pub menu: bool,

    /// Lower bound of random elements.
    #[arg(long, default_value_t = DEFAULT_LOWER_BOUND, env = "MATCALC_LOW", allow_negative_numbers = true)]
    pub low: Element,

    /// Upper bound of random elements.
    #[arg(long, default_value_t = DEFAULT_UPPER_BOUND, env = "MATCALC_HIGH", allow_negative_numbers = true)]
    pub high: Element,

    /// Timed rounds per algorithm and size.
    #[arg(long, default_value_t = DEFAULT_ROUNDS, env = "MATCALC_ROUNDS")]
    pub rounds: u32,

    /// First sweep size.
    #[arg(long, default_value_t = DEFAULT_MIN_N)]
    pub min_n: usize,

    /// Last sweep size.
    #[arg(long, default_value_t = DEFAULT_MAX_N)]
    pub max_n: usize,

    /// Seed for reproducible random matrices.
    #[arg(long, env = "MATCALC_SEED")]
    pub seed: Option<u64>,

    /// Print sweep results as JSON.
    #[arg(long)]
    pub json: bool,

    /// Write sweep results as JSON to a file.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Quiet mode (no matrices or tables).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Sweep parameters carried by these flags.
    #[must_use]
    pub fn sweep_config(&self) -> SweepConfig {
        SweepConfig {
            low: self.low,
            high: self.high,
            rounds: self.rounds,
            min_n: self.min_n,
            max_n: self.max_n,
            seed: self.seed,
        }
    }
}
