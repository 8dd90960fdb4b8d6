//! CLI result presenter and progress reporter.

use indicatif::{ProgressBar, ProgressStyle};

use matcalc_core::Matrix;
use matcalc_orchestration::interfaces::{
    MultiplicationResult, ProgressReporter, ResultPresenter, SweepProgress, SweepRow,
};

use crate::output::{format_duration, format_matrix, format_sweep_row};
use crate::ui::{print_error, print_success};

/// CLI result presenter.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_matrix(&self, label: &str, matrix: &Matrix) {
        if self.quiet {
            return;
        }
        println!("{label}:");
        print!("{}", format_matrix(matrix));
    }

    fn present_comparison(&self, results: &[MultiplicationResult]) {
        if self.quiet {
            return;
        }

        println!("\nComparison Results:");
        println!("{:-<60}", "");
        for result in results {
            let status = if result.outcome.is_err() {
                "ERROR"
            } else {
                "OK"
            };
            println!(
                "  {:<20} {:>10} [{}]",
                result.algorithm,
                format_duration(result.duration),
                status,
            );
            if self.verbose {
                if let Err(e) = &result.outcome {
                    println!("    {e}");
                }
            }
        }
    }

    fn present_verdict(&self, equal: bool) {
        if equal {
            if !self.quiet {
                print_success("all algorithms agree");
            }
        } else {
            print_error("algorithms disagree");
        }
    }

    fn present_sweep_row(&self, row: &SweepRow) {
        if self.quiet {
            return;
        }
        print!("{}", format_sweep_row(row));
        println!();
    }

    fn present_error(&self, error: &str) {
        print_error(error);
    }
}

/// Progress reporter backed by an `indicatif` bar on stderr.
pub struct CLIProgressReporter {
    bar: ProgressBar,
}

impl CLIProgressReporter {
    /// Create a reporter. A quiet reporter draws nothing.
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        let bar = if quiet {
            ProgressBar::hidden()
        } else {
            ProgressBar::new(0).with_style(
                ProgressStyle::with_template("[{elapsed_precise}] [{bar:40}] {pos}/{len} {wide_msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar()),
            )
        };
        Self { bar }
    }
}

impl ProgressReporter for CLIProgressReporter {
    fn start(&self, total: u64) {
        self.bar.set_length(total);
        self.bar.set_position(0);
    }

    fn report(&self, progress: &SweepProgress) {
        self.bar.set_position(progress.step);
        self.bar
            .set_message(format!("n={} {}", progress.n, progress.algorithm));
    }

    fn complete(&self) {
        self.bar.finish_and_clear();
    }
}
