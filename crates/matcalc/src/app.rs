//! Application entry point and dispatch.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};

use matcalc_cli::output::{write_sweep_json, write_to_file};
use matcalc_cli::presenter::{CLIProgressReporter, CLIResultPresenter};
use matcalc_cli::ui::print_header;
use matcalc_core::generator::{check_product_bounds, populate_padded};
use matcalc_core::registry::DefaultFactory;
use matcalc_core::{matrices_equal, Algorithm, CancellationToken, Element, Matrix, MatrixError};
use matcalc_orchestration::interfaces::{MultiplicationResult, ResultPresenter};
use matcalc_orchestration::multiplier_selection::get_multipliers_to_run;
use matcalc_orchestration::orchestrator::{analyze_comparison_results, execute_multiplications};
use matcalc_orchestration::sweep::run_sweep;

use crate::config::AppConfig;
use crate::menu::run_menu;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        matcalc_cli::completion::write_completion::<AppConfig>(shell, &mut io::stdout());
        return Ok(());
    }

    let factory = DefaultFactory::new();
    let presenter = CLIResultPresenter::new(config.verbose, config.quiet);

    if config.menu {
        let cancel = CancellationToken::new();
        ctrlc_handler(cancel.clone())?;
        let stdin = io::stdin();
        return run_menu(
            config,
            &factory,
            &presenter,
            &cancel,
            stdin.lock(),
            io::stdout().lock(),
        );
    }

    if config.sweep {
        let cancel = CancellationToken::new();
        ctrlc_handler(cancel.clone())?;
        return run_timings(config, &factory, &presenter, &cancel, &mut io::stdout().lock());
    }

    if let Some(n) = config.n {
        return run_random(n, config, &factory, &presenter);
    }

    run_sanity_check(&presenter, config.quiet)
}

const SANITY_A: [[Element; 4]; 4] = [[2, 0, -1, 6], [3, 7, 8, 0], [-5, 1, 6, -2], [8, 0, 2, 7]];
const SANITY_B: [[Element; 4]; 4] = [[0, 1, 6, 3], [-2, 8, 7, 1], [2, 0, -1, 0], [9, 1, 6, -2]];

/// The fixed 4x4 operands of the sanity check.
#[must_use]
pub fn sanity_operands() -> (Matrix, Matrix) {
    (
        Matrix::from_fn(4, |i, j| SANITY_A[i][j]),
        Matrix::from_fn(4, |i, j| SANITY_B[i][j]),
    )
}

/// Multiply the fixed operands with all three algorithms and check that the
/// products agree.
pub fn run_sanity_check(presenter: &dyn ResultPresenter, quiet: bool) -> Result<()> {
    if !quiet {
        print_header("Sanity check");
        println!("Testing the 3 algorithms with:");
    }
    let (a, b) = sanity_operands();
    presenter.present_matrix("Matrix 1", &a);
    presenter.present_matrix("Matrix 2", &b);

    let c1 = matcalc_core::multiply(&a, &b, Algorithm::Classical)?;
    let c2 = matcalc_core::multiply(&a, &b, Algorithm::NaiveDc)?;
    let c3 = matcalc_core::multiply(&a, &b, Algorithm::Strassen)?;

    if !quiet {
        println!("\nResults:");
    }
    for (algo, product) in Algorithm::ALL.iter().zip([&c1, &c2, &c3]) {
        presenter.present_matrix(algo.title(), product);
    }

    let equal = matrices_equal(&c1, &c2, &c3);
    presenter.present_verdict(equal);
    if equal {
        Ok(())
    } else {
        Err(MatrixError::Mismatch.into())
    }
}

/// Multiply two random `n x n` matrices with the selected algorithms.
///
/// The operands are padded with zeros to the next power of two, so every
/// algorithm sees the same power-of-two input.
pub fn run_random(
    n: usize,
    config: &AppConfig,
    factory: &DefaultFactory,
    presenter: &dyn ResultPresenter,
) -> Result<()> {
    let sweep = config.sweep_config();
    check_product_bounds(n, sweep.low, sweep.high)?;
    let multipliers = get_multipliers_to_run(&config.algo, factory)?;
    let mut rng = sweep.rng();
    let a = populate_padded(n, sweep.low, sweep.high, &mut rng)?;
    let b = populate_padded(n, sweep.low, sweep.high, &mut rng)?;

    if !config.quiet {
        println!("\nTesting {} algorithm(s) with:", multipliers.len());
    }
    presenter.present_matrix("Matrix 1", &a);
    presenter.present_matrix("Matrix 2", &b);

    let results = execute_multiplications(&multipliers, &a, &b);
    if !config.quiet {
        println!("\nResults:");
    }
    present_products(&results, presenter);
    if results.len() > 1 && config.verbose {
        presenter.present_comparison(&results);
    }

    if let Some(err) = results.iter().find_map(|r| r.outcome.as_ref().err()) {
        return Err(err.clone().into());
    }

    match analyze_comparison_results(&results) {
        Ok(()) => {
            presenter.present_verdict(true);
            Ok(())
        }
        Err(MatrixError::Mismatch) => {
            presenter.present_verdict(false);
            Err(MatrixError::Mismatch.into())
        }
        Err(e) => Err(e.into()),
    }
}

fn present_products(results: &[MultiplicationResult], presenter: &dyn ResultPresenter) {
    for result in results {
        let label = result
            .algorithm
            .parse::<Algorithm>()
            .map_or(result.algorithm.as_str(), |a| a.title());
        match &result.outcome {
            Ok(product) => presenter.present_matrix(label, product),
            Err(e) => presenter.present_error(&format!("{}: {e}", result.algorithm)),
        }
    }
}

/// Time the selected algorithms over the configured sweep sizes.
pub fn run_timings(
    config: &AppConfig,
    factory: &DefaultFactory,
    presenter: &dyn ResultPresenter,
    cancel: &CancellationToken,
    out: &mut dyn Write,
) -> Result<()> {
    let sweep = config.sweep_config();
    sweep.validate()?;
    let multipliers = get_multipliers_to_run(&config.algo, factory)?;

    let show_table = !config.json && !config.quiet;
    if show_table {
        print_header("Algorithm times");
    }

    let reporter = CLIProgressReporter::new(config.quiet || config.json);
    let rows = run_sweep(&multipliers, &sweep, cancel, &reporter)?;

    if config.json {
        write_sweep_json(&rows, out).context("writing sweep JSON")?;
    } else if show_table {
        for row in &rows {
            presenter.present_sweep_row(row);
        }
    }

    if let Some(path) = &config.output {
        write_to_file(path, &rows).with_context(|| format!("writing {path}"))?;
    }

    Ok(())
}

/// Read one trimmed line. `None` at end of input.
pub(crate) fn read_line(input: &mut dyn BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn ctrlc_handler(cancel: CancellationToken) -> Result<()> {
    ctrlc::set_handler(move || {
        cancel.cancel();
    })
    .context("setting Ctrl+C handler")
}
