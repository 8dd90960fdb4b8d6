//! Core orchestration: running every selected multiplier on the same operands
//! and cross-validating the products.

use std::sync::Arc;
use std::time::Instant;

use matcalc_core::equivalence::first_difference;
use matcalc_core::{Matrix, MatrixError, Multiplier};

use crate::interfaces::MultiplicationResult;

/// Multiply `a` by `b` with each multiplier in turn.
///
/// Runs sequentially so the recorded durations are not skewed by contention.
pub fn execute_multiplications(
    multipliers: &[Arc<dyn Multiplier>],
    a: &Matrix,
    b: &Matrix,
) -> Vec<MultiplicationResult> {
    multipliers
        .iter()
        .map(|mult| {
            let start = Instant::now();
            let outcome = mult.multiply(a, b);
            let duration = start.elapsed();

            if let Err(e) = &outcome {
                tracing::warn!(algorithm = mult.name(), error = %e, "multiplication failed");
            }

            MultiplicationResult {
                algorithm: mult.name().to_string(),
                outcome,
                duration,
            }
        })
        .collect()
}

/// Analyze comparison results for mismatches.
pub fn analyze_comparison_results(results: &[MultiplicationResult]) -> Result<(), MatrixError> {
    let valid_results: Vec<(&str, &Matrix)> = results
        .iter()
        .filter_map(|r| r.outcome.as_ref().ok().map(|m| (r.algorithm.as_str(), m)))
        .collect();

    let Some(&(first_name, first_value)) = valid_results.first() else {
        return Err(MatrixError::Config("no valid results".into()));
    };

    for &(name, value) in &valid_results[1..] {
        if value != first_value {
            tracing::warn!(
                reference = first_name,
                algorithm = name,
                position = ?first_difference(first_value, value),
                "products differ"
            );
            return Err(MatrixError::Mismatch);
        }
    }

    Ok(())
}
