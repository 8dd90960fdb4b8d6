//! # matcalc-orchestration
//!
//! Multiplier selection, cross-validation, and timing sweeps.

pub mod interfaces;
pub mod multiplier_selection;
pub mod orchestrator;
pub mod sweep;

pub use interfaces::{ProgressReporter, ResultPresenter};
pub use orchestrator::{analyze_comparison_results, execute_multiplications};
pub use sweep::{run_sweep, SweepConfig};
