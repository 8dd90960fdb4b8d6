//! Default benchmark parameters and exit codes.

use crate::matrix::Element;

/// Default lower bound for random matrix elements.
pub const DEFAULT_LOWER_BOUND: Element = -9;

/// Default upper bound for random matrix elements.
pub const DEFAULT_UPPER_BOUND: Element = 9;

/// Default number of timed rounds per algorithm and size.
pub const DEFAULT_ROUNDS: u32 = 5;

/// Smallest dimension in a default timing sweep.
pub const DEFAULT_MIN_N: usize = 2;

/// Largest dimension in a default timing sweep.
pub const DEFAULT_MAX_N: usize = 512;

/// Exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Algorithm results did not match during cross-validation.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
    /// Run cancelled by user (Ctrl+C).
    pub const ERROR_CANCELED: i32 = 130;
}
