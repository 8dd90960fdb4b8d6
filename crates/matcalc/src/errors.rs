//! Error handling and exit codes.

use matcalc_core::constants::exit_codes;
use matcalc_core::MatrixError;

/// Map a multiplication error to the process exit code.
pub fn handle_error(err: &MatrixError) -> i32 {
    match err {
        MatrixError::DimensionMismatch { .. }
        | MatrixError::NotPowerOfTwo(_)
        | MatrixError::OddDimension(_)
        | MatrixError::NotSquare { .. } => exit_codes::ERROR_GENERIC,
        MatrixError::InvalidBounds { .. }
        | MatrixError::Overflow { .. }
        | MatrixError::Config(_) => exit_codes::ERROR_CONFIG,
        MatrixError::Mismatch => exit_codes::ERROR_MISMATCH,
        MatrixError::Cancelled => exit_codes::ERROR_CANCELED,
    }
}

/// Exit code for an application error. Errors that are not a
/// [`MatrixError`] map to the generic code.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<MatrixError>()
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}
