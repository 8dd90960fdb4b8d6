//! # matcalc-core
//!
//! Core library for the MatCalc matrix multiplication benchmark.
//! Implements classical, naive divide-and-conquer, and Strassen
//! multiplication over square integer matrices.

pub mod cancellation;
pub mod classical;
pub mod constants;
pub mod divide_conquer;
pub mod equivalence;
pub mod generator;
pub mod matrix;
pub mod matrix_ops;
pub mod multiplier;
pub mod partition;
pub mod registry;
pub mod strassen;

// Re-exports
pub use cancellation::CancellationToken;
pub use constants::{
    exit_codes, DEFAULT_LOWER_BOUND, DEFAULT_MAX_N, DEFAULT_MIN_N, DEFAULT_ROUNDS,
    DEFAULT_UPPER_BOUND,
};
pub use generator::generate_random_matrix;
pub use matrix::{Element, Matrix};
pub use multiplier::{Algorithm, CoreMultiplier, MatrixError, MatrixMultiplier, Multiplier};
pub use registry::{DefaultFactory, MultiplierFactory};

/// Multiply `a` by `b` with the selected algorithm.
///
/// Any equal dimension is accepted: the recursive algorithms pad to the next
/// power of two and trim the product back.
///
/// # Example
/// ```
/// use matcalc_core::{multiply, Algorithm, Matrix};
///
/// let a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
/// let b = Matrix::from_rows(vec![vec![5, 6], vec![7, 8]]).unwrap();
/// let c = multiply(&a, &b, Algorithm::Strassen).unwrap();
/// assert_eq!(c.to_rows(), vec![vec![19, 22], vec![43, 50]]);
/// ```
pub fn multiply(a: &Matrix, b: &Matrix, algorithm: Algorithm) -> Result<Matrix, MatrixError> {
    algorithm.multiplier().multiply(a, b)
}

/// Equivalence oracle: true iff all three matrices are identical.
#[must_use]
pub fn matrices_equal(m1: &Matrix, m2: &Matrix, m3: &Matrix) -> bool {
    equivalence::all_equal(m1, m2, m3)
}
