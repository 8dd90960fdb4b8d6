//! Classical triple-loop multiplication.

use crate::matrix::{Element, Matrix};
use crate::matrix_ops::check_same_dim;
use crate::multiplier::{CoreMultiplier, MatrixError};

/// O(n³) multiplier; accepts any dimension.
pub struct Classical;

impl Classical {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for Classical {
    fn default() -> Self {
        Self::new()
    }
}

/// `C[i][j] = Σ_k A[i][k]·B[k][j]`.
pub fn classical(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    check_same_dim(a, b)?;
    let n = a.dim();
    Ok(Matrix::from_fn(n, |i, j| {
        (0..n).fold(0, |acc: Element, k| {
            acc.wrapping_add(a[(i, k)].wrapping_mul(b[(k, j)]))
        })
    }))
}

impl CoreMultiplier for Classical {
    fn multiply_core(&self, a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
        classical(a, b)
    }

    fn name(&self) -> &'static str {
        "Classical"
    }

    fn requires_power_of_two(&self) -> bool {
        false
    }
}
