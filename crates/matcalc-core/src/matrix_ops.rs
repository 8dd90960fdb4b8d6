//! Elementwise matrix operations, padding, and trimming.
//!
//! Element arithmetic wraps modulo 2⁶⁴. Every product identity used by the
//! algorithms holds in that ring, so results are exact whenever the true
//! product fits in an [`Element`].

use crate::matrix::{Element, Matrix};
use crate::multiplier::MatrixError;

/// Elementwise sum of two equal-dimension matrices.
pub fn add(m1: &Matrix, m2: &Matrix) -> Result<Matrix, MatrixError> {
    zip_with(m1, m2, Element::wrapping_add)
}

/// Elementwise difference `m1 - m2` of two equal-dimension matrices.
pub fn sub(m1: &Matrix, m2: &Matrix) -> Result<Matrix, MatrixError> {
    zip_with(m1, m2, Element::wrapping_sub)
}

fn zip_with<F>(m1: &Matrix, m2: &Matrix, f: F) -> Result<Matrix, MatrixError>
where
    F: Fn(Element, Element) -> Element,
{
    check_same_dim(m1, m2)?;
    let values = m1.iter().zip(m2.iter()).map(|(&x, &y)| f(x, y)).collect();
    Ok(Matrix::from_raw(m1.dim(), values))
}

/// Return `DimensionMismatch` unless both matrices have the same dimension.
pub fn check_same_dim(m1: &Matrix, m2: &Matrix) -> Result<(), MatrixError> {
    if m1.dim() == m2.dim() {
        Ok(())
    } else {
        Err(MatrixError::DimensionMismatch {
            left: m1.dim(),
            right: m2.dim(),
        })
    }
}

/// Smallest power of two `>= d` (0 stays 0).
#[must_use]
pub fn padded_dim(d: usize) -> usize {
    if d == 0 {
        0
    } else {
        d.next_power_of_two()
    }
}

/// Embed `matrix` in the top-left corner of a zero matrix whose dimension is
/// the next power of two. Power-of-two input is returned as a copy.
#[must_use]
pub fn pad_to_power_of_two(matrix: &Matrix) -> Matrix {
    let d = matrix.dim();
    let n = padded_dim(d);
    if n == d {
        return matrix.clone();
    }
    Matrix::from_fn(n, |i, j| if i < d && j < d { matrix[(i, j)] } else { 0 })
}

/// Top-left `d×d` block of `matrix`. `d` larger than the matrix is clamped.
#[must_use]
pub fn trim(matrix: &Matrix, d: usize) -> Matrix {
    let d = d.min(matrix.dim());
    if d == matrix.dim() {
        return matrix.clone();
    }
    Matrix::from_fn(d, |i, j| matrix[(i, j)])
}
