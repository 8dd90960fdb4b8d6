//! Naive divide-and-conquer multiplication.
//!
//! Splits both operands into quadrants and recurses on all eight quadrant
//! products. Same O(n³) cost as the classical loop; kept as the structural
//! baseline for Strassen.

use crate::matrix::Matrix;
use crate::matrix_ops::{add, check_same_dim};
use crate::multiplier::{CoreMultiplier, MatrixError};
use crate::partition::{combine, split};

/// Recursive 8-multiplication quadrant multiplier.
pub struct NaiveDivideAndConquer;

impl NaiveDivideAndConquer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for NaiveDivideAndConquer {
    fn default() -> Self {
        Self::new()
    }
}

/// Multiply two matrices whose shared dimension is a power of two (or 0).
pub fn naive_dc(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    check_same_dim(a, b)?;
    let n = a.dim();
    if n == 0 {
        return Ok(Matrix::zero(0));
    }
    if !n.is_power_of_two() {
        return Err(MatrixError::NotPowerOfTwo(n));
    }
    recurse(a, b)
}

fn recurse(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    if a.dim() == 1 {
        return Ok(Matrix::scalar(a[(0, 0)].wrapping_mul(b[(0, 0)])));
    }

    let q = split(a, b)?;

    let p1 = recurse(&q.a11, &q.b11)?;
    let p2 = recurse(&q.a12, &q.b21)?;
    let p3 = recurse(&q.a11, &q.b12)?;
    let p4 = recurse(&q.a12, &q.b22)?;
    let p5 = recurse(&q.a21, &q.b11)?;
    let p6 = recurse(&q.a22, &q.b21)?;
    let p7 = recurse(&q.a21, &q.b12)?;
    let p8 = recurse(&q.a22, &q.b22)?;

    let c11 = add(&p1, &p2)?;
    let c12 = add(&p3, &p4)?;
    let c21 = add(&p5, &p6)?;
    let c22 = add(&p7, &p8)?;

    combine(&c11, &c12, &c21, &c22)
}

impl CoreMultiplier for NaiveDivideAndConquer {
    fn multiply_core(&self, a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
        naive_dc(a, b)
    }

    fn name(&self) -> &'static str {
        "NaiveDC"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classical::classical;
    use crate::matrix::Element;

    fn m(rows: &[&[Element]]) -> Matrix {
        Matrix::from_rows(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
    }

    #[test]
    fn base_case() {
        let c = naive_dc(&Matrix::scalar(3), &Matrix::scalar(-4)).unwrap();
        assert_eq!(c, Matrix::scalar(-12));
    }

    #[test]
    fn two_by_two() {
        let a = m(&[&[1, 2], &[3, 4]]);
        let b = m(&[&[5, 6], &[7, 8]]);
        assert_eq!(naive_dc(&a, &b).unwrap(), m(&[&[19, 22], &[43, 50]]));
    }

    #[test]
    fn matches_classical_on_eight() {
        let a = Matrix::from_fn(8, |i, j| Element::try_from(i * 3 + j).unwrap() - 10);
        let b = Matrix::from_fn(8, |i, j| Element::try_from(i ^ j).unwrap() - 4);
        assert_eq!(naive_dc(&a, &b).unwrap(), classical(&a, &b).unwrap());
    }

    #[test]
    fn rejects_non_power_of_two() {
        let a = Matrix::zero(6);
        assert_eq!(naive_dc(&a, &a).unwrap_err(), MatrixError::NotPowerOfTwo(6));
    }

    #[test]
    fn empty() {
        assert!(naive_dc(&Matrix::zero(0), &Matrix::zero(0)).unwrap().is_empty());
    }

    #[test]
    fn core_requires_power_of_two() {
        let core = NaiveDivideAndConquer::new();
        assert!(core.requires_power_of_two());
        assert!(core.multiply_core(&Matrix::zero(3), &Matrix::zero(3)).is_err());
    }
}
