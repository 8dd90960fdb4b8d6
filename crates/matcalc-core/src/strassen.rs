//! Strassen's recursive multiplication.
//!
//! Seven quadrant products instead of eight, O(n^log2(7)) ≈ O(n^2.807):
//!
//! ```text
//! P1 = A11 (B12 - B22)          C11 = P5 + P4 - P2 + P6
//! P2 = (A11 + A12) B22          C12 = P1 + P2
//! P3 = (A21 + A22) B11          C21 = P3 + P4
//! P4 = A22 (B21 - B11)          C22 = P1 - P3 + P5 - P7
//! P5 = (A11 + A22)(B11 + B22)
//! P6 = (A12 - A22)(B21 + B22)
//! P7 = (A11 - A21)(B11 + B12)
//! ```

use crate::matrix::Matrix;
use crate::matrix_ops::{add, check_same_dim, sub};
use crate::multiplier::{CoreMultiplier, MatrixError};
use crate::partition::{combine, split, Quadrants};

/// Recursive 7-multiplication quadrant multiplier.
pub struct Strassen;

impl Strassen {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for Strassen {
    fn default() -> Self {
        Self::new()
    }
}

/// The seven Strassen products of one recursion level.
struct Products {
    p1: Matrix,
    p2: Matrix,
    p3: Matrix,
    p4: Matrix,
    p5: Matrix,
    p6: Matrix,
    p7: Matrix,
}

/// Multiply two matrices whose shared dimension is a power of two (or 0).
pub fn strassen(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
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
    let p = products(&q)?;

    let c11 = add(&p.p6, &add(&p.p5, &sub(&p.p4, &p.p2)?)?)?;
    let c12 = add(&p.p1, &p.p2)?;
    let c21 = add(&p.p3, &p.p4)?;
    let c22 = sub(&add(&p.p5, &sub(&p.p1, &p.p3)?)?, &p.p7)?;

    combine(&c11, &c12, &c21, &c22)
}

fn products(q: &Quadrants) -> Result<Products, MatrixError> {
    Ok(Products {
        p1: recurse(&q.a11, &sub(&q.b12, &q.b22)?)?,
        p2: recurse(&add(&q.a11, &q.a12)?, &q.b22)?,
        p3: recurse(&add(&q.a21, &q.a22)?, &q.b11)?,
        p4: recurse(&q.a22, &sub(&q.b21, &q.b11)?)?,
        p5: recurse(&add(&q.a11, &q.a22)?, &add(&q.b11, &q.b22)?)?,
        p6: recurse(&sub(&q.a12, &q.a22)?, &add(&q.b21, &q.b22)?)?,
        p7: recurse(&sub(&q.a11, &q.a21)?, &add(&q.b11, &q.b12)?)?,
    })
}

impl CoreMultiplier for Strassen {
    fn multiply_core(&self, a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
        strassen(a, b)
    }

    fn name(&self) -> &'static str {
        "Strassen"
    }
}
