//! Quadrant partitioning and reassembly for the recursive multipliers.

use crate::matrix::Matrix;
use crate::matrix_ops::check_same_dim;
use crate::multiplier::MatrixError;

/// The eight `n/2` quadrants of an operand pair `A`, `B`.
///
/// Each quadrant is an independent copy; the parents are left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quadrants {
    pub a11: Matrix,
    pub a12: Matrix,
    pub a21: Matrix,
    pub a22: Matrix,
    pub b11: Matrix,
    pub b12: Matrix,
    pub b21: Matrix,
    pub b22: Matrix,
}

/// Split `a` and `b` into their quadrants.
///
/// Both matrices must share an even dimension.
pub fn split(a: &Matrix, b: &Matrix) -> Result<Quadrants, MatrixError> {
    check_same_dim(a, b)?;
    let n = a.dim();
    if n % 2 != 0 {
        return Err(MatrixError::OddDimension(n));
    }
    let k = n / 2;
    let quadrant = |m: &Matrix, row: usize, col: usize| {
        Matrix::from_fn(k, |i, j| m[(i + row, j + col)])
    };

    Ok(Quadrants {
        a11: quadrant(a, 0, 0),
        a12: quadrant(a, 0, k),
        a21: quadrant(a, k, 0),
        a22: quadrant(a, k, k),
        b11: quadrant(b, 0, 0),
        b12: quadrant(b, 0, k),
        b21: quadrant(b, k, 0),
        b22: quadrant(b, k, k),
    })
}

/// Write four `k×k` quadrants into the `2k×2k` matrix `m`.
pub fn combine_into(
    m11: &Matrix,
    m12: &Matrix,
    m21: &Matrix,
    m22: &Matrix,
    m: &mut Matrix,
) -> Result<(), MatrixError> {
    let k = m11.dim();
    check_same_dim(m11, m12)?;
    check_same_dim(m11, m21)?;
    check_same_dim(m11, m22)?;
    if m.dim() != 2 * k {
        return Err(MatrixError::DimensionMismatch {
            left: m.dim(),
            right: 2 * k,
        });
    }

    for i in 0..k {
        for j in 0..k {
            m[(i, j)] = m11[(i, j)];
            m[(i, j + k)] = m12[(i, j)];
            m[(i + k, j)] = m21[(i, j)];
            m[(i + k, j + k)] = m22[(i, j)];
        }
    }
    Ok(())
}

/// Assemble four `k×k` quadrants into a new `2k×2k` matrix.
pub fn combine(
    m11: &Matrix,
    m12: &Matrix,
    m21: &Matrix,
    m22: &Matrix,
) -> Result<Matrix, MatrixError> {
    let mut m = Matrix::zero(2 * m11.dim());
    combine_into(m11, m12, m21, m22, &mut m)?;
    Ok(m)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::Element;

    fn m(rows: &[&[Element]]) -> Matrix {
        Matrix::from_rows(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
    }

    fn sample4() -> Matrix {
        Matrix::from_fn(4, |i, j| Element::try_from(i * 4 + j).unwrap())
    }

    #[test]
    fn split_quadrant_layout() {
        let a = sample4();
        let q = split(&a, &a).unwrap();
        assert_eq!(q.a11, m(&[&[0, 1], &[4, 5]]));
        assert_eq!(q.a12, m(&[&[2, 3], &[6, 7]]));
        assert_eq!(q.a21, m(&[&[8, 9], &[12, 13]]));
        assert_eq!(q.a22, m(&[&[10, 11], &[14, 15]]));
        assert_eq!(q.b22, q.a22);
    }

    #[test]
    fn split_keeps_operands_apart() {
        let a = sample4();
        let b = Matrix::from_fn(4, |i, j| -Element::try_from(i * 4 + j).unwrap());
        let q = split(&a, &b).unwrap();
        assert_eq!(q.b11, m(&[&[0, -1], &[-4, -5]]));
        assert_eq!(q.b21, m(&[&[-8, -9], &[-12, -13]]));
        assert_eq!(q.a11, m(&[&[0, 1], &[4, 5]]));
    }

    #[test]
    fn split_then_combine_round_trips() {
        let a = sample4();
        let b = Matrix::from_fn(4, |i, j| Element::try_from(i + j).unwrap());
        let q = split(&a, &b).unwrap();
        assert_eq!(combine(&q.a11, &q.a12, &q.a21, &q.a22).unwrap(), a);
        assert_eq!(combine(&q.b11, &q.b12, &q.b21, &q.b22).unwrap(), b);
    }

    #[test]
    fn split_two_by_two_gives_scalars() {
        let a = m(&[&[1, 2], &[3, 4]]);
        let q = split(&a, &a).unwrap();
        assert_eq!(q.a11, Matrix::scalar(1));
        assert_eq!(q.a12, Matrix::scalar(2));
        assert_eq!(q.a21, Matrix::scalar(3));
        assert_eq!(q.a22, Matrix::scalar(4));
    }

    #[test]
    fn split_rejects_odd_dimension() {
        let a = Matrix::zero(3);
        assert_eq!(split(&a, &a).unwrap_err(), MatrixError::OddDimension(3));
    }

    #[test]
    fn split_rejects_mismatch() {
        assert!(matches!(
            split(&Matrix::zero(2), &Matrix::zero(4)),
            Err(MatrixError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn combine_into_requires_target_size() {
        let q = Matrix::zero(2);
        let mut target = Matrix::zero(3);
        assert!(combine_into(&q, &q, &q, &q, &mut target).is_err());
    }

    #[test]
    fn combine_rejects_uneven_quadrants() {
        let q = Matrix::zero(2);
        assert!(combine(&q, &q, &Matrix::zero(1), &q).is_err());
    }
}
