//! Square integer matrix type.

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::multiplier::MatrixError;

/// Element type of every matrix in this crate.
pub type Element = i64;

/// Square matrix stored row-major in a single buffer.
///
/// Every row has exactly `dim` elements; construction enforces it.
/// Serializes as a list of rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Element>>", into = "Vec<Vec<Element>>")]
pub struct Matrix {
    dim: usize,
    data: Vec<Element>,
}

impl Matrix {
    /// Create an `n×n` matrix of zeros.
    #[must_use]
    pub fn zero(n: usize) -> Self {
        Self {
            dim: n,
            data: vec![0; n * n],
        }
    }

    /// Create a `1×1` matrix.
    #[must_use]
    pub fn scalar(value: Element) -> Self {
        Self {
            dim: 1,
            data: vec![value],
        }
    }

    /// Create an `n×n` matrix by evaluating `f(row, col)` in row-major order.
    pub fn from_fn<F>(n: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> Element,
    {
        let mut data = Vec::with_capacity(n * n);
        for i in 0..n {
            for j in 0..n {
                data.push(f(i, j));
            }
        }
        Self { dim: n, data }
    }

    /// Wrap a row-major buffer of `n * n` elements.
    pub(crate) fn from_raw(n: usize, data: Vec<Element>) -> Self {
        debug_assert_eq!(data.len(), n * n);
        Self { dim: n, data }
    }

    /// Build a matrix from nested rows, rejecting non-square input.
    pub fn from_rows(rows: Vec<Vec<Element>>) -> Result<Self, MatrixError> {
        let n = rows.len();
        let mut data = Vec::with_capacity(n * n);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != n {
                return Err(MatrixError::NotSquare {
                    row,
                    len: values.len(),
                    expected: n,
                });
            }
            data.extend(values);
        }
        Ok(Self { dim: n, data })
    }

    /// Dimension `n` of this `n×n` matrix.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Whether this is the `0×0` matrix.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dim == 0
    }

    /// Element at `(row, col)`, or `None` when out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<Element> {
        if row >= self.dim || col >= self.dim {
            return None;
        }
        self.data.get(row * self.dim + col).copied()
    }

    /// Iterate over rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[Element]> {
        self.data.chunks(self.dim.max(1))
    }

    /// Iterate over all elements in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.data.iter()
    }

    /// Copy out as nested rows.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<Element>> {
        self.rows().map(<[Element]>::to_vec).collect()
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = Element;

    fn index(&self, (row, col): (usize, usize)) -> &Element {
        assert!(row < self.dim && col < self.dim, "index ({row}, {col}) out of bounds");
        &self.data[row * self.dim + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Element {
        assert!(row < self.dim && col < self.dim, "index ({row}, {col}) out of bounds");
        &mut self.data[row * self.dim + col]
    }
}

impl TryFrom<Vec<Vec<Element>>> for Matrix {
    type Error = MatrixError;

    fn try_from(rows: Vec<Vec<Element>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<Matrix> for Vec<Vec<Element>> {
    fn from(m: Matrix) -> Self {
        m.to_rows()
    }
}
