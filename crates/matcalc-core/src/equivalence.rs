//! Equivalence oracle for cross-validating multiplier outputs.

use crate::matrix::Matrix;

/// True iff all three matrices share a dimension and are elementwise identical.
#[must_use]
pub fn all_equal(m1: &Matrix, m2: &Matrix, m3: &Matrix) -> bool {
    m1.dim() == m2.dim()
        && m1.dim() == m3.dim()
        && m1
            .iter()
            .zip(m2.iter())
            .zip(m3.iter())
            .all(|((x, y), z)| x == y && x == z)
}

/// First `(row, col)` where two same-dimension matrices differ.
///
/// Returns `None` when they are equal or their dimensions differ.
#[must_use]
pub fn first_difference(m1: &Matrix, m2: &Matrix) -> Option<(usize, usize)> {
    if m1.dim() != m2.dim() {
        return None;
    }
    let n = m1.dim();
    m1.iter()
        .zip(m2.iter())
        .position(|(x, y)| x != y)
        .map(|idx| (idx / n, idx % n))
}
