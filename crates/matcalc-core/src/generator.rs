//! Random matrix generation.

use rand::distributions::{Distribution, Uniform};
use rand::Rng;

use crate::matrix::{Element, Matrix};
use crate::matrix_ops::padded_dim;
use crate::multiplier::MatrixError;

fn element_range(low: Element, high: Element) -> Result<Uniform<Element>, MatrixError> {
    if low > high {
        return Err(MatrixError::InvalidBounds { low, high });
    }
    Ok(Uniform::new_inclusive(low, high))
}

/// Check that every `n×n` product of matrices with elements in `[low, high]`
/// fits in an [`Element`]: `n · max(|low|, |high|)² <= Element::MAX`.
pub fn check_product_bounds(n: usize, low: Element, high: Element) -> Result<(), MatrixError> {
    if low > high {
        return Err(MatrixError::InvalidBounds { low, high });
    }
    let m = u128::from(low.unsigned_abs().max(high.unsigned_abs()));
    let limit = Element::MAX.unsigned_abs();
    let fits = u128::try_from(n)
        .ok()
        .and_then(|n| n.checked_mul(m * m))
        .is_some_and(|worst| worst <= u128::from(limit));
    if fits {
        Ok(())
    } else {
        Err(MatrixError::Overflow { n, low, high })
    }
}

/// `n×n` matrix with every element drawn uniformly from `[low, high]`.
pub fn populate<R: Rng + ?Sized>(
    n: usize,
    low: Element,
    high: Element,
    rng: &mut R,
) -> Result<Matrix, MatrixError> {
    let dist = element_range(low, high)?;
    Ok(Matrix::from_fn(n, |_, _| dist.sample(&mut *rng)))
}

/// Random `d×d` block in the top-left corner of a zero matrix padded to the
/// next power of two. The benchmark inputs are generated this way.
pub fn populate_padded<R: Rng + ?Sized>(
    d: usize,
    low: Element,
    high: Element,
    rng: &mut R,
) -> Result<Matrix, MatrixError> {
    let dist = element_range(low, high)?;
    let n = padded_dim(d);
    Ok(Matrix::from_fn(n, |i, j| {
        if i < d && j < d {
            dist.sample(&mut *rng)
        } else {
            0
        }
    }))
}

/// `n×n` random matrix using the thread-local generator.
pub fn generate_random_matrix(n: usize, low: Element, high: Element) -> Result<Matrix, MatrixError> {
    populate(n, low, high, &mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn populate_respects_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let m = populate(16, -9, 9, &mut rng).unwrap();
        assert_eq!(m.dim(), 16);
        assert!(m.iter().all(|&v| (-9..=9).contains(&v)));
    }

    #[test]
    fn populate_single_value_range() {
        let mut rng = StdRng::seed_from_u64(1);
        let m = populate(3, 4, 4, &mut rng).unwrap();
        assert!(m.iter().all(|&v| v == 4));
    }

    #[test]
    fn product_bounds_accept_small_ranges() {
        assert!(check_product_bounds(512, -9, 9).is_ok());
        assert!(check_product_bounds(0, Element::MIN, Element::MAX).is_ok());
        // 2 · (2^31)² = 2^63 is one past the limit; 2^31 - 1 fits.
        assert!(check_product_bounds(2, -(1 << 31) + 1, (1 << 31) - 1).is_ok());
    }

    #[test]
    fn product_bounds_reject_overflow() {
        let big = 4_000_000_000_000_000_000;
        assert_eq!(
            check_product_bounds(2, big, big).unwrap_err(),
            MatrixError::Overflow { n: 2, low: big, high: big }
        );
        assert!(check_product_bounds(2, -(1 << 31), 0).is_err());
        assert!(check_product_bounds(1, Element::MIN, 0).is_err());
        assert_eq!(
            check_product_bounds(2, 3, -3).unwrap_err(),
            MatrixError::InvalidBounds { low: 3, high: -3 }
        );
    }

    #[test]
    fn populate_rejects_inverted_bounds() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            populate(2, 5, 1, &mut rng).unwrap_err(),
            MatrixError::InvalidBounds { low: 5, high: 1 }
        );
    }

    #[test]
    fn populate_is_reproducible_with_seed() {
        let a = populate(8, -100, 100, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = populate(8, -100, 100, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn populate_padded_zero_border() {
        let mut rng = StdRng::seed_from_u64(3);
        let m = populate_padded(5, 1, 9, &mut rng).unwrap();
        assert_eq!(m.dim(), 8);
        for i in 0..8 {
            for j in 0..8 {
                if i < 5 && j < 5 {
                    assert!(m[(i, j)] >= 1);
                } else {
                    assert_eq!(m[(i, j)], 0);
                }
            }
        }
    }

    #[test]
    fn populate_padded_power_of_two_has_no_border() {
        let mut rng = StdRng::seed_from_u64(3);
        let m = populate_padded(4, 1, 9, &mut rng).unwrap();
        assert_eq!(m.dim(), 4);
        assert!(m.iter().all(|&v| v >= 1));
    }

    #[test]
    fn generate_random_matrix_dimension() {
        let m = generate_random_matrix(5, -1, 1).unwrap();
        assert_eq!(m.dim(), 5);
        assert!(generate_random_matrix(0, -1, 1).unwrap().is_empty());
    }
}
