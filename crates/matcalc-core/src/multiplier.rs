//! Multiplier traits, the algorithm selector, and the `MatrixMultiplier` decorator.
//!
//! `Multiplier` is the public trait consumed by orchestration.
//! `CoreMultiplier` is the internal trait implemented by algorithms.
//! `MatrixMultiplier` is a decorator that validates dimensions, handles the
//! empty matrix, and pads to a power of two for the recursive algorithms.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::classical::Classical;
use crate::divide_conquer::NaiveDivideAndConquer;
use crate::matrix::{Element, Matrix};
use crate::matrix_ops::{pad_to_power_of_two, padded_dim, trim};
use crate::strassen::Strassen;

/// Error type for matrix operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatrixError {
    /// Operands have different dimensions.
    #[error("dimension mismatch: {left}x{left} vs {right}x{right}")]
    DimensionMismatch { left: usize, right: usize },

    /// A recursive algorithm received a dimension that is not a power of two.
    #[error("dimension {0} is not a power of two")]
    NotPowerOfTwo(usize),

    /// A matrix of odd dimension cannot be split into quadrants.
    #[error("cannot split a matrix of odd dimension {0}")]
    OddDimension(usize),

    /// A row does not have the expected length.
    #[error("row {row} has {len} elements, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },

    /// Random element range is empty.
    #[error("invalid bounds: low ({low}) is greater than high ({high})")]
    InvalidBounds { low: Element, high: Element },

    /// Elements drawn from `[low, high]` can make an `n×n` product overflow.
    #[error("bounds [{low}, {high}] can overflow the product of {n}x{n} matrices")]
    Overflow { n: usize, low: Element, high: Element },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Results from different algorithms don't match.
    #[error("result mismatch between algorithms")]
    Mismatch,

    /// The run was cancelled.
    #[error("run cancelled")]
    Cancelled,
}

/// Public trait for matrix multipliers, consumed by orchestration.
pub trait Multiplier: Send + Sync {
    /// Multiply two square matrices of equal dimension.
    fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError>;

    /// Get the name of this multiplier.
    fn name(&self) -> &str;
}

/// Internal trait for algorithm implementations.
/// Wrapped by `MatrixMultiplier` which adds validation and padding.
pub trait CoreMultiplier: Send + Sync {
    /// Multiply two matrices whose dimensions already satisfy the algorithm's contract.
    fn multiply_core(&self, a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError>;

    /// Get the name of this algorithm.
    fn name(&self) -> &str;

    /// Whether the algorithm only accepts power-of-two dimensions.
    fn requires_power_of_two(&self) -> bool {
        true
    }
}

/// Decorator that wraps a `CoreMultiplier` with validation and padding.
pub struct MatrixMultiplier {
    inner: Arc<dyn CoreMultiplier>,
}

impl MatrixMultiplier {
    /// Create a new `MatrixMultiplier` wrapping the given core multiplier.
    #[must_use]
    pub fn new(inner: Arc<dyn CoreMultiplier>) -> Self {
        Self { inner }
    }
}

impl Multiplier for MatrixMultiplier {
    fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
        if a.dim() != b.dim() {
            return Err(MatrixError::DimensionMismatch {
                left: a.dim(),
                right: b.dim(),
            });
        }

        let n = a.dim();
        if n == 0 {
            return Ok(Matrix::zero(0));
        }

        if !self.inner.requires_power_of_two() || n.is_power_of_two() {
            tracing::debug!(algorithm = self.inner.name(), n, "multiplying");
            return self.inner.multiply_core(a, b);
        }

        tracing::debug!(
            algorithm = self.inner.name(),
            n,
            padded = padded_dim(n),
            "padding operands to a power of two"
        );
        let product = self
            .inner
            .multiply_core(&pad_to_power_of_two(a), &pad_to_power_of_two(b))?;
        Ok(trim(&product, n))
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}

/// The multiplication algorithms offered by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Triple-loop O(n³) multiplication.
    Classical,
    /// Recursive quadrant multiplication with eight sub-products.
    NaiveDc,
    /// Strassen's recursive multiplication with seven sub-products.
    Strassen,
}

impl Algorithm {
    /// All algorithms, in presentation order.
    pub const ALL: [Algorithm; 3] = [Algorithm::Classical, Algorithm::NaiveDc, Algorithm::Strassen];

    /// Short name used on the command line.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Classical => "classical",
            Self::NaiveDc => "dc",
            Self::Strassen => "strassen",
        }
    }

    /// Human-readable heading for this algorithm's product.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Classical => "Classical matrix multiplication",
            Self::NaiveDc => "Naive divide-and-conquer matrix multiplication",
            Self::Strassen => "Strassen's matrix multiplication",
        }
    }

    /// Create the core implementation for this algorithm.
    #[must_use]
    pub fn core(self) -> Arc<dyn CoreMultiplier> {
        match self {
            Self::Classical => Arc::new(Classical::new()),
            Self::NaiveDc => Arc::new(NaiveDivideAndConquer::new()),
            Self::Strassen => Arc::new(Strassen::new()),
        }
    }

    /// Create a ready-to-use multiplier for this algorithm.
    #[must_use]
    pub fn multiplier(self) -> MatrixMultiplier {
        MatrixMultiplier::new(self.core())
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Algorithm {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classical" | "classic" => Ok(Self::Classical),
            "dc" | "naive" | "naive-dc" | "naivedc" => Ok(Self::NaiveDc),
            "strassen" => Ok(Self::Strassen),
            other => Err(MatrixError::Config(format!("unknown algorithm: {other}"))),
        }
    }
}
