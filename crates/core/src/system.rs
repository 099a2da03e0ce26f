use thiserror::Error;

use crate::{MatrixError, SquareMatrix};

/// Errors that can occur when assembling a [`LinearSystem`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SystemError {
    #[error("invalid matrix: {0}")]
    Matrix(#[from] MatrixError),

    #[error("right-hand side has {actual} entries, expected {expected}")]
    RhsLength { expected: usize, actual: usize },
}

/// An immutable linear system `Ax = b`.
///
/// The matrix is square and the right-hand side has one entry per row.
/// Numeric preconditions (non-zero diagonal, dominance) are checked by the
/// solver, not here, so a system can describe any well-shaped problem.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawSystem"))]
pub struct LinearSystem {
    matrix: SquareMatrix,
    rhs: Vec<f64>,
}

impl LinearSystem {
    /// Creates a system from a matrix and right-hand side.
    ///
    /// # Errors
    ///
    /// Returns [`SystemError::RhsLength`] if `rhs` does not have one entry
    /// per matrix row.
    pub fn new(matrix: SquareMatrix, rhs: Vec<f64>) -> Result<Self, SystemError> {
        if rhs.len() != matrix.size() {
            return Err(SystemError::RhsLength {
                expected: matrix.size(),
                actual: rhs.len(),
            });
        }
        Ok(Self { matrix, rhs })
    }

    /// Creates a system directly from coefficient rows and a right-hand side.
    ///
    /// # Errors
    ///
    /// Returns an error if the rows do not form a non-empty square matrix or
    /// the right-hand side length does not match.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R], rhs: Vec<f64>) -> Result<Self, SystemError> {
        Self::new(SquareMatrix::from_rows(rows)?, rhs)
    }

    /// Returns the coefficient matrix `A`.
    #[must_use]
    pub fn matrix(&self) -> &SquareMatrix {
        &self.matrix
    }

    /// Returns the right-hand side `b`.
    #[must_use]
    pub fn rhs(&self) -> &[f64] {
        &self.rhs
    }

    /// Returns the number of unknowns.
    #[must_use]
    pub fn size(&self) -> usize {
        self.matrix.size()
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawSystem {
    matrix: SquareMatrix,
    rhs: Vec<f64>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawSystem> for LinearSystem {
    type Error = SystemError;

    fn try_from(raw: RawSystem) -> Result<Self, Self::Error> {
        Self::new(raw.matrix, raw.rhs)
    }
}
