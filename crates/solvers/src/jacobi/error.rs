use jacomat_core::{DominanceViolation, SystemError};
use thiserror::Error;

use super::PolicyError;

/// Errors that can occur during a Jacobi solve.
///
/// Every variant except [`Error::NumericInstability`] is a precondition
/// failure: the solver refused to run and the input must change before a
/// retry can succeed. Running out of sweeps is not an error; see
/// [`Status`](super::Status).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("invalid system: {0}")]
    InvalidSystem(#[from] SystemError),

    #[error("invalid policy: {0}")]
    InvalidPolicy(#[from] PolicyError),

    #[error("coefficient a[{row}][{col}] is not finite: {value}")]
    NonFiniteCoefficient { row: usize, col: usize, value: f64 },

    #[error("right-hand side entry b[{index}] is not finite: {value}")]
    NonFiniteRhs { index: usize, value: f64 },

    #[error("zero diagonal entry in row {row}")]
    ZeroDiagonal { row: usize },

    #[error(
        "matrix is not convergent: row {row} is not strictly diagonally dominant \
         (|a_ii| = {diagonal}, off-diagonal sum = {off_diagonal_sum})"
    )]
    NotDiagonallyDominant {
        row: usize,
        diagonal: f64,
        off_diagonal_sum: f64,
    },

    #[error("numeric instability at iteration {iteration}: x[{index}] = {value}")]
    NumericInstability {
        iteration: usize,
        index: usize,
        value: f64,
    },
}

impl Error {
    /// Returns true if the solver refused to run because of its input.
    #[must_use]
    pub fn is_precondition(&self) -> bool {
        !matches!(self, Self::NumericInstability { .. })
    }
}

impl From<DominanceViolation> for Error {
    fn from(violation: DominanceViolation) -> Self {
        Self::NotDiagonallyDominant {
            row: violation.row,
            diagonal: violation.diagonal,
            off_diagonal_sum: violation.off_diagonal_sum,
        }
    }
}
