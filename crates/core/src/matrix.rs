use thiserror::Error;

/// Errors that can occur when constructing a [`SquareMatrix`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    #[error("matrix must have at least one row")]
    Empty,

    #[error("matrix is not square: row {row} has {len} entries, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },
}

/// The first row that breaks strict diagonal dominance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DominanceViolation {
    /// Zero-based index of the offending row.
    pub row: usize,

    /// Absolute value of the diagonal entry, `|a_ii|`.
    pub diagonal: f64,

    /// Sum of absolute off-diagonal entries, `Σ_{j≠i} |a_ij|`.
    pub off_diagonal_sum: f64,
}

/// A dense n×n matrix of reals stored in row-major order.
///
/// Construction guarantees `n ≥ 1` and that every row has exactly `n`
/// entries. Entry values are not constrained here; the solver decides which
/// numeric properties it needs (see [`SquareMatrix::is_diagonally_dominant`]).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")
)]
pub struct SquareMatrix {
    size: usize,
    entries: Vec<f64>,
}

impl SquareMatrix {
    /// Creates a matrix from a slice of rows.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::Empty`] if there are no rows, or
    /// [`MatrixError::NotSquare`] if any row length differs from the row count.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, MatrixError> {
        let size = rows.len();
        if size == 0 {
            return Err(MatrixError::Empty);
        }

        let mut entries = Vec::with_capacity(size * size);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != size {
                return Err(MatrixError::NotSquare {
                    row,
                    len: values.len(),
                    expected: size,
                });
            }
            entries.extend_from_slice(values);
        }

        Ok(Self { size, entries })
    }

    /// Creates an n×n matrix by calling `f(row, col)` for every entry.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::Empty`] if `size` is zero.
    pub fn from_fn<F>(size: usize, mut f: F) -> Result<Self, MatrixError>
    where
        F: FnMut(usize, usize) -> f64,
    {
        if size == 0 {
            return Err(MatrixError::Empty);
        }

        let entries = (0..size)
            .flat_map(|row| (0..size).map(move |col| (row, col)))
            .map(|(row, col)| f(row, col))
            .collect();

        Ok(Self { size, entries })
    }

    /// Returns the dimension `n` of the matrix.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the entry at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(col < self.size, "column {col} out of bounds for size {}", self.size);
        self.row(row)[col]
    }

    /// Returns row `i` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds.
    #[must_use]
    pub fn row(&self, i: usize) -> &[f64] {
        let start = i * self.size;
        &self.entries[start..start + self.size]
    }

    /// Iterates over the rows in order.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[f64]> {
        self.entries.chunks_exact(self.size)
    }

    /// Returns the diagonal entry of row `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds.
    #[must_use]
    pub fn diagonal(&self, i: usize) -> f64 {
        self.row(i)[i]
    }

    /// Returns the position and value of the first NaN or infinite entry.
    #[must_use]
    pub fn non_finite_entry(&self) -> Option<(usize, usize, f64)> {
        self.entries
            .iter()
            .position(|value| !value.is_finite())
            .map(|index| (index / self.size, index % self.size, self.entries[index]))
    }

    /// Returns the index of the first row whose diagonal entry is exactly zero.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn zero_diagonal(&self) -> Option<usize> {
        (0..self.size).find(|&i| self.diagonal(i) == 0.0)
    }

    /// Returns the first row that is not strictly diagonally dominant.
    ///
    /// A row `i` is strictly dominant when `|a_ii| > Σ_{j≠i} |a_ij|`.
    /// Rows containing NaN never satisfy the comparison and are reported.
    #[must_use]
    pub fn dominance_violation(&self) -> Option<DominanceViolation> {
        self.rows().enumerate().find_map(|(row, values)| {
            let diagonal = values[row].abs();
            let off_diagonal_sum: f64 = values
                .iter()
                .enumerate()
                .filter(|&(col, _)| col != row)
                .map(|(_, value)| value.abs())
                .sum();

            // NaN compares false and lands on the violation side.
            if diagonal > off_diagonal_sum {
                None
            } else {
                Some(DominanceViolation {
                    row,
                    diagonal,
                    off_diagonal_sum,
                })
            }
        })
    }

    /// Returns true if every row is strictly diagonally dominant.
    ///
    /// This is a sufficient (not necessary) condition for the Jacobi method
    /// to converge from any starting point.
    #[must_use]
    pub fn is_diagonally_dominant(&self) -> bool {
        self.dominance_violation().is_none()
    }
}

impl TryFrom<Vec<Vec<f64>>> for SquareMatrix {
    type Error = MatrixError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::from_rows(&rows)
    }
}

impl From<SquareMatrix> for Vec<Vec<f64>> {
    fn from(matrix: SquareMatrix) -> Self {
        matrix.rows().map(<[f64]>::to_vec).collect()
    }
}
