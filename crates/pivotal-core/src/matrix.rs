use crate::dtype::Float;
use crate::error::{SolveError, SolveResult};

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a list of coefficient rows is turned into a square matrix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputLayout {
    /// Every row holds all `n` coefficients.
    #[default]
    Dense,
    /// Every row holds a single entry, read as the diagonal of an `n x n`
    /// matrix whose off-diagonal entries are zero.
    DiagonalColumn,
}

/// Square coefficient matrix.
///
/// Stores data in a flat contiguous `Vec<T>` with row-major layout. The
/// constructors guarantee `n >= 1` and `data.len() == n * n`.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T: Float> {
    data: Vec<T>,
    n: usize,
}

// ─── Construction ───────────────────────────────────────────────────────────

impl<T: Float> Matrix<T> {
    /// Build a matrix from dense rows. Every row must have as many entries
    /// as there are rows.
    pub fn from_rows(rows: &[Vec<T>]) -> SolveResult<Self> {
        let n = rows.len();
        if n == 0 {
            return Err(SolveError::EmptyMatrix);
        }
        let mut data = Vec::with_capacity(n * n);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(SolveError::NotSquare {
                    row: i,
                    expected: n,
                    got: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Matrix { data, n })
    }

    /// Build a diagonal matrix with `diag` on its main diagonal.
    pub fn from_diagonal(diag: &[T]) -> SolveResult<Self> {
        let n = diag.len();
        if n == 0 {
            return Err(SolveError::EmptyMatrix);
        }
        let mut data = vec![T::ZERO; n * n];
        for (i, &d) in diag.iter().enumerate() {
            data[i * n + i] = d;
        }
        Ok(Matrix { data, n })
    }

    /// Build a matrix from rows read according to `layout`.
    ///
    /// With [`InputLayout::DiagonalColumn`] every row must have exactly one
    /// entry; a single `[[d]]` row is the same `1 x 1` matrix either way.
    pub fn from_rows_with_layout(rows: &[Vec<T>], layout: InputLayout) -> SolveResult<Self> {
        match layout {
            InputLayout::Dense => Self::from_rows(rows),
            InputLayout::DiagonalColumn => {
                let mut diag = Vec::with_capacity(rows.len());
                for (i, row) in rows.iter().enumerate() {
                    match row.as_slice() {
                        [d] => diag.push(*d),
                        _ => {
                            return Err(SolveError::NotDiagonalColumn {
                                row: i,
                                got: row.len(),
                            })
                        }
                    }
                }
                Self::from_diagonal(&diag)
            }
        }
    }

    /// Identity matrix of size `n`.
    pub fn identity(n: usize) -> SolveResult<Self> {
        Self::from_diagonal(&vec![T::ONE; n])
    }
}

// ─── Access ─────────────────────────────────────────────────────────────────

impl<T: Float> Matrix<T> {
    /// Number of rows (and columns).
    pub fn n(&self) -> usize {
        self.n
    }

    pub fn get(&self, i: usize, j: usize) -> Option<T> {
        if i < self.n && j < self.n {
            Some(self.data[i * self.n + j])
        } else {
            None
        }
    }

    /// Row `i` as a slice. Panics if `i >= n`.
    pub fn row(&self, i: usize) -> &[T] {
        &self.data[i * self.n..(i + 1) * self.n]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        self.data.chunks_exact(self.n)
    }

    /// Matrix-vector product `A·x`.
    pub fn matvec(&self, x: &[T]) -> SolveResult<Vec<T>> {
        if x.len() != self.n {
            return Err(SolveError::DimensionMismatch(format!(
                "matvec: x has {} elements but A is {}x{}",
                x.len(),
                self.n,
                self.n
            )));
        }
        Ok(self
            .rows()
            .map(|row| row.iter().zip(x).map(|(&a, &xi)| a * xi).sum())
            .collect())
    }
}

impl<T: Float> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Matrix({}x{}) [", self.n, self.n)?;
        for row in self.rows() {
            let cells: Vec<String> = row.iter().map(|v| format!("{:.4}", v)).collect();
            writeln!(f, "  [{}]", cells.join(", "))?;
        }
        write!(f, "]")
    }
}
