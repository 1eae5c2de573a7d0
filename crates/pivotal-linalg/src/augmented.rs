use pivotal_core::{Float, LinearSystem};

/// The `n x (n + 1)` working matrix `[A | b]` used by one elimination.
///
/// The row count is fixed at construction; rows can be swapped and their
/// values rewritten, never added or removed.
#[derive(Debug, Clone, PartialEq)]
pub struct AugmentedMatrix<T: Float> {
    rows: Vec<Vec<T>>,
    n: usize,
}

impl<T: Float> AugmentedMatrix<T> {
    /// Row `i` is `A[i]` followed by `b[i]`.
    pub fn from_system(system: &LinearSystem<T>) -> Self {
        let n = system.n();
        let rows = system
            .matrix()
            .rows()
            .zip(system.rhs())
            .map(|(coeffs, &rhs)| {
                let mut row = Vec::with_capacity(n + 1);
                row.extend_from_slice(coeffs);
                row.push(rhs);
                row
            })
            .collect();
        AugmentedMatrix { rows, n }
    }

    /// Number of equations.
    pub fn n(&self) -> usize {
        self.n
    }

    pub fn row(&self, i: usize) -> &[T] {
        &self.rows[i]
    }

    pub fn get(&self, i: usize, j: usize) -> T {
        self.rows[i][j]
    }

    /// Index of the row at or below `col` with the largest magnitude in
    /// column `col`. Only a strictly larger magnitude replaces the current
    /// candidate, so ties keep the earliest row.
    pub fn pivot_row(&self, col: usize) -> usize {
        let mut best = col;
        for r in (col + 1)..self.n {
            if self.rows[r][col].abs() > self.rows[best][col].abs() {
                best = r;
            }
        }
        best
    }

    pub fn swap_rows(&mut self, a: usize, b: usize) {
        self.rows.swap(a, b);
    }

    /// Divide columns `i..=n` of row `i` by its diagonal entry.
    pub fn normalize_row(&mut self, i: usize) {
        let row = &mut self.rows[i];
        let pivot = row[i];
        for v in &mut row[i..] {
            *v /= pivot;
        }
    }

    /// Subtract multiples of row `i` from every row below it so that
    /// column `i` becomes zero there. Row `i` must already be normalized.
    pub fn eliminate_below(&mut self, i: usize) {
        let (upper, lower) = self.rows.split_at_mut(i + 1);
        let pivot_row = &upper[i];
        for row in lower {
            let factor = row[i];
            for (v, &p) in row[i..].iter_mut().zip(&pivot_row[i..]) {
                *v -= factor * p;
            }
        }
    }

    /// Solve the upper unit-triangular system left after elimination.
    pub fn back_substitute(&self) -> Vec<T> {
        let n = self.n;
        let mut x = vec![T::ZERO; n];
        for i in (0..n).rev() {
            let row = &self.rows[i];
            let sum: T = ((i + 1)..n).map(|j| row[j] * x[j]).sum();
            x[i] = row[n] - sum;
        }
        x
    }
}
