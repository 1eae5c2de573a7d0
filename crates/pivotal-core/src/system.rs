use crate::dtype::Float;
use crate::error::{SolveError, SolveResult};
use crate::matrix::{InputLayout, Matrix};

/// A square linear system `A·x = b` whose shapes have been checked.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearSystem<T: Float> {
    a: Matrix<T>,
    b: Vec<T>,
}

impl<T: Float> LinearSystem<T> {
    pub fn new(a: Matrix<T>, b: Vec<T>) -> SolveResult<Self> {
        if b.len() != a.n() {
            return Err(SolveError::RhsLength {
                expected: a.n(),
                got: b.len(),
            });
        }
        Ok(LinearSystem { a, b })
    }

    /// Build a system from raw coefficient rows and a right-hand side.
    pub fn from_rows(rows: &[Vec<T>], b: &[T], layout: InputLayout) -> SolveResult<Self> {
        let a = Matrix::from_rows_with_layout(rows, layout)?;
        Self::new(a, b.to_vec())
    }

    /// Build the system whose exact solution is `x`, i.e. `b = A·x`.
    pub fn from_solution(a: Matrix<T>, x: &[T]) -> SolveResult<Self> {
        let b = a.matvec(x)?;
        Ok(LinearSystem { a, b })
    }

    /// Number of equations.
    pub fn n(&self) -> usize {
        self.a.n()
    }

    pub fn matrix(&self) -> &Matrix<T> {
        &self.a
    }

    pub fn rhs(&self) -> &[T] {
        &self.b
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let a = Matrix::from_rows(&[vec![1.0, 1.0], vec![1.0, -1.0]]).unwrap();
        let sys = LinearSystem::new(a, vec![5.0, 1.0]).unwrap();
        assert_eq!(sys.n(), 2);
        assert_eq!(sys.rhs(), &[5.0, 1.0]);
    }

    #[test]
    fn test_rhs_length_mismatch() {
        let a = Matrix::from_rows(&[vec![1.0, 1.0], vec![1.0, -1.0]]).unwrap();
        let err = LinearSystem::new(a, vec![5.0]).unwrap_err();
        assert_eq!(err, SolveError::RhsLength { expected: 2, got: 1 });
    }

    #[test]
    fn test_from_rows_diagonal() {
        let sys = LinearSystem::from_rows(
            &[vec![2.0f32], vec![3.0], vec![4.0]],
            &[8.0, 9.0, 16.0],
            InputLayout::DiagonalColumn,
        )
        .unwrap();
        assert_eq!(sys.n(), 3);
        assert_eq!(sys.matrix().get(1, 1), Some(3.0));
        assert_eq!(sys.matrix().get(1, 2), Some(0.0));
    }

    #[test]
    fn test_from_solution() {
        let a = Matrix::from_rows(&[vec![2.0, 1.0], vec![1.0, 3.0]]).unwrap();
        let sys = LinearSystem::from_solution(a, &[1.0, 2.0]).unwrap();
        assert_eq!(sys.rhs(), &[4.0, 7.0]);
    }
}
