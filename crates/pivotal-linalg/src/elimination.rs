use pivotal_core::error::SolveResult;
use pivotal_core::{Float, InputLayout, LinearSystem};

use crate::augmented::AugmentedMatrix;
use crate::report::{LogReporter, Report, Reporter};

/// Gaussian elimination with partial pivoting followed by back substitution.
///
/// The outcome of each solve is handed to the reporter `R`.
#[derive(Debug, Clone, Default)]
pub struct GaussianElimination<R = LogReporter> {
    reporter: R,
}

impl GaussianElimination<LogReporter> {
    pub fn new() -> Self {
        GaussianElimination {
            reporter: LogReporter,
        }
    }
}

impl<R> GaussianElimination<R> {
    pub fn with_reporter(reporter: R) -> Self {
        GaussianElimination { reporter }
    }

    /// Solve `A·x = b`.
    ///
    /// Returns `None` when the system has no unique solution, i.e. when the
    /// pivot chosen for some column is exactly zero. There is no tolerance:
    /// a tiny nonzero pivot is accepted.
    pub fn solve<T: Float>(&self, system: &LinearSystem<T>) -> Option<Vec<T>>
    where
        R: Reporter<T>,
    {
        let mut aug = AugmentedMatrix::from_system(system);
        let n = aug.n();

        for i in 0..n {
            let p = aug.pivot_row(i);
            if aug.get(p, i) == T::ZERO {
                self.reporter.report(Report::NoUniqueSolution { column: i });
                return None;
            }
            aug.swap_rows(i, p);
            aug.normalize_row(i);
            aug.eliminate_below(i);
        }

        let x = aug.back_substitute();
        self.reporter.report(Report::Solved { solution: &x });
        Some(x)
    }
}

/// Solve a dense system given as coefficient rows and a right-hand side.
///
/// Malformed input is an `Err`; a well-formed singular system is `Ok(None)`.
pub fn solve<T: Float>(rows: &[Vec<T>], b: &[T]) -> SolveResult<Option<Vec<T>>> {
    solve_with_layout(rows, b, InputLayout::Dense)
}

/// Like [`solve`], reading `rows` according to `layout`.
pub fn solve_with_layout<T: Float>(
    rows: &[Vec<T>],
    b: &[T],
    layout: InputLayout,
) -> SolveResult<Option<Vec<T>>> {
    let system = LinearSystem::from_rows(rows, b, layout)?;
    Ok(GaussianElimination::new().solve(&system))
}
