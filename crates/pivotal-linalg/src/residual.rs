use pivotal_core::error::SolveResult;
use pivotal_core::{Float, LinearSystem};

/// Residual vector `A·x - b`.
pub fn residual<T: Float>(system: &LinearSystem<T>, x: &[T]) -> SolveResult<Vec<T>> {
    let ax = system.matrix().matvec(x)?;
    Ok(ax.iter().zip(system.rhs()).map(|(&l, &r)| l - r).collect())
}

/// Largest absolute component of the residual (its max norm).
///
/// NaN if any component is NaN.
pub fn max_abs_residual<T: Float>(system: &LinearSystem<T>, x: &[T]) -> SolveResult<T> {
    let mut worst = T::ZERO;
    for r in residual(system, x)? {
        if r.is_nan() {
            return Ok(r);
        }
        worst = worst.max(r.abs());
    }
    Ok(worst)
}
