use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::{SolveError, SolveResult};
use crate::matrix::Matrix;
use crate::system::LinearSystem;

/// Generate a random strictly diagonally dominant `n x n` system together
/// with its exact solution.
///
/// Off-diagonal entries and solution components are uniform in `[-5, 5)`.
/// Each diagonal entry exceeds the absolute row sum of its off-diagonal
/// entries by at least 1, with a random sign, so the system is never
/// singular.
pub fn random_system(n: usize, seed: Option<u64>) -> SolveResult<(LinearSystem<f64>, Vec<f64>)> {
    if n == 0 {
        return Err(SolveError::EmptyMatrix);
    }
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };

    let mut rows = Vec::with_capacity(n);
    for i in 0..n {
        let mut row: Vec<f64> = (0..n)
            .map(|_| rand::Rng::gen::<f64>(&mut rng) * 10.0 - 5.0)
            .collect();
        let off_diag: f64 = row
            .iter()
            .enumerate()
            .filter(|&(j, _)| j != i)
            .map(|(_, v)| v.abs())
            .sum();
        let sign = if rand::Rng::gen::<bool>(&mut rng) { 1.0 } else { -1.0 };
        row[i] = sign * (off_diag + 1.0 + rand::Rng::gen::<f64>(&mut rng));
        rows.push(row);
    }

    let x: Vec<f64> = (0..n)
        .map(|_| rand::Rng::gen::<f64>(&mut rng) * 10.0 - 5.0)
        .collect();

    let a = Matrix::from_rows(&rows)?;
    let system = LinearSystem::from_solution(a, &x)?;
    Ok((system, x))
}
