//! Property-based tests for Gaussian elimination using proptest.
//!
//! Covers: round trip through b = A·x, identity and diagonal systems,
//! exact singularity detection, pivot selection and its tie-break.

use pivotal_core::{InputLayout, LinearSystem, Matrix};
use pivotal_linalg::{AugmentedMatrix, GaussianElimination, NullReporter};
use proptest::prelude::*;

fn solver() -> GaussianElimination<NullReporter> {
    GaussianElimination::with_reporter(NullReporter)
}

/// A strictly diagonally dominant `n x n` matrix (never singular) and a
/// solution vector with entries in [-10, 10].
fn dominant_system() -> impl Strategy<Value = (Vec<Vec<f64>>, Vec<f64>)> {
    (1usize..9).prop_flat_map(|n| {
        (
            prop::collection::vec(prop::collection::vec(-5.0f64..5.0, n), n),
            prop::collection::vec(-10.0f64..10.0, n),
            prop::collection::vec(prop::bool::ANY, n),
        )
            .prop_map(|(mut rows, x, signs)| {
                for (i, row) in rows.iter_mut().enumerate() {
                    let off: f64 = row
                        .iter()
                        .enumerate()
                        .filter(|&(j, _)| j != i)
                        .map(|(_, v)| v.abs())
                        .sum();
                    let d = off + 1.0;
                    row[i] = if signs[i] { d } else { -d };
                }
                (rows, x)
            })
    })
}

/// An arbitrary square matrix with one column or one row forced to zero.
fn zeroed_matrix() -> impl Strategy<Value = (Vec<Vec<f64>>, Vec<f64>)> {
    (1usize..7).prop_flat_map(|n| {
        (
            prop::collection::vec(prop::collection::vec(-10.0f64..10.0, n), n),
            prop::collection::vec(-10.0f64..10.0, n),
            0..n,
            prop::bool::ANY,
        )
            .prop_map(|(mut rows, b, k, zero_column)| {
                for (i, row) in rows.iter_mut().enumerate() {
                    if zero_column {
                        row[k] = 0.0;
                    } else if i == k {
                        row.iter_mut().for_each(|v| *v = 0.0);
                    }
                }
                (rows, b)
            })
    })
}

// ── Solutions ────────────────────────────────────────────────────────

proptest! {
    /// Solving the system built from a known x recovers x within 1e-5.
    #[test]
    fn round_trip_recovers_solution((rows, x) in dominant_system()) {
        let a = Matrix::from_rows(&rows).unwrap();
        let sys = LinearSystem::from_solution(a, &x).unwrap();
        let solved = solver().solve(&sys);
        prop_assert!(solved.is_some());
        let solved = solved.unwrap();
        prop_assert_eq!(solved.len(), x.len());
        for (got, want) in solved.iter().zip(&x) {
            prop_assert!((got - want).abs() < 1e-5, "got {}, want {}", got, want);
        }
    }

    /// The identity matrix hands back b unchanged.
    #[test]
    fn identity_returns_rhs(b in prop::collection::vec(-1e6f64..1e6, 1..12)) {
        let sys = LinearSystem::new(Matrix::identity(b.len()).unwrap(), b.clone()).unwrap();
        prop_assert_eq!(solver().solve(&sys), Some(b));
    }

    /// A diagonal system solves to b_i / d_i, for both input layouts.
    #[test]
    fn diagonal_divides_rhs(
        (d, b) in (1usize..10).prop_flat_map(|n| (
            prop::collection::vec(prop_oneof![-100.0f64..-0.01, 0.01f64..100.0], n),
            prop::collection::vec(-100.0f64..100.0, n),
        ))
    ) {
        let column: Vec<Vec<f64>> = d.iter().map(|&v| vec![v]).collect();
        let sys = LinearSystem::from_rows(&column, &b, InputLayout::DiagonalColumn).unwrap();
        let x = solver().solve(&sys).unwrap();
        for i in 0..d.len() {
            prop_assert!((x[i] - b[i] / d[i]).abs() <= 1e-12 * (b[i] / d[i]).abs().max(1.0));
        }
        let dense = LinearSystem::new(Matrix::from_diagonal(&d).unwrap(), b.clone()).unwrap();
        prop_assert_eq!(solver().solve(&dense), Some(x));
    }
}

// ── Singularity ──────────────────────────────────────────────────────

proptest! {
    /// A zero row or zero column always yields "no unique solution".
    #[test]
    fn zero_row_or_column_is_singular((rows, b) in zeroed_matrix()) {
        let sys = LinearSystem::from_rows(&rows, &b, InputLayout::Dense).unwrap();
        prop_assert_eq!(solver().solve(&sys), None);
    }

    /// Duplicating a row whose entries are small integers is detected exactly.
    #[test]
    fn scaled_row_pair_is_singular(
        a in -8i32..8, b in -8i32..8, scale in prop_oneof![Just(2.0f64), Just(4.0), Just(-2.0)],
        r0 in -20i32..20,
    ) {
        prop_assume!(a != 0 || b != 0);
        let row0 = vec![a as f64, b as f64];
        let row1 = vec![scale * a as f64, scale * b as f64];
        let sys = LinearSystem::from_rows(&[row0, row1], &[r0 as f64, 1.0], InputLayout::Dense).unwrap();
        prop_assert_eq!(solver().solve(&sys), None);
    }
}

// ── Pivot selection ──────────────────────────────────────────────────

proptest! {
    /// The pivot is the first row at or below `col` holding the largest
    /// magnitude in that column.
    #[test]
    fn pivot_is_first_strict_maximum(
        (rows, col) in (1usize..8).prop_flat_map(|n| (
            prop::collection::vec(prop::collection::vec(-4i32..=4, n), n),
            0..n,
        ))
    ) {
        let rows: Vec<Vec<f64>> = rows
            .into_iter()
            .map(|r| r.into_iter().map(f64::from).collect())
            .collect();
        let n = rows.len();
        let sys = LinearSystem::from_rows(&rows, &vec![0.0; n], InputLayout::Dense).unwrap();
        let aug = AugmentedMatrix::from_system(&sys);

        let max = (col..n).map(|r| rows[r][col].abs()).fold(0.0f64, f64::max);
        let expected = (col..n).find(|&r| rows[r][col].abs() == max).unwrap();
        prop_assert_eq!(aug.pivot_row(col), expected);
    }
}
