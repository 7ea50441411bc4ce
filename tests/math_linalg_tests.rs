#![cfg(feature = "dev")]
//! Tests for the least-squares solvers of the nalgebra backend.
//!
//! ## Test Organization
//!
//! 1. **QR Path** - overdetermined solves, rank detection
//! 2. **Minimum-Norm Path** - SVD pseudo-inverse solutions

use approx::assert_abs_diff_eq;

use pumpfit::internals::math::linalg::{FloatLinalg, LeastSquaresSolution, QrOutcome};

const TOL: f64 = 1e-12;

// ============================================================================
// QR Tests
// ============================================================================

/// Exact line through three points.
#[test]
fn test_qr_solves_consistent_system() {
    // Rows of [1, x] for x = 0, 1, 2; b = 1 + 2x
    let design = [1.0, 0.0, 1.0, 1.0, 1.0, 2.0];
    let rhs = [1.0, 3.0, 5.0];

    match <f64 as FloatLinalg>::qr_least_squares(&design, &rhs, 3, 2, TOL) {
        QrOutcome::Solved(c) => {
            assert_eq!(c.len(), 2);
            assert_abs_diff_eq!(c[0], 1.0, epsilon = 1e-12);
            assert_abs_diff_eq!(c[1], 2.0, epsilon = 1e-12);
        }
        other => panic!("expected a solution, got {other:?}"),
    }
}

/// Inconsistent system: the solution minimizes the residual norm.
#[test]
fn test_qr_least_squares_mean() {
    // Single column of ones: the least-squares constant is the mean.
    let design = [1.0, 1.0, 1.0, 1.0];
    let rhs = [1.0, 2.0, 3.0, 6.0];

    match <f64 as FloatLinalg>::qr_least_squares(&design, &rhs, 4, 1, TOL) {
        QrOutcome::Solved(c) => assert_abs_diff_eq!(c[0], 3.0, epsilon = 1e-12),
        other => panic!("expected a solution, got {other:?}"),
    }
}

#[test]
fn test_qr_detects_dependent_columns() {
    // Two identical columns.
    let design = [1.0, 1.0, 1.0, 1.0, 1.0, 1.0];
    let rhs = [1.0, 2.0, 3.0];

    assert_eq!(
        <f64 as FloatLinalg>::qr_least_squares(&design, &rhs, 3, 2, TOL),
        QrOutcome::RankDeficient { rank: 1 }
    );
}

#[test]
fn test_qr_zero_column() {
    let design = [1.0, 0.0, 1.0, 0.0, 1.0, 0.0];
    let rhs = [1.0, 2.0, 3.0];

    assert_eq!(
        <f64 as FloatLinalg>::qr_least_squares(&design, &rhs, 3, 2, TOL),
        QrOutcome::RankDeficient { rank: 1 }
    );
}

#[test]
fn test_qr_f32() {
    let design = [1.0f32, -1.0, 1.0, 0.0, 1.0, 1.0];
    let rhs = [0.0f32, 1.0, 2.0];

    match <f32 as FloatLinalg>::qr_least_squares(&design, &rhs, 3, 2, 1e-5) {
        QrOutcome::Solved(c) => {
            assert_abs_diff_eq!(c[0], 1.0, epsilon = 1e-5);
            assert_abs_diff_eq!(c[1], 1.0, epsilon = 1e-5);
        }
        other => panic!("expected a solution, got {other:?}"),
    }
}

// ============================================================================
// Minimum-Norm Tests
// ============================================================================

/// Rank-one square system: the pseudo-inverse splits the weight evenly.
#[test]
fn test_min_norm_rank_one() {
    let design = [1.0, 1.0, 1.0, 1.0];
    let rhs = [2.0, 2.0];

    let solution = <f64 as FloatLinalg>::min_norm_least_squares(&design, &rhs, 2, 2, TOL)
        .expect("pseudo-inverse solution");

    assert_eq!(solution.rank, 1);
    assert_abs_diff_eq!(solution.coefficients[0], 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(solution.coefficients[1], 1.0, epsilon = 1e-12);
}

/// Fewer rows than columns.
#[test]
fn test_min_norm_underdetermined() {
    let design = [1.0, 1.0];
    let rhs = [2.0];

    let solution = <f64 as FloatLinalg>::min_norm_least_squares(&design, &rhs, 1, 2, TOL)
        .expect("pseudo-inverse solution");

    assert_eq!(solution.rank, 1);
    assert_abs_diff_eq!(solution.coefficients[0], 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(solution.coefficients[1], 1.0, epsilon = 1e-12);
}

#[test]
fn test_min_norm_full_rank_matches_qr() {
    let design = [1.0, 0.0, 1.0, 1.0, 1.0, 2.0, 1.0, 3.0];
    let rhs = [1.1, 2.9, 5.2, 6.8];

    let svd = <f64 as FloatLinalg>::min_norm_least_squares(&design, &rhs, 4, 2, TOL)
        .expect("pseudo-inverse solution");
    let qr = match <f64 as FloatLinalg>::qr_least_squares(&design, &rhs, 4, 2, TOL) {
        QrOutcome::Solved(c) => c,
        other => panic!("expected a solution, got {other:?}"),
    };

    assert_eq!(svd.rank, 2);
    for (a, b) in svd.coefficients.iter().zip(qr.iter()) {
        assert_abs_diff_eq!(*a, *b, epsilon = 1e-10);
    }
}

#[test]
fn test_min_norm_zero_design() {
    let design = [0.0; 4];
    let rhs = [1.0, 2.0];

    assert_eq!(
        <f64 as FloatLinalg>::min_norm_least_squares(&design, &rhs, 2, 2, TOL),
        Some(LeastSquaresSolution {
            coefficients: vec![0.0, 0.0],
            rank: 0,
        })
    );
}
