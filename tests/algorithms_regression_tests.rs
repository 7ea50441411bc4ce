#![cfg(feature = "dev")]
//! Tests for the polynomial least-squares algorithm.
//!
//! ## Test Organization
//!
//! 1. **Degree Types** - values, conversions, term construction
//! 2. **Design Matrix** - Vandermonde rows on the mapped domain
//! 3. **Fitting** - full-rank solves and rank policies
//! 4. **Evaluation** - Horner's method

use approx::assert_abs_diff_eq;

use pumpfit::internals::algorithms::polynomial::{evaluate_all, horner};
use pumpfit::internals::algorithms::regression::{
    build_design_matrix, fit_polynomial, rank_tolerance, PolynomialDegree, RankPolicy,
};
use pumpfit::internals::math::domain::AffineDomain;
use pumpfit::internals::primitives::errors::FitError;

// ============================================================================
// Degree Type Tests
// ============================================================================

#[test]
fn test_polynomial_degree_values() {
    assert_eq!(PolynomialDegree::Constant.value(), 0);
    assert_eq!(PolynomialDegree::Linear.value(), 1);
    assert_eq!(PolynomialDegree::Quadratic.value(), 2);
    assert_eq!(PolynomialDegree::Cubic.value(), 3);
    assert_eq!(PolynomialDegree::Quartic.value(), 4);
    assert_eq!(PolynomialDegree::Higher(7).value(), 7);

    assert_eq!(PolynomialDegree::Cubic.num_coefficients(), 4);
    assert_eq!(PolynomialDegree::default(), PolynomialDegree::Quadratic);
}

#[test]
fn test_polynomial_degree_from_usize() {
    assert_eq!(PolynomialDegree::from(0usize), PolynomialDegree::Constant);
    assert_eq!(PolynomialDegree::from(3usize), PolynomialDegree::Cubic);
    assert_eq!(PolynomialDegree::from(4usize), PolynomialDegree::Quartic);
    assert_eq!(PolynomialDegree::from(9usize), PolynomialDegree::Higher(9));
}

#[test]
fn test_build_terms() {
    let mut terms = [0.0; 4];
    let n = PolynomialDegree::Cubic.build_terms(2.0, &mut terms);

    assert_eq!(n, 4);
    assert_eq!(terms, [1.0, 2.0, 4.0, 8.0]);
}

// ============================================================================
// Design Matrix Tests
// ============================================================================

#[test]
fn test_design_matrix_on_mapped_domain() {
    let x = [0.0, 1.0, 2.0];
    let domain = AffineDomain::from_samples(&x);
    let design = build_design_matrix(&x, &domain, PolynomialDegree::Quadratic);

    // t = -1, 0, 1
    assert_eq!(design, vec![1.0, -1.0, 1.0, 1.0, 0.0, 0.0, 1.0, 1.0, 1.0]);
}

#[test]
fn test_rank_tolerance_scales_with_size() {
    let small: f64 = rank_tolerance(4, 2);
    let large: f64 = rank_tolerance(400, 2);

    assert!(small > f64::EPSILON);
    assert!(large > small);
    assert!(large < 1e-9);
}

// ============================================================================
// Fitting Tests
// ============================================================================

#[test]
fn test_fit_polynomial_full_rank() {
    let x = [1.0, 2.0, 3.0, 4.0, 5.0];
    let y: Vec<f64> = x.iter().map(|&x| 3.0 - x + 0.25 * x * x).collect();

    let solution =
        fit_polynomial(&x, &y, PolynomialDegree::Quadratic, RankPolicy::Strict).unwrap();

    assert_eq!(solution.rank, 3);
    assert_abs_diff_eq!(solution.coefficients[0], 3.0, epsilon = 1e-10);
    assert_abs_diff_eq!(solution.coefficients[1], -1.0, epsilon = 1e-10);
    assert_abs_diff_eq!(solution.coefficients[2], 0.25, epsilon = 1e-10);
}

#[test]
fn test_fit_polynomial_single_point_constant() {
    let solution =
        fit_polynomial(&[2.0], &[7.5], PolynomialDegree::Constant, RankPolicy::Strict).unwrap();

    assert_eq!(solution.rank, 1);
    assert_abs_diff_eq!(solution.coefficients[0], 7.5, epsilon = 1e-12);
}

#[test]
fn test_fit_polynomial_strict_errors() {
    let err = fit_polynomial(
        &[0.0, 1.0, 2.0],
        &[1.0, 2.0, 0.0],
        PolynomialDegree::Cubic,
        RankPolicy::Strict,
    )
    .unwrap_err();
    assert_eq!(err, FitError::TooFewPoints { got: 3, min: 4 });

    let err = fit_polynomial(
        &[2.0, 2.0, 2.0],
        &[1.0, 2.0, 0.0],
        PolynomialDegree::Linear,
        RankPolicy::Strict,
    )
    .unwrap_err();
    assert_eq!(
        err,
        FitError::IllConditioned {
            rank: 1,
            required: 2
        }
    );
}

#[test]
fn test_fit_polynomial_minimum_norm() {
    let x = [0.0, 1.0, 2.0];
    let y = [1.0, 2.0, 0.0];

    let solution =
        fit_polynomial(&x, &y, PolynomialDegree::Cubic, RankPolicy::MinimumNorm).unwrap();

    assert_eq!(solution.coefficients.len(), 4);
    assert_eq!(solution.rank, 3);
    for (&xi, &yi) in x.iter().zip(y.iter()) {
        assert_abs_diff_eq!(horner(&solution.coefficients, xi), yi, epsilon = 1e-10);
    }
}

// ============================================================================
// Evaluation Tests
// ============================================================================

#[test]
fn test_horner() {
    // 1 + 2x + 3x^2 at x = 2
    assert_eq!(horner(&[1.0, 2.0, 3.0], 2.0), 17.0);
    assert_eq!(horner(&[4.0], 100.0), 4.0);
    assert_eq!(horner::<f64>(&[], 3.0), 0.0);
}

#[test]
fn test_evaluate_all() {
    let ys = evaluate_all(&[0.0, 0.0, 1.0], &[-2.0, 0.0, 3.0]);

    assert_eq!(ys, vec![4.0, 0.0, 9.0]);
    assert!(evaluate_all(&[1.0, 1.0], &[]).is_empty());
}
