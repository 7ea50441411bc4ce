#![cfg(feature = "dev")]
//! Tests for the affine mapping of abscissae onto [-1, 1].

use approx::assert_abs_diff_eq;

use pumpfit::internals::algorithms::polynomial::horner;
use pumpfit::internals::math::domain::{extent, AffineDomain};

// ============================================================================
// Mapping Tests
// ============================================================================

#[test]
fn test_domain_from_samples() {
    let domain = AffineDomain::from_samples(&[4.0, 0.0, 10.0, 7.0]);

    assert_eq!(domain.shift, 5.0);
    assert_eq!(domain.scale, 5.0);
    assert_eq!(domain.map(0.0), -1.0);
    assert_eq!(domain.map(10.0), 1.0);
    assert_eq!(domain.map(5.0), 0.0);
}

/// A single distinct abscissa keeps unit scale.
#[test]
fn test_domain_degenerate_range() {
    let domain = AffineDomain::from_samples(&[3.0, 3.0, 3.0]);

    assert_eq!(domain.shift, 3.0);
    assert_eq!(domain.scale, 1.0);
    assert_eq!(domain.map(3.0), 0.0);
}

#[test]
fn test_extent() {
    assert_eq!(extent(&[2.0, -1.0, 5.0, 0.5]), (-1.0, 5.0));
    assert_eq!(extent(&[7.0]), (7.0, 7.0));
    assert_eq!(extent::<f64>(&[]), (0.0, 0.0));
}

// ============================================================================
// Coefficient Conversion Tests
// ============================================================================

#[test]
fn test_unmap_linear() {
    let domain = AffineDomain::from_samples(&[0.0, 10.0]);

    // 1 + t with t = (x - 5) / 5  =>  0 + 0.2 x
    let c = domain.unmap_coefficients(&[1.0, 1.0]);

    assert_eq!(c.len(), 2);
    assert_abs_diff_eq!(c[0], 0.0, epsilon = 1e-15);
    assert_abs_diff_eq!(c[1], 0.2, epsilon = 1e-15);
}

#[test]
fn test_unmap_quadratic() {
    let domain = AffineDomain::from_samples(&[0.0, 10.0]);

    // t^2 = (x^2 - 10x + 25) / 25
    let c = domain.unmap_coefficients(&[0.0, 0.0, 1.0]);

    assert_abs_diff_eq!(c[0], 1.0, epsilon = 1e-14);
    assert_abs_diff_eq!(c[1], -0.4, epsilon = 1e-14);
    assert_abs_diff_eq!(c[2], 0.04, epsilon = 1e-15);
}

/// The converted polynomial agrees with the mapped one at every point.
#[test]
fn test_unmap_preserves_values() {
    let domain = AffineDomain::from_samples(&[-3.0, 9.0]);
    let mapped = [0.5, -1.25, 2.0, 0.75];
    let unmapped = domain.unmap_coefficients(&mapped);

    for &x in &[-3.0, -1.0, 0.0, 2.5, 6.0, 9.0] {
        assert_abs_diff_eq!(
            horner(&unmapped, x),
            horner(&mapped, domain.map(x)),
            epsilon = 1e-12
        );
    }
}

#[test]
fn test_unmap_empty_and_constant() {
    let domain = AffineDomain::from_samples(&[1.0, 2.0]);

    assert!(domain.unmap_coefficients(&[]).is_empty());
    assert_eq!(domain.unmap_coefficients(&[4.0]), vec![4.0]);
}
