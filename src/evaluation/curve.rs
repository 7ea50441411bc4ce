//! Dense curve sampling for plotting a fitted polynomial.
//!
//! The fitted curve is sampled at evenly spaced abscissae spanning the
//! observed range, so a caller can draw it without knowing anything about
//! polynomials. Endpoints coincide exactly with the sample minimum and
//! maximum.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::polynomial::evaluate_all;
use crate::math::domain::extent;

/// `count` evenly spaced values from `lo` to `hi` inclusive.
pub fn linspace<T: Float>(lo: T, hi: T, count: usize) -> Vec<T> {
    match count {
        0 => Vec::new(),
        1 => vec![lo],
        _ => {
            let last = count - 1;
            let step = (hi - lo) / T::from(last).unwrap_or(T::one());
            let mut xs: Vec<T> = (0..last)
                .map(|i| lo + step * T::from(i).unwrap_or(T::zero()))
                .collect();
            xs.push(hi);
            xs
        }
    }
}

/// Sample the polynomial over the extent of `x_samples`.
///
/// Returns the abscissae and the polynomial values at them.
pub fn sample_curve<T: Float>(
    coefficients: &[T],
    x_samples: &[T],
    resolution: usize,
) -> (Vec<T>, Vec<T>) {
    let (lo, hi) = extent(x_samples);
    let xs = linspace(lo, hi, resolution);
    let ys = evaluate_all(coefficients, &xs);
    (xs, ys)
}
