//! Polynomial evaluation.
//!
//! Horner's scheme over ascending-order coefficients: one multiply and one
//! add per coefficient, no explicit powers.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

/// Evaluate `c0 + c1 x + ... + cd x^d` at a single point.
///
/// An empty coefficient slice is the zero polynomial.
#[inline]
pub fn horner<T: Float>(coefficients: &[T], x: T) -> T {
    coefficients
        .iter()
        .rev()
        .fold(T::zero(), |acc, &c| acc * x + c)
}

/// Evaluate the polynomial at every point of `xs`, preserving order.
pub fn evaluate_all<T: Float>(coefficients: &[T], xs: &[T]) -> Vec<T> {
    xs.iter().map(|&x| horner(coefficients, x)).collect()
}
