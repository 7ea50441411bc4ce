//! Output types for polynomial fitting operations.
//!
//! ## Purpose
//!
//! This module defines the fitted model and the derived curve returned to
//! callers: `PolynomialModel` (coefficients plus conditioning metadata) and
//! `FitCurve` (dense plot samples plus R²).
//!
//! ## Design notes
//!
//! * **Immutable**: A model's fields are private; a re-fit produces a new model.
//! * **Owned**: Results own their vectors and borrow nothing from the inputs.
//! * **Generics**: Results are generic over `Float` types.
//!
//! ## Invariants
//!
//! * `coefficients().len() == degree().value() + 1`.
//! * `rank() <= coefficients().len()`; equality means a unique solution.
//! * `FitCurve::x` and `FitCurve::y` have the same length.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations beyond evaluation.
//! * This module does not provide serialization logic.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::algorithms::polynomial::{evaluate_all, horner};
use crate::algorithms::regression::PolynomialDegree;
use crate::evaluation::format::CoefficientFormat;

// ============================================================================
// Polynomial Model
// ============================================================================

/// Fitted polynomial `c0 + c1 x + ... + cd x^d`.
#[derive(Debug, Clone, PartialEq)]
pub struct PolynomialModel<T> {
    coefficients: Vec<T>,
    degree: PolynomialDegree,
    rank: usize,
    n_samples: usize,
}

impl<T: Float> PolynomialModel<T> {
    /// Assemble a model from a solver result.
    pub(crate) fn new(coefficients: Vec<T>, rank: usize, n_samples: usize) -> Self {
        let degree = PolynomialDegree::from(coefficients.len().saturating_sub(1));
        Self {
            coefficients,
            degree,
            rank,
            n_samples,
        }
    }

    /// Wrap known coefficients (ascending power order) as a model.
    ///
    /// An empty slice is the zero polynomial. The model is marked full rank
    /// with no samples behind it.
    pub fn from_coefficients(coefficients: &[T]) -> Self {
        let coefficients = if coefficients.is_empty() {
            vec![T::zero()]
        } else {
            coefficients.to_vec()
        };
        let rank = coefficients.len();
        Self::new(coefficients, rank, 0)
    }

    /// Coefficients in ascending power order (constant term first).
    #[inline]
    pub fn coefficients(&self) -> &[T] {
        &self.coefficients
    }

    /// Consume the model, returning its coefficients.
    pub fn into_coefficients(self) -> Vec<T> {
        self.coefficients
    }

    /// Polynomial degree.
    #[inline]
    pub fn degree(&self) -> PolynomialDegree {
        self.degree
    }

    /// Numerical rank of the design matrix the model was solved from.
    #[inline]
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// Number of samples the model was fitted to.
    #[inline]
    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    /// Whether the samples determined the coefficients uniquely.
    #[inline]
    pub fn is_full_rank(&self) -> bool {
        self.rank == self.coefficients.len()
    }

    /// Evaluate the polynomial at one point.
    #[inline]
    pub fn evaluate_at(&self, x: T) -> T {
        horner(&self.coefficients, x)
    }

    /// Evaluate the polynomial at each point of `xs`.
    pub fn evaluate(&self, xs: &[T]) -> Vec<T> {
        evaluate_all(&self.coefficients, xs)
    }
}

impl<T: Float> Display for PolynomialModel<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let precision = f.precision().unwrap_or(4);
        f.write_str(&CoefficientFormat::Scientific.render(&self.coefficients, precision))
    }
}

// ============================================================================
// Fit Curve
// ============================================================================

/// Dense samples of a fitted polynomial for plotting, with its R².
#[derive(Debug, Clone, PartialEq)]
pub struct FitCurve<T> {
    /// Evenly spaced abscissae from the sample minimum to the sample maximum.
    pub x: Vec<T>,

    /// Polynomial values at `x`.
    pub y: Vec<T>,

    /// Coefficient of determination of the model on the fitted samples.
    pub r_squared: T,
}

impl<T: Float> FitCurve<T> {
    /// Number of curve points.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Whether the curve has no points.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Iterate `(x, y)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (T, T)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}
