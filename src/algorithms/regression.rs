//! Polynomial least-squares regression.
//!
//! ## Purpose
//!
//! This module provides the core fitting algorithm: ordinary least squares
//! for a single-variable polynomial `c0 + c1 x + ... + cd x^d`.
//!
//! ## Design notes
//!
//! * **Conditioning**: Abscissae are mapped onto `[-1, 1]` before the
//!   Vandermonde matrix is built; coefficients are converted back afterwards.
//! * **Algorithm**: Householder QR on the rectangular design matrix.
//! * **Fallback**: Rank-deficient systems follow a [`RankPolicy`].
//! * **Generics**: Generic over `FloatLinalg` types.
//!
//! ## Key concepts
//!
//! * **Vandermonde Matrix**: Row `i` is `[1, t_i, t_i^2, ..., t_i^d]`.
//! * **Rank**: Number of numerically independent design columns.
//!
//! ## Invariants
//!
//! * Returned coefficients are in ascending power order, length `degree + 1`.
//! * Identical inputs produce identical coefficients.
//!
//! ## Non-goals
//!
//! * This module does not validate finiteness or lengths (handled by engine).
//! * This module does not compute goodness-of-fit metrics.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::math::domain::AffineDomain;
use crate::math::linalg::{FloatLinalg, LeastSquaresSolution, QrOutcome};
use crate::primitives::errors::FitError;

// ============================================================================
// Polynomial Degree
// ============================================================================

/// Polynomial degree of the fitted model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PolynomialDegree {
    /// Degree 0: constant (mean of y)
    Constant,

    /// Degree 1: straight line
    Linear,

    /// Degree 2: quadratic (default; pump head curves)
    #[default]
    Quadratic,

    /// Degree 3: cubic (pump efficiency curves)
    Cubic,

    /// Degree 4: quartic
    Quartic,

    /// Any degree above four.
    Higher(usize),
}

impl PolynomialDegree {
    /// Get the numeric degree value.
    #[inline]
    pub const fn value(&self) -> usize {
        match self {
            PolynomialDegree::Constant => 0,
            PolynomialDegree::Linear => 1,
            PolynomialDegree::Quadratic => 2,
            PolynomialDegree::Cubic => 3,
            PolynomialDegree::Quartic => 4,
            PolynomialDegree::Higher(d) => *d,
        }
    }

    /// Number of coefficients of a polynomial of this degree.
    #[inline]
    pub const fn num_coefficients(&self) -> usize {
        self.value() + 1
    }

    /// Fill `terms` with the powers `[1, t, t^2, ..., t^d]`.
    pub fn build_terms<T: FloatLinalg>(&self, t: T, terms: &mut [T]) -> usize {
        let count = self.num_coefficients();
        terms[0] = T::one();
        for k in 1..count {
            terms[k] = terms[k - 1] * t;
        }
        count
    }
}

impl From<usize> for PolynomialDegree {
    fn from(degree: usize) -> Self {
        match degree {
            0 => PolynomialDegree::Constant,
            1 => PolynomialDegree::Linear,
            2 => PolynomialDegree::Quadratic,
            3 => PolynomialDegree::Cubic,
            4 => PolynomialDegree::Quartic,
            d => PolynomialDegree::Higher(d),
        }
    }
}

// ============================================================================
// Rank Policy
// ============================================================================

/// Policy for systems that do not determine a unique polynomial.
///
/// Applies when there are fewer samples than coefficients, or when repeated
/// abscissae leave fewer distinct x values than coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RankPolicy {
    /// Return `TooFewPoints` / `IllConditioned` (default).
    #[default]
    Strict,

    /// Return the minimum-norm least-squares solution (SVD pseudo-inverse),
    /// flagged by a model rank below `degree + 1`.
    MinimumNorm,
}

// ============================================================================
// Fitting
// ============================================================================

/// Relative tolerance multiplier for rank decisions, in units of machine epsilon.
const RANK_TOLERANCE_FACTOR: f64 = 100.0;

/// Relative tolerance used when judging the numerical rank of a design matrix.
pub fn rank_tolerance<T: FloatLinalg>(rows: usize, cols: usize) -> T {
    let size = T::from(rows.max(cols)).unwrap_or(T::one());
    T::epsilon() * size * T::from(RANK_TOLERANCE_FACTOR).unwrap_or(T::one())
}

/// Build the row-major Vandermonde matrix of the mapped abscissae.
pub fn build_design_matrix<T: FloatLinalg>(
    x: &[T],
    domain: &AffineDomain<T>,
    degree: PolynomialDegree,
) -> Vec<T> {
    let cols = degree.num_coefficients();
    let mut design = vec![T::zero(); x.len() * cols];
    for (row, &xi) in design.chunks_exact_mut(cols).zip(x.iter()) {
        degree.build_terms(domain.map(xi), row);
    }
    design
}

/// Fit a polynomial of the given degree to `(x, y)` by least squares.
///
/// Expects validated, equal-length, finite inputs. The returned rank equals
/// `degree + 1` for a unique solution; a smaller rank is only possible under
/// [`RankPolicy::MinimumNorm`].
pub fn fit_polynomial<T: FloatLinalg>(
    x: &[T],
    y: &[T],
    degree: PolynomialDegree,
    policy: RankPolicy,
) -> Result<LeastSquaresSolution<T>, FitError> {
    let rows = x.len();
    let cols = degree.num_coefficients();

    let domain = AffineDomain::from_samples(x);
    let design = build_design_matrix(x, &domain, degree);
    let tol = rank_tolerance::<T>(rows, cols);

    let mapped = if rows >= cols {
        match T::qr_least_squares(&design, y, rows, cols, tol) {
            QrOutcome::Solved(coefficients) => LeastSquaresSolution {
                coefficients,
                rank: cols,
            },
            QrOutcome::RankDeficient { rank } => match policy {
                RankPolicy::Strict => {
                    return Err(FitError::IllConditioned {
                        rank,
                        required: cols,
                    });
                }
                RankPolicy::MinimumNorm => minimum_norm(&design, y, rows, cols, tol)?,
            },
        }
    } else {
        match policy {
            RankPolicy::Strict => {
                return Err(FitError::TooFewPoints {
                    got: rows,
                    min: cols,
                });
            }
            RankPolicy::MinimumNorm => minimum_norm(&design, y, rows, cols, tol)?,
        }
    };

    Ok(LeastSquaresSolution {
        coefficients: domain.unmap_coefficients(&mapped.coefficients),
        rank: mapped.rank,
    })
}

fn minimum_norm<T: FloatLinalg>(
    design: &[T],
    y: &[T],
    rows: usize,
    cols: usize,
    tol: T,
) -> Result<LeastSquaresSolution<T>, FitError> {
    T::min_norm_least_squares(design, y, rows, cols, tol).ok_or(FitError::IllConditioned {
        rank: 0,
        required: cols,
    })
}
