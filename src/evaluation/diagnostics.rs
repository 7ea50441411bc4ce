//! Diagnostic metrics for polynomial fit quality assessment.
//!
//! ## Purpose
//!
//! This module computes goodness-of-fit metrics for a fitted polynomial
//! against observed samples: the coefficient of determination and the usual
//! residual error summaries.
//!
//! ## Design notes
//!
//! * **Residual-based**: Metrics are computed from observed values and the
//!   model's predictions at the same abscissae.
//! * **Two-pass**: The mean is computed first, then SS_tot and SS_res in one
//!   fold, avoiding the cancellation of the `Σy² - (Σy)²/n` form.
//! * **Generics**: All computations are generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **R²**: `1 - SS_res / SS_tot`.
//! * **Degenerate variance**: when every observation is equal, SS_tot is
//!   zero and R² is defined by a sentinel instead of a division. Any spread
//!   at all, however small against the mean, gives an ordinary R².
//!
//! ## Invariants
//!
//! * RMSE, MAE, SS_res and SS_tot are non-negative.
//! * R² <= 1 up to rounding; it is negative only for models scored against
//!   data they were not fit to.
//!
//! ## Non-goals
//!
//! * This module does not perform the fit.
//! * This module does not provide p-values or formal hypothesis tests.

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::math::domain::extent;

// ============================================================================
// Diagnostics Structure
// ============================================================================

/// Diagnostic metrics for assessing polynomial fit quality.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Diagnostics<T> {
    /// Coefficient of determination (R²).
    pub r_squared: T,

    /// Root Mean Squared Error (RMSE).
    pub rmse: T,

    /// Mean Absolute Error (MAE).
    pub mae: T,

    /// Residual sum of squares.
    pub ss_res: T,

    /// Total sum of squares about the mean of y.
    pub ss_tot: T,

    /// True when the observations have no variance and R² is a sentinel.
    pub degenerate_variance: bool,
}

impl<T: Float> Diagnostics<T> {
    // ========================================================================
    // Constants
    // ========================================================================

    /// Relative threshold (against Σy²) below which the residual sum of
    /// squares of constant observations counts as a perfect fit.
    const PERFECT_FIT_TOL: f64 = 1e-12;

    // ========================================================================
    // Main Computation
    // ========================================================================

    /// Compute diagnostics from observations and predictions.
    ///
    /// Both slices must be non-empty and of equal length.
    pub fn compute(y: &[T], y_hat: &[T]) -> Self {
        let n_t = T::from(y.len()).unwrap_or(T::one());

        let mean = y.iter().copied().fold(T::zero(), |acc, v| acc + v) / n_t;
        let sum_y_sq = y.iter().fold(T::zero(), |acc, &v| acc + v * v);

        let (ss_tot, ss_res, sum_abs) = y.iter().zip(y_hat.iter()).fold(
            (T::zero(), T::zero(), T::zero()),
            |(tot, res, abs), (&yi, &yh)| {
                let deviation = yi - mean;
                let residual = yi - yh;
                (
                    tot + deviation * deviation,
                    res + residual * residual,
                    abs + residual.abs(),
                )
            },
        );

        let (lo, hi) = extent(y);
        let degenerate_variance = lo == hi || ss_tot == T::zero();

        let r_squared = if degenerate_variance {
            // All y values are identical
            let tol = T::from(Self::PERFECT_FIT_TOL).unwrap_or(T::epsilon()) * sum_y_sq;
            let sentinel = if ss_res == T::zero() || ss_res <= tol {
                T::one() // Perfect fit
            } else {
                T::zero() // No variance to explain
            };
            log::debug!(
                "zero total variance in {} observations; R² reported as {}",
                y.len(),
                sentinel.to_f64().unwrap_or(f64::NAN)
            );
            sentinel
        } else {
            T::one() - ss_res / ss_tot
        };

        Diagnostics {
            r_squared,
            rmse: (ss_res / n_t).sqrt(),
            mae: sum_abs / n_t,
            ss_res,
            ss_tot,
            degenerate_variance,
        }
    }

    /// Same metrics with R² clamped into `[0, 1]`.
    pub fn clamped(self) -> Self {
        Self {
            r_squared: self.r_squared.max(T::zero()).min(T::one()),
            ..self
        }
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for Diagnostics<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Fit Diagnostics:")?;
        writeln!(f, "  R²:      {:.6}", self.r_squared)?;
        writeln!(f, "  RMSE:    {:.6}", self.rmse)?;
        writeln!(f, "  MAE:     {:.6}", self.mae)?;
        writeln!(f, "  SS_res:  {:.6}", self.ss_res)?;
        writeln!(f, "  SS_tot:  {:.6}", self.ss_tot)?;
        if self.degenerate_variance {
            writeln!(f, "  (zero variance in y; R² is a sentinel)")?;
        }
        Ok(())
    }
}
