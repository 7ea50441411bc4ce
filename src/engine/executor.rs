//! Execution engine for polynomial fitting operations.
//!
//! ## Purpose
//!
//! This module orchestrates a single fit: validation, the least-squares
//! solve under the configured rank policy, logging of the outcome, and
//! assembly of the immutable model. It also scores a model against samples.
//!
//! ## Design notes
//!
//! * Stateless: the executor holds configuration only; every call is independent.
//! * Predictions for scoring come from the same Horner evaluation the caller uses.
//! * Generic over `Float` types to support f32 and f64.
//!
//! ## Invariants
//!
//! * A returned model has `degree + 1` coefficients.
//! * A rank-deficient model is only returned under `RankPolicy::MinimumNorm`,
//!   and always with a warning logged.
//!
//! ## Non-goals
//!
//! * This module does not format coefficients or sample curves.

// Internal dependencies
use crate::algorithms::regression::{fit_polynomial, PolynomialDegree, RankPolicy};
use crate::engine::output::PolynomialModel;
use crate::engine::validator::Validator;
use crate::evaluation::diagnostics::Diagnostics;
use crate::math::linalg::FloatLinalg;
use crate::primitives::errors::FitError;

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for fit execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FitConfig {
    /// Polynomial degree of the model.
    pub polynomial_degree: PolynomialDegree,

    /// Handling of underdetermined or rank-deficient systems.
    pub rank_policy: RankPolicy,

    /// Whether R² is clamped into [0, 1].
    pub clamp_r_squared: bool,
}

// ============================================================================
// Executor
// ============================================================================

/// Stateless executor for polynomial fitting operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FitExecutor {
    config: FitConfig,
}

impl FitExecutor {
    /// Create a new executor from a `FitConfig`.
    pub fn from_config(config: FitConfig) -> Self {
        Self { config }
    }

    /// The configuration this executor runs with.
    pub fn config(&self) -> &FitConfig {
        &self.config
    }

    // ========================================================================
    // Fitting
    // ========================================================================

    /// Fit the configured polynomial to `(x, y)`.
    pub fn fit<T: FloatLinalg>(&self, x: &[T], y: &[T]) -> Result<PolynomialModel<T>, FitError> {
        Validator::validate_inputs(x, y)?;

        let degree = self.config.polynomial_degree;
        let solution = fit_polynomial(x, y, degree, self.config.rank_policy)?;

        let required = degree.num_coefficients();
        if solution.rank < required {
            log::warn!(
                "degree {} fit to {} samples is rank deficient (rank {} < {}); returning minimum-norm coefficients",
                degree.value(),
                x.len(),
                solution.rank,
                required
            );
        } else {
            log::debug!(
                "degree {} fit to {} samples (rank {})",
                degree.value(),
                x.len(),
                solution.rank
            );
        }

        Ok(PolynomialModel::new(
            solution.coefficients,
            solution.rank,
            x.len(),
        ))
    }

    // ========================================================================
    // Scoring
    // ========================================================================

    /// Goodness-of-fit diagnostics of `model` on `(x, y)`.
    pub fn score<T: FloatLinalg>(
        &self,
        model: &PolynomialModel<T>,
        x: &[T],
        y: &[T],
    ) -> Result<Diagnostics<T>, FitError> {
        Validator::validate_inputs(x, y)?;

        let y_hat = model.evaluate(x);
        let diagnostics = Diagnostics::compute(y, &y_hat);

        Ok(if self.config.clamp_r_squared {
            diagnostics.clamped()
        } else {
            diagnostics
        })
    }
}
