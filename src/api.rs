//! High-level API for polynomial least-squares fitting.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder for configuring the fit and a built [`PolyFitter`] that
//! fits, scores, samples and formats polynomial models.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are validated when `.build()` is called.
//! * **Stateless**: The fitter holds configuration only; models are owned values
//!   returned to the caller.
//! * **Type-Safe**: Operations are generic over `f32` / `f64`.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`PolyFitBuilder`] via `PolyFit::new()`.
//! 2. Chain configuration methods (`.degree()`, `.rank_policy()`, etc.).
//! 3. Call `.build()` to get a [`PolyFitter`].

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::string::String;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::engine::executor::{FitConfig, FitExecutor};
use crate::engine::validator::Validator;
use crate::evaluation::curve::sample_curve;

// Publicly re-exported types
pub use crate::algorithms::regression::{PolynomialDegree, RankPolicy};
pub use crate::engine::output::{FitCurve, PolynomialModel};
pub use crate::evaluation::diagnostics::Diagnostics;
pub use crate::evaluation::format::CoefficientFormat;
pub use crate::math::linalg::FloatLinalg;
pub use crate::primitives::errors::FitError;

// ============================================================================
// Defaults
// ============================================================================

/// Digits after the decimal point in formatted coefficients.
pub const DEFAULT_PRECISION: usize = 4;

/// Number of points in a sampled curve.
pub const DEFAULT_RESOLUTION: usize = 100;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a polynomial fitter.
#[derive(Debug, Clone, Default)]
pub struct PolyFitBuilder {
    /// Polynomial degree (default: quadratic).
    pub degree: Option<PolynomialDegree>,

    /// Handling of underdetermined or rank-deficient systems (default: strict).
    pub rank_policy: Option<RankPolicy>,

    /// Number style of formatted coefficients (default: scientific).
    pub coefficient_format: Option<CoefficientFormat>,

    /// Digits after the decimal point of formatted coefficients (default: 4).
    pub precision: Option<usize>,

    /// Number of points of sampled curves (default: 100).
    pub resolution: Option<usize>,

    /// Clamp R² into [0, 1] (default: false).
    pub clamp_r_squared: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl PolyFitBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the polynomial degree (`2`, `Cubic`, ...).
    pub fn degree<D: Into<PolynomialDegree>>(mut self, degree: D) -> Self {
        if self.degree.is_some() {
            self.duplicate_param = Some("degree");
        }
        // Normalize so Higher(2) and Quadratic compare equal downstream.
        self.degree = Some(PolynomialDegree::from(degree.into().value()));
        self
    }

    /// Set the policy for systems without a unique solution.
    pub fn rank_policy(mut self, policy: RankPolicy) -> Self {
        if self.rank_policy.is_some() {
            self.duplicate_param = Some("rank_policy");
        }
        self.rank_policy = Some(policy);
        self
    }

    /// Set the number style used by `format_coefficients`.
    pub fn coefficient_format(mut self, format: CoefficientFormat) -> Self {
        if self.coefficient_format.is_some() {
            self.duplicate_param = Some("coefficient_format");
        }
        self.coefficient_format = Some(format);
        self
    }

    /// Set the digits after the decimal point used by `format_coefficients`.
    pub fn precision(mut self, precision: usize) -> Self {
        if self.precision.is_some() {
            self.duplicate_param = Some("precision");
        }
        self.precision = Some(precision);
        self
    }

    /// Set the number of points of curves returned by `curve`.
    pub fn resolution(mut self, resolution: usize) -> Self {
        if self.resolution.is_some() {
            self.duplicate_param = Some("resolution");
        }
        self.resolution = Some(resolution);
        self
    }

    /// Clamp reported R² into [0, 1].
    pub fn clamp_r_squared(mut self, clamp: bool) -> Self {
        if self.clamp_r_squared.is_some() {
            self.duplicate_param = Some("clamp_r_squared");
        }
        self.clamp_r_squared = Some(clamp);
        self
    }

    /// Validate the configuration and build the fitter.
    pub fn build(self) -> Result<PolyFitter, FitError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let degree = self.degree.unwrap_or_default();
        Validator::validate_degree(degree.value())?;

        let precision = self.precision.unwrap_or(DEFAULT_PRECISION);
        Validator::validate_precision(precision)?;

        let resolution = self.resolution.unwrap_or(DEFAULT_RESOLUTION);
        Validator::validate_resolution(resolution)?;

        let config = FitConfig {
            polynomial_degree: degree,
            rank_policy: self.rank_policy.unwrap_or_default(),
            clamp_r_squared: self.clamp_r_squared.unwrap_or(false),
        };

        Ok(PolyFitter {
            executor: FitExecutor::from_config(config),
            coefficient_format: self.coefficient_format.unwrap_or_default(),
            precision,
            resolution,
        })
    }
}

// ============================================================================
// Fitter
// ============================================================================

/// Configured polynomial fitter.
///
/// Holds no per-fit state: every method is a pure function of its
/// arguments and the configuration, so one fitter can serve any number of
/// independent sample sets, from any number of threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolyFitter {
    executor: FitExecutor,
    coefficient_format: CoefficientFormat,
    precision: usize,
    resolution: usize,
}

impl Default for PolyFitter {
    fn default() -> Self {
        Self {
            executor: FitExecutor::default(),
            coefficient_format: CoefficientFormat::default(),
            precision: DEFAULT_PRECISION,
            resolution: DEFAULT_RESOLUTION,
        }
    }
}

impl PolyFitter {
    /// Configured polynomial degree.
    pub fn degree(&self) -> PolynomialDegree {
        self.executor.config().polynomial_degree
    }

    /// Configured rank policy.
    pub fn rank_policy(&self) -> RankPolicy {
        self.executor.config().rank_policy
    }

    /// Configured curve resolution.
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Configured formatting precision.
    pub fn precision(&self) -> usize {
        self.precision
    }

    /// Whether reported R² is clamped into [0, 1].
    pub fn clamp_r_squared(&self) -> bool {
        self.executor.config().clamp_r_squared
    }

    /// Fit the configured polynomial to `(x, y)` by least squares.
    pub fn fit<T: FloatLinalg>(&self, x: &[T], y: &[T]) -> Result<PolynomialModel<T>, FitError> {
        self.executor.fit(x, y)
    }

    /// Evaluate `model` at each point of `xs`.
    pub fn evaluate<T: FloatLinalg>(&self, model: &PolynomialModel<T>, xs: &[T]) -> Vec<T> {
        model.evaluate(xs)
    }

    /// Coefficient of determination of `model` on `(x, y)`.
    ///
    /// Zero-variance observations yield 1 when the model reproduces them and
    /// 0 otherwise.
    pub fn coefficient_of_determination<T: FloatLinalg>(
        &self,
        model: &PolynomialModel<T>,
        x: &[T],
        y: &[T],
    ) -> Result<T, FitError> {
        Ok(self.executor.score(model, x, y)?.r_squared)
    }

    /// Full goodness-of-fit diagnostics of `model` on `(x, y)`.
    pub fn diagnostics<T: FloatLinalg>(
        &self,
        model: &PolynomialModel<T>,
        x: &[T],
        y: &[T],
    ) -> Result<Diagnostics<T>, FitError> {
        self.executor.score(model, x, y)
    }

    /// Render the coefficients, ascending power order, with the configured style.
    pub fn format_coefficients<T: FloatLinalg>(&self, model: &PolynomialModel<T>) -> String {
        self.coefficient_format
            .render(model.coefficients(), self.precision)
    }

    /// Dense curve over the range of `x` plus the model's R² on `(x, y)`.
    pub fn curve<T: FloatLinalg>(
        &self,
        model: &PolynomialModel<T>,
        x: &[T],
        y: &[T],
    ) -> Result<FitCurve<T>, FitError> {
        let r_squared = self.coefficient_of_determination(model, x, y)?;
        let (xs, ys) = sample_curve(model.coefficients(), x, self.resolution);
        Ok(FitCurve {
            x: xs,
            y: ys,
            r_squared,
        })
    }
}

// ============================================================================
// One-shot Entry Point
// ============================================================================

/// Fit a polynomial of `degree` to `(x, y)` with default settings.
pub fn fit<T: FloatLinalg, D: Into<PolynomialDegree>>(
    x: &[T],
    y: &[T],
    degree: D,
) -> Result<PolynomialModel<T>, FitError> {
    PolyFitBuilder::new().degree(degree).build()?.fit(x, y)
}
