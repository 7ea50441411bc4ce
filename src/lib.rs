//! # pumpfit: Least-Squares Polynomial Curves for Pump Performance Data
//!
//! Fits polynomial curves to tabulated pump performance samples (flow, head,
//! efficiency) by ordinary least squares, and reports the coefficients, dense
//! curve samples for plotting, and the coefficient of determination (R²).
//!
//! ## What does it compute?
//!
//! Given samples `(x_i, y_i)` and a degree `d`, the fitter finds coefficients
//! `c = [c0, c1, ..., cd]` minimizing
//!
//! ```text
//! sum_i (y_i - (c0 + c1 x_i + ... + cd x_i^d))^2
//! ```
//!
//! Coefficients are always in ascending power order (constant term first).
//!
//! **How the fit is computed:**
//!
//! 1. Validate the samples (non-empty, equal lengths, finite values).
//! 2. Map the abscissae onto `[-1, 1]` so the Vandermonde columns have
//!    comparable magnitudes.
//! 3. Solve the rectangular system with Householder QR.
//! 4. Judge the numerical rank from the diagonal of `R`; rank-deficient systems
//!    follow the configured [`RankPolicy`](prelude::RankPolicy).
//! 5. Convert the coefficients back to powers of the original variable.
//!
//! ## Quick Start
//!
//! ```rust
//! use pumpfit::prelude::*;
//!
//! let x: Vec<f64> = vec![0.0, 1.0, 2.0, 3.0, 4.0];
//! let y: Vec<f64> = vec![1.0, 2.0, 3.0, 4.0, 5.0];
//!
//! let fitter = PolyFit::new().degree(Quadratic).build()?;
//! let model = fitter.fit(&x, &y)?;
//!
//! let c = model.coefficients();
//! assert!((c[0] - 1.0).abs() < 1e-9);
//! assert!((c[1] - 1.0).abs() < 1e-9);
//! assert!(c[2].abs() < 1e-9);
//!
//! let r2 = fitter.coefficient_of_determination(&model, &x, &y)?;
//! assert!((r2 - 1.0).abs() < 1e-12);
//!
//! println!("{}", fitter.format_coefficients(&model));
//! # Result::<(), FitError>::Ok(())
//! ```
//!
//! ## Pump Curves
//!
//! A pump data sheet pairs a head curve (quadratic in flow) with an
//! efficiency curve (cubic in flow). [`PumpCurve`](prelude::PumpCurve) fits
//! both in one call:
//!
//! ```rust
//! use pumpfit::prelude::*;
//!
//! let data = PumpData::<f64>::new("Demo pump", "gpm", "ft")
//!     .with_row(0.0, 120.0, 0.0)
//!     .with_row(100.0, 117.0, 38.0)
//!     .with_row(200.0, 108.0, 62.0)
//!     .with_row(300.0, 93.0, 74.0)
//!     .with_row(400.0, 72.0, 73.0)
//!     .with_row(500.0, 45.0, 58.0);
//!
//! let curve = PumpCurve::fit(&data)?;
//! assert_eq!(curve.head_model().coefficients().len(), 3);
//! assert_eq!(curve.efficiency_model().coefficients().len(), 4);
//! assert!(curve.head_r_squared() > 0.99);
//! # Result::<(), FitError>::Ok(())
//! ```
//!
//! ## Builder Parameters
//!
//! | Parameter              | Default        | Description                                   |
//! |------------------------|----------------|-----------------------------------------------|
//! | `degree`               | `Quadratic`    | Polynomial degree (0..=12)                    |
//! | `rank_policy`          | `Strict`       | Underdetermined / rank-deficient handling     |
//! | `coefficient_format`   | `Scientific`   | Number style of `format_coefficients`         |
//! | `precision`            | `4`            | Digits after the decimal point (0..=17)       |
//! | `resolution`           | `100`          | Points of a sampled curve (>= 2)              |
//! | `clamp_r_squared`      | `false`        | Clamp reported R² into [0, 1]                 |
//!
//! Setting a parameter twice is reported by `build()` as
//! `FitError::DuplicateParameter`.
//!
//! ## Rank-Deficient Systems
//!
//! With fewer samples than coefficients, or with repeated abscissae leaving
//! fewer distinct x values than coefficients, the polynomial is not unique:
//!
//! * `Strict` (default) returns `FitError::TooFewPoints` or
//!   `FitError::IllConditioned`.
//! * `MinimumNorm` returns the SVD pseudo-inverse solution. The model's
//!   `rank()` is then below `degree + 1`, `is_full_rank()` is false, and a
//!   warning is logged.
//!
//! ## Coefficient of Determination
//!
//! `R² = 1 - SS_res / SS_tot`, with predictions taken from the same Horner
//! evaluation as [`PolynomialModel::evaluate`](prelude::PolynomialModel::evaluate).
//! When all observations are equal (`SS_tot = 0`), R² is 1 if the model
//! reproduces them and 0 otherwise; `Diagnostics::degenerate_variance` flags
//! the case. R² is not clamped unless `clamp_r_squared(true)` is set.
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade: `debug` for fit summaries and
//! zero-variance R², `warn` for minimum-norm solutions. Install any logger
//! (e.g. `env_logger`) in the application to see them.
//!
//! ## Feature Flags
//!
//! * `std` (default): standard library support. Without it the crate is
//!   `no_std` + `alloc`, with `libm` math.
//! * `dev`: exposes the layered internals under [`internals`] for tests.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - shared error type.
mod primitives;

// Layer 2: Math - least-squares solvers and domain mapping.
//
// Contains the nalgebra QR / SVD backend and the affine map of the
// abscissae onto [-1, 1].
mod math;

// Layer 3: Algorithms - polynomial regression and evaluation.
//
// Contains the Vandermonde construction, the rank-policy-aware solve, and
// Horner evaluation.
mod algorithms;

// Layer 4: Evaluation - diagnostics, curves and formatting.
//
// Contains R² / RMSE / MAE, dense curve sampling, and coefficient rendering.
mod evaluation;

// Layer 5: Engine - orchestration and validation.
//
// Contains the stateless fit executor, input validation, and result types.
mod engine;

// Layer 6: Adapters - use-case packaging.
//
// Contains the pump curve adapter (head and efficiency vs flow).
mod adapters;

// High-level fluent API.
//
// Provides the `PolyFit` builder and the configured `PolyFitter`.
mod api;

pub use api::fit;

// ============================================================================
// Prelude
// ============================================================================

/// Standard prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use pumpfit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::adapters::pump::{PumpCurve, PumpCurveBuilder, PumpCurveFitter, PumpData};
    pub use crate::api::{
        fit, CoefficientFormat, Diagnostics, FitCurve, FitError, FloatLinalg, PolyFitBuilder as PolyFit,
        PolyFitter, PolynomialDegree,
        PolynomialDegree::{Constant, Cubic, Linear, Quadratic, Quartic},
        PolynomialModel, RankPolicy,
        RankPolicy::{MinimumNorm, Strict},
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal core algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal evaluation and diagnostics.
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    /// Internal adapters.
    pub mod adapters {
        pub use crate::adapters::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
