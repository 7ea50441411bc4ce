//! Input validation for fitting configuration and data.
//!
//! ## Purpose
//!
//! This module provides validation functions for fitter configuration
//! parameters and sample data. It checks requirements such as input
//! lengths, finite values, and parameter bounds.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter input data.
//! * This module does not decide rank policy (handled by the regression layer).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::FitError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for fitter configuration and input data.
///
/// All methods return `Result<(), FitError>` and fail fast upon identifying
/// the first violation.
pub struct Validator;

impl Validator {
    /// Largest polynomial degree accepted by the builder.
    pub const MAX_DEGREE: usize = 12;

    /// Largest number of digits after the decimal point in formatted coefficients.
    pub const MAX_PRECISION: usize = 17;

    /// Fewest points a curve may have (both endpoints).
    pub const MIN_RESOLUTION: usize = 2;

    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate paired sample arrays.
    pub fn validate_inputs<T: Float>(x: &[T], y: &[T]) -> Result<(), FitError> {
        // Check 1: Non-empty arrays
        if x.is_empty() || y.is_empty() {
            return Err(FitError::EmptyInput);
        }

        // Check 2: Matching lengths
        if x.len() != y.len() {
            return Err(FitError::MismatchedInputs {
                x_len: x.len(),
                y_len: y.len(),
            });
        }

        // Check 3: All values finite
        Self::validate_finite(x, "x")?;
        Self::validate_finite(y, "y")
    }

    /// Validate that every element of `values` is finite.
    pub fn validate_finite<T: Float>(values: &[T], name: &str) -> Result<(), FitError> {
        for (i, &val) in values.iter().enumerate() {
            if !val.is_finite() {
                return Err(FitError::InvalidNumericValue(format!(
                    "{}[{}]={}",
                    name,
                    i,
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the requested polynomial degree.
    pub fn validate_degree(degree: usize) -> Result<(), FitError> {
        if degree > Self::MAX_DEGREE {
            return Err(FitError::InvalidDegree {
                got: degree,
                max: Self::MAX_DEGREE,
            });
        }
        Ok(())
    }

    /// Validate the coefficient formatting precision.
    pub fn validate_precision(precision: usize) -> Result<(), FitError> {
        if precision > Self::MAX_PRECISION {
            return Err(FitError::InvalidPrecision(precision));
        }
        Ok(())
    }

    /// Validate the number of points of a sampled curve.
    pub fn validate_resolution(resolution: usize) -> Result<(), FitError> {
        if resolution < Self::MIN_RESOLUTION {
            return Err(FitError::InvalidResolution {
                got: resolution,
                min: Self::MIN_RESOLUTION,
            });
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), FitError> {
        if let Some(param) = duplicate_param {
            return Err(FitError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
