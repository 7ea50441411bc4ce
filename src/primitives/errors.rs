//! Error types for polynomial fitting operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while fitting,
//! scoring or configuring a polynomial least-squares model: invalid input
//! data, rank-deficient systems, and builder misconfiguration.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending values (lengths, ranks, degrees).
//! * **Deferred**: Builder errors are recorded during configuration and surfaced by `build()`.
//! * **No-std**: Uses `alloc` for dynamic messages when `std` is disabled.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Input validation**: Empty arrays, mismatched lengths, non-finite values.
//! 2. **Conditioning**: Too few samples or duplicate abscissae for the requested degree.
//! 3. **Configuration**: Degree, precision and curve resolution bounds.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide recovery strategies (see `RankPolicy`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for polynomial fitting operations.
#[derive(Debug, Clone, PartialEq)]
pub enum FitError {
    /// Input arrays are empty.
    EmptyInput,

    /// `x` and `y` arrays must have the same number of elements.
    MismatchedInputs {
        /// Number of elements in the `x` array.
        x_len: usize,
        /// Number of elements in the `y` array.
        y_len: usize,
    },

    /// Input data contains NaN or infinite values.
    InvalidNumericValue(String),

    /// Fewer samples than coefficients; the system is underdetermined.
    TooFewPoints {
        /// Number of points provided.
        got: usize,
        /// Minimum required points (degree + 1).
        min: usize,
    },

    /// The design matrix is numerically rank deficient.
    IllConditioned {
        /// Numerical rank of the design matrix.
        rank: usize,
        /// Rank needed for a unique solution (degree + 1).
        required: usize,
    },

    /// Requested polynomial degree exceeds the supported maximum.
    InvalidDegree {
        /// The degree provided.
        got: usize,
        /// Largest supported degree.
        max: usize,
    },

    /// Coefficient formatting precision is out of range.
    InvalidPrecision(usize),

    /// Curve resolution is too small to span the sample range.
    InvalidResolution {
        /// The resolution provided.
        got: usize,
        /// Minimum number of curve points.
        min: usize,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for FitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input arrays are empty"),
            Self::MismatchedInputs { x_len, y_len } => {
                write!(f, "Length mismatch: x has {x_len} points, y has {y_len}")
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::TooFewPoints { got, min } => {
                write!(f, "Too few points: got {got}, need at least {min}")
            }
            Self::IllConditioned { rank, required } => {
                write!(
                    f,
                    "Ill-conditioned fit: design matrix has rank {rank}, need {required}"
                )
            }
            Self::InvalidDegree { got, max } => {
                write!(f, "Invalid degree: {got} (must be at most {max})")
            }
            Self::InvalidPrecision(p) => {
                write!(f, "Invalid precision: {p} (must be at most 17)")
            }
            Self::InvalidResolution { got, min } => {
                write!(f, "Invalid resolution: {got} (must be at least {min})")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for FitError {}
