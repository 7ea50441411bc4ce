//! Stable textual rendering of polynomial coefficients.
//!
//! ## Purpose
//!
//! Coefficients are shown to users (text fields, reports, logs) and compared
//! in tests, so their rendering must not depend on anything but the values
//! and the chosen format.
//!
//! ## Invariants
//!
//! * Coefficients appear in ascending power order, joined by `", "`.
//! * Every coefficient uses the same precision.
//! * Zero never renders with a minus sign.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, string::String, vec::Vec};
#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

// External dependencies
use num_traits::Float;

/// Separator placed between rendered coefficients.
pub const SEPARATOR: &str = ", ";

/// Number style for rendered coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoefficientFormat {
    /// Scientific notation, e.g. `-1.2346e-5` (default).
    #[default]
    Scientific,

    /// Fixed decimal places, e.g. `-0.0000`.
    Fixed,
}

impl CoefficientFormat {
    /// Render a single value with `precision` digits after the decimal point.
    pub fn render_value<T: Float>(&self, value: T, precision: usize) -> String {
        let v = value.to_f64().unwrap_or(f64::NAN);
        // Collapse -0.0 so sign only reflects non-zero values.
        let v = if v == 0.0 { 0.0 } else { v };

        let text = match self {
            CoefficientFormat::Scientific => format!("{:.*e}", precision, v),
            CoefficientFormat::Fixed => format!("{:.*}", precision, v),
        };

        strip_negative_zero(text)
    }

    /// Render all coefficients, ascending power order.
    pub fn render<T: Float>(&self, coefficients: &[T], precision: usize) -> String {
        coefficients
            .iter()
            .map(|&c| self.render_value(c, precision))
            .collect::<Vec<_>>()
            .join(SEPARATOR)
    }
}

/// Drop the sign of values that rounded to zero (`-0.0000` → `0.0000`).
fn strip_negative_zero(text: String) -> String {
    match text.strip_prefix('-') {
        Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => String::from(rest),
        _ => text,
    }
}
