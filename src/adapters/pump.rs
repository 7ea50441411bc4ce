//! Pump performance curve adapter.
//!
//! ## Purpose
//!
//! This module pairs two polynomial fits over one set of flow samples: head
//! vs flow (quadratic by default) and efficiency vs flow (cubic by default).
//! The result is an owned [`PumpCurve`] carrying both models, their dense
//! plot curves with R², and display-ready coefficient strings.
//!
//! ## Design notes
//!
//! * **Owned**: The caller keeps a `PumpCurve` value; there is no controller
//!   object holding a "current" model.
//! * **Eager**: Curves and strings are produced once at fit time, since every
//!   consumer (text fields, charts, reports) needs all of them.
//! * **Validated**: Column lengths are checked by the fitter (`MismatchedInputs`).
//!
//! ## Non-goals
//!
//! * This module does not parse pump data files.
//! * This module does not render charts.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};
#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

// Internal dependencies
use crate::api::{
    CoefficientFormat, FitCurve, FitError, PolyFitBuilder, PolyFitter, PolynomialDegree,
    PolynomialModel, RankPolicy,
};
use crate::engine::validator::Validator;
use crate::math::linalg::FloatLinalg;

// ============================================================================
// Pump Data
// ============================================================================

/// Tabulated pump performance samples, already parsed into columns.
#[derive(Debug, Clone, PartialEq)]
pub struct PumpData<T> {
    /// Pump name or model designation.
    pub name: String,

    /// Unit label of the flow column (e.g. `gpm`).
    pub flow_units: String,

    /// Unit label of the head column (e.g. `ft`).
    pub head_units: String,

    /// Flow rate samples.
    pub flow: Vec<T>,

    /// Head at each flow sample.
    pub head: Vec<T>,

    /// Efficiency (percent) at each flow sample.
    pub efficiency: Vec<T>,
}

impl<T: FloatLinalg> PumpData<T> {
    /// Create an empty data set with its labels.
    pub fn new(
        name: impl Into<String>,
        flow_units: impl Into<String>,
        head_units: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            flow_units: flow_units.into(),
            head_units: head_units.into(),
            flow: Vec::new(),
            head: Vec::new(),
            efficiency: Vec::new(),
        }
    }

    /// Append one `(flow, head, efficiency)` row.
    pub fn push(&mut self, flow: T, head: T, efficiency: T) {
        self.flow.push(flow);
        self.head.push(head);
        self.efficiency.push(efficiency);
    }

    /// Builder-style variant of [`PumpData::push`].
    pub fn with_row(mut self, flow: T, head: T, efficiency: T) -> Self {
        self.push(flow, head, efficiency);
        self
    }

    /// Number of flow samples.
    pub fn len(&self) -> usize {
        self.flow.len()
    }

    /// Whether there are no samples.
    pub fn is_empty(&self) -> bool {
        self.flow.is_empty()
    }
}

// ============================================================================
// Pump Curve
// ============================================================================

/// Fitted head and efficiency curves of one pump.
#[derive(Debug, Clone, PartialEq)]
pub struct PumpCurve<T> {
    name: String,
    flow_units: String,
    head_units: String,
    head_model: PolynomialModel<T>,
    efficiency_model: PolynomialModel<T>,
    head_curve: FitCurve<T>,
    efficiency_curve: FitCurve<T>,
    head_coefficients: String,
    efficiency_coefficients: String,
}

impl<T: FloatLinalg> PumpCurve<T> {
    /// Fit with default degrees (head quadratic, efficiency cubic).
    pub fn fit(data: &PumpData<T>) -> Result<Self, FitError> {
        PumpCurveBuilder::new().build()?.fit(data)
    }

    /// Pump name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Flow unit label.
    pub fn flow_units(&self) -> &str {
        &self.flow_units
    }

    /// Head unit label.
    pub fn head_units(&self) -> &str {
        &self.head_units
    }

    /// Head vs flow model.
    pub fn head_model(&self) -> &PolynomialModel<T> {
        &self.head_model
    }

    /// Efficiency vs flow model.
    pub fn efficiency_model(&self) -> &PolynomialModel<T> {
        &self.efficiency_model
    }

    /// Dense head curve with its R².
    pub fn head_curve(&self) -> &FitCurve<T> {
        &self.head_curve
    }

    /// Dense efficiency curve with its R².
    pub fn efficiency_curve(&self) -> &FitCurve<T> {
        &self.efficiency_curve
    }

    /// Formatted head coefficients.
    pub fn head_coefficients(&self) -> &str {
        &self.head_coefficients
    }

    /// Formatted efficiency coefficients.
    pub fn efficiency_coefficients(&self) -> &str {
        &self.efficiency_coefficients
    }

    /// R² of the head fit.
    pub fn head_r_squared(&self) -> T {
        self.head_curve.r_squared
    }

    /// R² of the efficiency fit.
    pub fn efficiency_r_squared(&self) -> T {
        self.efficiency_curve.r_squared
    }

    /// Predicted `(head, efficiency)` at a flow rate.
    pub fn operating_point(&self, flow: T) -> (T, T) {
        (
            self.head_model.evaluate_at(flow),
            self.efficiency_model.evaluate_at(flow),
        )
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for a pump curve fitter.
#[derive(Debug, Clone, Default)]
pub struct PumpCurveBuilder {
    /// Degree of the head fit (default: quadratic).
    pub head_degree: Option<PolynomialDegree>,

    /// Degree of the efficiency fit (default: cubic).
    pub efficiency_degree: Option<PolynomialDegree>,

    // Settings shared by both fits; the degree is set per fit in `build()`.
    shared: PolyFitBuilder,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl PumpCurveBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the degree of the head vs flow fit.
    pub fn head_degree<D: Into<PolynomialDegree>>(mut self, degree: D) -> Self {
        if self.head_degree.is_some() {
            self.duplicate_param = Some("head_degree");
        }
        self.head_degree = Some(degree.into());
        self
    }

    /// Set the degree of the efficiency vs flow fit.
    pub fn efficiency_degree<D: Into<PolynomialDegree>>(mut self, degree: D) -> Self {
        if self.efficiency_degree.is_some() {
            self.duplicate_param = Some("efficiency_degree");
        }
        self.efficiency_degree = Some(degree.into());
        self
    }

    /// Set the rank policy of both fits.
    pub fn rank_policy(mut self, policy: RankPolicy) -> Self {
        self.shared = self.shared.rank_policy(policy);
        self
    }

    /// Set the coefficient number style of both fits.
    pub fn coefficient_format(mut self, format: CoefficientFormat) -> Self {
        self.shared = self.shared.coefficient_format(format);
        self
    }

    /// Set the coefficient precision of both fits.
    pub fn precision(mut self, precision: usize) -> Self {
        self.shared = self.shared.precision(precision);
        self
    }

    /// Set the curve resolution of both fits.
    pub fn resolution(mut self, resolution: usize) -> Self {
        self.shared = self.shared.resolution(resolution);
        self
    }

    /// Clamp the reported R² of both fits into [0, 1].
    pub fn clamp_r_squared(mut self, clamp: bool) -> Self {
        self.shared = self.shared.clamp_r_squared(clamp);
        self
    }

    /// Validate the configuration and build the fitter.
    pub fn build(self) -> Result<PumpCurveFitter, FitError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let head = self
            .shared
            .clone()
            .degree(self.head_degree.unwrap_or(PolynomialDegree::Quadratic))
            .build()?;
        let efficiency = self
            .shared
            .degree(self.efficiency_degree.unwrap_or(PolynomialDegree::Cubic))
            .build()?;

        Ok(PumpCurveFitter { head, efficiency })
    }
}

// ============================================================================
// Fitter
// ============================================================================

/// Configured pump curve fitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PumpCurveFitter {
    head: PolyFitter,
    efficiency: PolyFitter,
}

impl PumpCurveFitter {
    /// Fitter used for head vs flow.
    pub fn head_fitter(&self) -> &PolyFitter {
        &self.head
    }

    /// Fitter used for efficiency vs flow.
    pub fn efficiency_fitter(&self) -> &PolyFitter {
        &self.efficiency
    }

    /// Fit both curves of `data`.
    pub fn fit<T: FloatLinalg>(&self, data: &PumpData<T>) -> Result<PumpCurve<T>, FitError> {
        let head_model = self.head.fit(&data.flow, &data.head)?;
        let efficiency_model = self.efficiency.fit(&data.flow, &data.efficiency)?;

        let head_curve = self.head.curve(&head_model, &data.flow, &data.head)?;
        let efficiency_curve =
            self.efficiency
                .curve(&efficiency_model, &data.flow, &data.efficiency)?;

        log::debug!(
            "pump '{}': head R² {:.4}, efficiency R² {:.4}",
            data.name,
            head_curve.r_squared.to_f64().unwrap_or(f64::NAN),
            efficiency_curve.r_squared.to_f64().unwrap_or(f64::NAN)
        );

        Ok(PumpCurve {
            name: data.name.clone(),
            flow_units: data.flow_units.clone(),
            head_units: data.head_units.clone(),
            head_coefficients: self.head.format_coefficients(&head_model),
            efficiency_coefficients: self.efficiency.format_coefficients(&efficiency_model),
            head_model,
            efficiency_model,
            head_curve,
            efficiency_curve,
        })
    }
}
