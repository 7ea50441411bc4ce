//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer derives presentation-ready quantities from a fitted model:
//! - Goodness-of-fit diagnostics (R², RMSE, MAE)
//! - Dense curve samples for plotting
//! - Stable textual rendering of coefficients
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Diagnostic metrics for fit quality assessment.
pub mod diagnostics;

/// Dense curve sampling over the sample range.
pub mod curve;

/// Coefficient formatting.
pub mod format;
