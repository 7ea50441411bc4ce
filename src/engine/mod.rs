//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer orchestrates a fit: it validates the inputs, runs the
//! least-squares algorithm under the configured rank policy, logs the
//! outcome, and assembles the immutable model.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Fit orchestration.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for fitting operations.
pub mod output;
