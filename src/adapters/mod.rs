//! Layer 6: Adapters
//!
//! # Purpose
//!
//! This layer packages the generic fitter for concrete use cases. The pump
//! adapter pairs a head-vs-flow fit with an efficiency-vs-flow fit over the
//! same flow samples.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters ← You are here
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Pump performance curves (head and efficiency vs flow).
pub mod pump;
