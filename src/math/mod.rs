//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical building blocks for polynomial
//! least squares:
//! - Dense least-squares solvers (QR, SVD pseudo-inverse)
//! - Affine mapping of the abscissae onto a well-conditioned domain
//!
//! These are reusable pieces with no fitting-policy logic.
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
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Linear algebra backend (nalgebra).
pub mod linalg;

/// Affine domain mapping and coefficient back-conversion.
pub mod domain;
