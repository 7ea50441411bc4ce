//! Layer 3: Algorithms
//!
//! This layer implements the least-squares polynomial fit and polynomial
//! evaluation. It contains the numerical "business logic" of the crate but
//! is orchestrated by the engine layer.

// Polynomial least-squares regression.
pub mod regression;

// Horner evaluation.
pub mod polynomial;
