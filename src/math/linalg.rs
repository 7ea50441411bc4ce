//! Linear algebra backend abstraction for least-squares fitting.
//!
//! ## Purpose
//!
//! This module provides a trait-based abstraction over the dense linear
//! algebra needed to solve overdetermined polynomial systems, standardizing
//! on the nalgebra backend.
//!
//! ## Design notes
//!
//! * Solves the rectangular system `V c ≈ y` directly with Householder QR
//!   instead of forming the normal equations `V'V c = V'y`, which squares
//!   the condition number.
//! * Rank is judged from the diagonal of `R` against a relative tolerance.
//! * Minimum-norm solutions come from the SVD pseudo-inverse.
//! * Generic over `FloatLinalg` types (f32 and f64) which delegate to nalgebra.
//!
//! ## Invariants
//!
//! * Design matrices are passed row-major: `design[i * cols + j]`.
//! * A QR solution is only returned for numerically full-rank systems.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::Debug;
use num_traits::Float;

// ============================================================================
// Solver Outcome
// ============================================================================

/// Least-squares solution together with the numerical rank it was obtained at.
#[derive(Debug, Clone, PartialEq)]
pub struct LeastSquaresSolution<T> {
    /// Solution vector, one entry per design column.
    pub coefficients: Vec<T>,

    /// Numerical rank of the design matrix.
    pub rank: usize,
}

/// Result of the QR path.
#[derive(Debug, Clone, PartialEq)]
pub enum QrOutcome<T> {
    /// Full-rank system solved by back substitution.
    Solved(Vec<T>),

    /// The design matrix is rank deficient at the given tolerance.
    RankDeficient {
        /// Number of diagonal entries of `R` above tolerance.
        rank: usize,
    },
}

// ============================================================================
// FloatLinalg Trait
// ============================================================================

/// Helper trait to bridge generic Float types to the nalgebra backend.
pub trait FloatLinalg: Float + Debug + Send + Sync + 'static {
    /// Solve `min ||A c - b||` by Householder QR (requires `rows >= cols`).
    fn qr_least_squares(
        design: &[Self],
        rhs: &[Self],
        rows: usize,
        cols: usize,
        rel_tol: Self,
    ) -> QrOutcome<Self>;

    /// Minimum-norm solution of `min ||A c - b||` through the SVD pseudo-inverse.
    fn min_norm_least_squares(
        design: &[Self],
        rhs: &[Self],
        rows: usize,
        cols: usize,
        rel_tol: Self,
    ) -> Option<LeastSquaresSolution<Self>>;
}

impl FloatLinalg for f64 {
    #[inline]
    fn qr_least_squares(
        design: &[Self],
        rhs: &[Self],
        rows: usize,
        cols: usize,
        rel_tol: Self,
    ) -> QrOutcome<Self> {
        nalgebra_backend::qr_least_squares(design, rhs, rows, cols, rel_tol)
    }

    #[inline]
    fn min_norm_least_squares(
        design: &[Self],
        rhs: &[Self],
        rows: usize,
        cols: usize,
        rel_tol: Self,
    ) -> Option<LeastSquaresSolution<Self>> {
        nalgebra_backend::min_norm_least_squares(design, rhs, rows, cols, rel_tol)
    }
}

impl FloatLinalg for f32 {
    #[inline]
    fn qr_least_squares(
        design: &[Self],
        rhs: &[Self],
        rows: usize,
        cols: usize,
        rel_tol: Self,
    ) -> QrOutcome<Self> {
        nalgebra_backend::qr_least_squares(design, rhs, rows, cols, rel_tol)
    }

    #[inline]
    fn min_norm_least_squares(
        design: &[Self],
        rhs: &[Self],
        rows: usize,
        cols: usize,
        rel_tol: Self,
    ) -> Option<LeastSquaresSolution<Self>> {
        nalgebra_backend::min_norm_least_squares(design, rhs, rows, cols, rel_tol)
    }
}

// ============================================================================
// Nalgebra Backend Implementation
// ============================================================================

/// Nalgebra-based linear algebra operations.
pub mod nalgebra_backend {
    use super::{LeastSquaresSolution, QrOutcome};
    use nalgebra::{DMatrix, DVector, RealField};

    #[cfg(not(feature = "std"))]
    use alloc::vec::Vec;
    #[cfg(feature = "std")]
    use std::vec::Vec;

    /// Largest absolute value in an iterator, zero when empty.
    fn max_abs<R: RealField + Copy>(values: impl Iterator<Item = R>) -> R {
        values.fold(R::zero(), |acc, v| {
            let a = v.abs();
            if a > acc { a } else { acc }
        })
    }

    /// Householder QR least squares: `R c = Q' b`.
    pub fn qr_least_squares<R: RealField + Copy>(
        design: &[R],
        rhs: &[R],
        rows: usize,
        cols: usize,
        rel_tol: R,
    ) -> QrOutcome<R> {
        debug_assert!(rows >= cols);
        let matrix = DMatrix::from_row_slice(rows, cols, design);
        let b = DVector::from_column_slice(rhs);

        let qr = matrix.qr();
        let r = qr.r();

        let r_max = max_abs((0..cols).map(|j| r[(j, j)]));
        let threshold = rel_tol * r_max;
        let rank = (0..cols).filter(|&j| r[(j, j)].abs() > threshold).count();
        if r_max == R::zero() || rank < cols {
            return QrOutcome::RankDeficient { rank };
        }

        let qtb = qr.q().transpose() * b;
        match r.solve_upper_triangular(&qtb) {
            Some(solution) => QrOutcome::Solved(solution.as_slice().to_vec()),
            None => QrOutcome::RankDeficient { rank },
        }
    }

    /// SVD pseudo-inverse solve; singular values below `rel_tol * s_max` are dropped.
    pub fn min_norm_least_squares<R: RealField + Copy>(
        design: &[R],
        rhs: &[R],
        rows: usize,
        cols: usize,
        rel_tol: R,
    ) -> Option<LeastSquaresSolution<R>> {
        let matrix = DMatrix::from_row_slice(rows, cols, design);
        let b = DVector::from_column_slice(rhs);

        let svd = matrix.svd(true, true);
        let s_max = max_abs(svd.singular_values.iter().copied());
        if s_max == R::zero() {
            // All-zero design: the minimum-norm solution is the zero vector.
            return Some(LeastSquaresSolution {
                coefficients: (0..cols).map(|_| R::zero()).collect::<Vec<R>>(),
                rank: 0,
            });
        }

        let eps = rel_tol * s_max;
        let rank = svd.rank(eps);
        svd.solve(&b, eps)
            .ok()
            .map(|s: DVector<R>| LeastSquaresSolution {
                coefficients: s.as_slice().to_vec(),
                rank,
            })
    }
}
