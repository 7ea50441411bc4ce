//! Affine domain mapping for well-conditioned polynomial design matrices.
//!
//! ## Purpose
//!
//! Pump flow rates routinely span hundreds or thousands of units, so raw
//! powers `x^k` differ by many orders of magnitude across the columns of a
//! Vandermonde matrix. This module maps the sample abscissae onto `[-1, 1]`
//! before fitting and converts the fitted coefficients back to powers of the
//! original variable afterwards.
//!
//! ## Key concepts
//!
//! * **Mapping**: `t = (x - shift) / scale`, with `shift` the midpoint and
//!   `scale` the half-range of the samples.
//! * **Back-conversion**: `sum a_k t^k` is expanded into `sum c_j x^j` by
//!   composing with the linear polynomial `t(x)` in Horner form.
//!
//! ## Invariants
//!
//! * `scale > 0`. A zero-width range (all abscissae equal) uses `scale = 1`,
//!   mapping every sample to `t = 0`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// Affine Domain
// ============================================================================

/// Affine map from sample coordinates onto `[-1, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineDomain<T> {
    /// Midpoint of the sample range.
    pub shift: T,

    /// Half-width of the sample range (1 for a degenerate range).
    pub scale: T,
}

impl<T: Float> AffineDomain<T> {
    /// Build the mapping from the extent of `x`.
    ///
    /// Expects a non-empty slice of finite values.
    pub fn from_samples(x: &[T]) -> Self {
        let (lo, hi) = extent(x);
        let two = T::one() + T::one();
        let shift = (lo + hi) / two;
        let half_range = (hi - lo) / two;

        let scale = if half_range > T::zero() && half_range.is_finite() {
            half_range
        } else {
            T::one()
        };

        Self { shift, scale }
    }

    /// Map a sample coordinate onto the fitting domain.
    #[inline]
    pub fn map(&self, x: T) -> T {
        (x - self.shift) / self.scale
    }

    /// Convert coefficients of a polynomial in `t` into coefficients in `x`.
    ///
    /// Both vectors are in ascending power order.
    pub fn unmap_coefficients(&self, mapped: &[T]) -> Vec<T> {
        let n = mapped.len();
        if n == 0 {
            return Vec::new();
        }

        // t(x) = slope * x + offset
        let slope = T::one() / self.scale;
        let offset = -self.shift / self.scale;

        // Horner composition: acc <- acc * t(x) + a_k, from the top degree down.
        let mut acc: Vec<T> = Vec::with_capacity(n);
        acc.push(mapped[n - 1]);
        for &a_k in mapped[..n - 1].iter().rev() {
            let mut next = Vec::with_capacity(acc.len() + 1);
            next.push(offset * acc[0] + a_k);
            for j in 1..acc.len() {
                next.push(offset * acc[j] + slope * acc[j - 1]);
            }
            next.push(slope * acc[acc.len() - 1]);
            acc = next;
        }

        acc
    }
}

/// Minimum and maximum of a slice; `(0, 0)` when empty.
pub fn extent<T: Float>(x: &[T]) -> (T, T) {
    match x.first() {
        None => (T::zero(), T::zero()),
        Some(&first) => x
            .iter()
            .skip(1)
            .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))),
    }
}
