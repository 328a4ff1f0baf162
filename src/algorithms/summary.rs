//! Summary-statistics accumulation.
//!
//! ## Purpose
//!
//! This module reduces a point sequence to the four scalar sums the OLS
//! solver consumes: Σx, Σy, Σx², Σxy. It also exposes the mean of x over the
//! same sequence.
//!
//! ## Design notes
//!
//! * **Naive summation**: Each term is plain floating-point addition, with no
//!   compensated (Kahan) accumulation. The accumulated rounding error is part
//!   of the contract; order of summation follows sequence order.
//! * **Single pass**: `from_points` makes exactly one linear pass.
//!   `mean_x` is an independent second pass.
//! * **Generics**: Generic over `Float` types for flexible precision.
//!
//! ## Invariants
//!
//! * The sums are exactly the sums of the sequence, in sequence order.
//! * An empty sequence produces all-zero sums; there is no error at this
//!   layer. Callers guard division by N = 0 downstream.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::point::Point;

// ============================================================================
// Summary
// ============================================================================

/// The four scalar sums of one linear pass over a point sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary<T> {
    /// Σx
    pub sum_x: T,

    /// Σy
    pub sum_y: T,

    /// Σx²
    pub sum_xx: T,

    /// Σxy
    pub sum_xy: T,
}

impl<T: Float> Summary<T> {
    /// Accumulate the four sums in a single linear pass.
    pub fn from_points(points: &[Point<T>]) -> Self {
        let mut sum_x = T::zero();
        let mut sum_y = T::zero();
        let mut sum_xx = T::zero();
        let mut sum_xy = T::zero();

        for p in points {
            sum_x = sum_x + p.x;
            sum_y = sum_y + p.y;
            sum_xx = sum_xx + p.x * p.x;
            sum_xy = sum_xy + p.x * p.y;
        }

        Self {
            sum_x,
            sum_y,
            sum_xx,
            sum_xy,
        }
    }
}

// ============================================================================
// Mean
// ============================================================================

/// Mean of the x-values (x̄ = Σx / N), computed as an independent pass.
///
/// An empty sequence yields 0/0 = NaN; callers validate size first.
pub fn mean_x<T: Float>(points: &[Point<T>]) -> T {
    let mut sum = T::zero();
    for p in points {
        sum = sum + p.x;
    }
    sum / T::from(points.len()).unwrap_or_else(T::zero)
}
