//! Closed-form OLS solver.
//!
//! ## Purpose
//!
//! This module derives slope and intercept from a [`Summary`] and the point
//! count, in either of two algebraically equivalent output conventions.
//!
//! ## Design notes
//!
//! * **One solver, two conventions**: The historical interface exposed two
//!   near-duplicate functions differing only in how the coefficients are
//!   derived. Here a single [`solve`] takes a [`Convention`] flag and the
//!   shared accumulator is written once.
//! * **Arithmetic preserved**: The two formulations round differently; each
//!   is evaluated exactly as written so results are bit-reproducible per
//!   convention.
//! * **No degeneracy guard**: When all x-values are equal the denominator
//!   `nΣx² − (Σx)²` is exactly zero and IEEE division produces NaN or
//!   ±infinity. That value propagates; the solver never panics.
//!
//! ## Key concepts
//!
//! * *Slope-intercept form*: `m = (nΣxy − ΣxΣy)/(nΣx² − (Σx)²)`,
//!   `b = (Σy − mΣx)/n`, giving `y ≈ m·x + b`.
//! * *Coefficient form*: `a = (ΣyΣx² − ΣxΣxy)/denom`,
//!   `b = (nΣxy − ΣxΣy)/denom`, giving `y ≈ a + b·x`.
//!   Algebraically `a` equals the slope-intercept `b`, and its `b` equals `m`.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::summary::Summary;

// ============================================================================
// Output Convention
// ============================================================================

/// Selects which of the two equivalent coefficient derivations to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Convention {
    /// Solve the slope first, then back out the intercept (default).
    #[default]
    SlopeIntercept,

    /// Solve both coefficients directly from the normal equations.
    Coefficient,
}

impl Convention {
    /// Human-readable convention name.
    pub fn name(&self) -> &'static str {
        match self {
            Convention::SlopeIntercept => "slope-intercept",
            Convention::Coefficient => "coefficient",
        }
    }
}

// ============================================================================
// LinearFit
// ============================================================================

/// Linear regression fit result (slope and intercept).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit<T> {
    /// Intercept (beta_0)
    pub intercept: T,

    /// Slope (beta_1)
    pub slope: T,
}

impl<T: Float> LinearFit<T> {
    /// Predict y-value for a given x using the model.
    #[inline]
    pub fn predict(&self, x: T) -> T {
        self.intercept + self.slope * x
    }
}

// ============================================================================
// Solver
// ============================================================================

/// Derive slope and intercept from the summary sums and point count.
///
/// The denominator `nΣx² − (Σx)²` is zero exactly when all x-values are
/// equal; the resulting NaN/±infinity components are returned as-is.
pub fn solve<T: Float>(summary: &Summary<T>, n: usize, convention: Convention) -> LinearFit<T> {
    let n_t = T::from(n).unwrap_or_else(T::zero);
    let Summary {
        sum_x,
        sum_y,
        sum_xx,
        sum_xy,
    } = *summary;

    match convention {
        Convention::SlopeIntercept => {
            let slope = (n_t * sum_xy - sum_x * sum_y) / (n_t * sum_xx - sum_x * sum_x);
            let intercept = (sum_y - slope * sum_x) / n_t;
            LinearFit { intercept, slope }
        }
        Convention::Coefficient => {
            let denom = n_t * sum_xx - sum_x * sum_x;
            let intercept = (sum_y * sum_xx - sum_x * sum_xy) / denom;
            let slope = (n_t * sum_xy - sum_x * sum_y) / denom;
            LinearFit { intercept, slope }
        }
    }
}
