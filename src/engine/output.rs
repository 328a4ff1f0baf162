//! Result report for OLS fitting.
//!
//! ## Purpose
//!
//! This module defines the [`OlsResult`] struct which encapsulates the output
//! of a fit: the coefficients, the convention they were derived under, and
//! the fitted y-value at the mean of x.
//!
//! ## Design notes
//!
//! * **Ergonomics**: Implements `Display` for a human-readable report.
//! * **Generics**: Results are generic over `Float` types.
//! * **NaN-transparent**: Degenerate fits carry NaN/±infinity components
//!   through unchanged; `Display` prints them as such.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::algorithms::solver::{Convention, LinearFit};

// ============================================================================
// Result Structure
// ============================================================================

/// OLS fit output: coefficients plus the fitted value at the mean of x.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OlsResult<T> {
    /// Number of points fitted.
    pub n: usize,

    /// Output convention the coefficients were derived under.
    pub convention: Convention,

    /// Intercept (`b` in slope-intercept form, `a` in coefficient form).
    pub intercept: T,

    /// Slope (`m` in slope-intercept form, `b` in coefficient form).
    pub slope: T,

    /// Mean of the x-values (x̄).
    pub x_mean: T,

    /// Fitted y-value at x̄.
    pub y_at_x_mean: T,
}

impl<T: Float> OlsResult<T> {
    /// The underlying line as a [`LinearFit`].
    pub fn line(&self) -> LinearFit<T> {
        LinearFit {
            intercept: self.intercept,
            slope: self.slope,
        }
    }

    /// Predict y-value for a given x using the fitted line.
    #[inline]
    pub fn predict(&self, x: T) -> T {
        self.line().predict(x)
    }

    /// Whether the fit is degenerate (all x-values equal).
    pub fn is_degenerate(&self) -> bool {
        !self.slope.is_finite() || !self.intercept.is_finite()
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display + Debug> Display for OlsResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Best fit (OLS):")?;
        writeln!(f, "  Data points: {}", self.n)?;
        writeln!(f, "  Convention:  {}", self.convention.name())?;
        writeln!(f, "  b (intercept) = {:.6}", self.intercept)?;
        writeln!(f, "  m (slope)     = {:.6}", self.slope)?;
        writeln!(f)?;
        writeln!(
            f,
            "  y = {:.6} at x = x̄ = {:.6}",
            self.y_at_x_mean, self.x_mean
        )?;
        Ok(())
    }
}
