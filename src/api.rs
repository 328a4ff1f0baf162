//! High-level API for OLS fitting.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder pattern for configuring the output convention and optional
//! axis swap, then fitting point sequences or paired slices.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are validated when `.build()` is called;
//!   input data is validated at `.fit()` time.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create an [`Ols`] builder via `Ols::new()`.
//! 2. Chain configuration methods (`.convention()`, `.swap_axes()`).
//! 3. Call `.build()` to obtain an [`OlsFitter`], then `.fit()`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Publicly re-exported types
pub use crate::algorithms::solver::{solve, Convention, LinearFit};
pub use crate::algorithms::summary::{mean_x, Summary};
pub use crate::engine::output::OlsResult;
pub use crate::engine::validator::Validator;
pub use crate::primitives::errors::OlsError;
pub use crate::primitives::point::{swap_axes, Point};
pub use crate::scanner::tokens::{scan_points, MAX_TOKEN_LEN};

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring an OLS fit.
#[derive(Debug, Clone, Default)]
pub struct Ols {
    /// Output convention for the coefficients.
    pub convention: Option<Convention>,

    /// Swap x and y for every point before fitting.
    pub swap_axes: bool,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl Ols {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            convention: None,
            swap_axes: false,
            duplicate_param: None,
        }
    }

    /// Select the output convention for the coefficients.
    pub fn convention(mut self, convention: Convention) -> Self {
        if self.convention.is_some() {
            self.duplicate_param = Some("convention");
        }
        self.convention = Some(convention);
        self
    }

    /// Swap x and y for every point before fitting.
    ///
    /// A pure post-processing step over the input sequence, applied after
    /// scanning or pairing and before accumulation.
    pub fn swap_axes(mut self) -> Self {
        self.swap_axes = true;
        self
    }

    /// Build the fitter.
    pub fn build(self) -> Result<OlsFitter, OlsError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        Ok(OlsFitter {
            convention: self.convention.unwrap_or_default(),
            swap_axes: self.swap_axes,
        })
    }
}

// ============================================================================
// Fitter
// ============================================================================

/// Configured OLS fitter.
#[derive(Debug, Clone, Copy)]
pub struct OlsFitter {
    convention: Convention,
    swap_axes: bool,
}

impl OlsFitter {
    /// Fit a point sequence.
    ///
    /// Accumulates the summary sums in one pass, solves for the coefficients
    /// under the configured convention, and evaluates the fitted line at the
    /// mean of x.
    ///
    /// # Errors
    ///
    /// * [`OlsError::EmptyInput`] for an empty sequence.
    /// * [`OlsError::TooFewPoints`] for fewer than 2 points.
    ///
    /// All-equal x-values are not an error: the coefficients come back as
    /// IEEE NaN/±infinity.
    pub fn fit<T: Float>(&self, points: &[Point<T>]) -> Result<OlsResult<T>, OlsError> {
        Validator::validate_points(points)?;

        if self.swap_axes {
            let mut swapped: Vec<Point<T>> = points.to_vec();
            crate::primitives::point::swap_axes(&mut swapped);
            return self.fit_prepared(&swapped);
        }

        self.fit_prepared(points)
    }

    /// Fit paired x/y slices.
    ///
    /// # Errors
    ///
    /// [`OlsError::MismatchedInputs`] when the slices differ in length, plus
    /// everything [`fit`](Self::fit) can return.
    pub fn fit_xy<T: Float>(&self, x: &[T], y: &[T]) -> Result<OlsResult<T>, OlsError> {
        Validator::validate_xy(x, y)?;

        let points: Vec<Point<T>> = x
            .iter()
            .zip(y.iter())
            .map(|(&x, &y)| Point { x, y })
            .collect();
        self.fit(&points)
    }

    fn fit_prepared<T: Float>(&self, points: &[Point<T>]) -> Result<OlsResult<T>, OlsError> {
        let n = points.len();
        let summary = Summary::from_points(points);
        let line = solve(&summary, n, self.convention);
        let x_mean = mean_x(points);

        Ok(OlsResult {
            n,
            convention: self.convention,
            intercept: line.intercept,
            slope: line.slope,
            x_mean,
            y_at_x_mean: line.predict(x_mean),
        })
    }
}
