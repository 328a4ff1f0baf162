//! Input validation for OLS fitting.
//!
//! ## Purpose
//!
//! This module provides validation functions for OLS input data. Checks are
//! structural (sizes and shapes), not numerical.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Structural only**: Zero x-variance is deliberately not checked here;
//!   a degenerate fit propagates as IEEE NaN/infinity by contract.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter input data.
//! * This module does not perform the fit itself.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::OlsError;
use crate::primitives::point::Point;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for OLS input data.
///
/// Provides static methods returning `Result<(), OlsError>` that fail fast
/// upon identifying the first violation.
pub struct Validator;

impl Validator {
    /// Minimum points for a non-degenerate solve.
    pub const MIN_POINTS: usize = 2;

    /// Validate a point sequence for fitting.
    pub fn validate_points<T: Float>(points: &[Point<T>]) -> Result<(), OlsError> {
        // Check 1: Non-empty sequence
        if points.is_empty() {
            return Err(OlsError::EmptyInput);
        }

        // Check 2: Sufficient points for regression
        let n = points.len();
        if n < Self::MIN_POINTS {
            return Err(OlsError::TooFewPoints {
                got: n,
                min: Self::MIN_POINTS,
            });
        }

        Ok(())
    }

    /// Validate paired x/y slices before pairing them into a sequence.
    pub fn validate_xy<T: Float>(x: &[T], y: &[T]) -> Result<(), OlsError> {
        if x.len() != y.len() {
            return Err(OlsError::MismatchedInputs {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), OlsError> {
        if let Some(parameter) = duplicate_param {
            return Err(OlsError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
