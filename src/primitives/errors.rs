//! Error types for OLS operations.
//!
//! ## Purpose
//!
//! This module defines error conditions that can occur while building a
//! fitter, validating input, or scanning a delimited byte stream.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., actual vs. expected lengths).
//! * **No-std**: Supports `no_std` environments; no allocation is required to
//!   construct any variant.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Input validation**: Empty sequences, too few points, mismatched slice lengths.
//! 2. **Scan failures**: A numeric token exceeding the fixed length limit aborts the scan.
//! 3. **Builder misuse**: A parameter set multiple times is rejected at build time.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Numeric degeneracy (zero x-variance) is NOT an error; it propagates as
//!   IEEE NaN/infinity through the fit result.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for OLS operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OlsError {
    /// Input sequence is empty; a fit requires at least 2 points.
    EmptyInput,

    /// Number of points is below the minimum requirement for a fit.
    TooFewPoints {
        /// Number of points provided.
        got: usize,
        /// Minimum required points.
        min: usize,
    },

    /// `x` and `y` slices must have the same number of elements.
    MismatchedInputs {
        /// Number of elements in the `x` slice.
        x_len: usize,
        /// Number of elements in the `y` slice.
        y_len: usize,
    },

    /// A numeric token in the scanned stream exceeded the fixed length limit.
    ///
    /// The scan is aborted and no partial point sequence is returned.
    TokenOverflow {
        /// Byte offset at which the token stopped fitting.
        offset: usize,
        /// Maximum permitted token length.
        limit: usize,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for OlsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input sequence is empty"),
            Self::TooFewPoints { got, min } => {
                write!(f, "Too few points: got {got}, need at least {min}")
            }
            Self::MismatchedInputs { x_len, y_len } => {
                write!(f, "Length mismatch: x has {x_len} values, y has {y_len}")
            }
            Self::TokenOverflow { offset, limit } => {
                write!(
                    f,
                    "Numeric token at byte {offset} exceeds {limit} characters; scan aborted"
                )
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for OlsError {}
