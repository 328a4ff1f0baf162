//! Numeric-token scanning of delimited byte streams.
//!
//! ## Purpose
//!
//! This module splits a byte stream on any non-numeric delimiter into
//! alternating x/y numeric tokens and assembles complete (x, y) pairs into a
//! point sequence.
//!
//! ## Design notes
//!
//! * **Byte classification**: ASCII digits, `.` and `-` are digit-class;
//!   everything else (commas, whitespace, newlines, letters) is a separator.
//! * **Separator runs collapse**: An empty accumulator is never parsed, so
//!   consecutive separators act as one.
//! * **Length-checked buffer**: The fixed-size stack accumulator of the
//!   historical implementation is a length-checked token buffer here; a token
//!   longer than [`MAX_TOKEN_LEN`] aborts the whole scan and no partial
//!   sequence is returned.
//! * **Permissive parse**: The longest prefix of a token that parses as a
//!   float is taken, matching `sscanf("%lf")`. `-` is always digit-class, so
//!   `3-4` is one token and reads as `3.0` — preserved as given, not fixed.
//!
//! ## Invariants
//!
//! * A pair is counted only once both its x and y tokens have been emitted;
//!   a trailing lone x is dropped silently.
//! * End of stream terminates a pending token like any separator.
//! * On error, no partially scanned points escape.
//!
//! ## Non-goals
//!
//! * This module does not handle CSV quoting, headers, or column selection.
//! * This module does not validate the resulting sequence (engine layer).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};
#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

// External dependencies
use core::str::FromStr;
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::OlsError;
use crate::primitives::point::Point;

/// Maximum length of a single numeric token, in bytes.
pub const MAX_TOKEN_LEN: usize = 256;

// ============================================================================
// Byte Classification
// ============================================================================

/// Whether a byte belongs to a numeric token.
#[inline]
fn is_digit_class(b: u8) -> bool {
    b.is_ascii_digit() || b == b'.' || b == b'-'
}

// ============================================================================
// Permissive Numeric Parse
// ============================================================================

/// Parse the longest valid floating-point prefix of a token.
///
/// Mirrors `sscanf("%lf")`: extra characters after a valid prefix are
/// ignored (`3-4` parses as 3.0, `1.2.3` as 1.2). A token with no valid
/// prefix (e.g. a bare `-`) parses as 0.0.
fn parse_prefix(token: &str) -> f64 {
    for end in (1..=token.len()).rev() {
        if let Ok(v) = f64::from_str(&token[..end]) {
            return v;
        }
    }
    0.0
}

// ============================================================================
// Scanning
// ============================================================================

/// Scan a delimited byte stream into a point sequence.
///
/// Emitted numbers alternate role: the 1st, 3rd, 5th, … are x-values, the
/// 2nd, 4th, 6th, … are y-values. A pair is appended only when both halves
/// have been emitted; a trailing lone x is dropped.
///
/// # Errors
///
/// [`OlsError::TokenOverflow`] if a numeric token exceeds [`MAX_TOKEN_LEN`]
/// bytes without terminating. The scan aborts and no partial sequence is
/// returned.
pub fn scan_points<T: Float>(bytes: &[u8]) -> Result<Vec<Point<T>>, OlsError> {
    // Flush a completed token: emit it into the alternating x/y roles.
    // An empty accumulator is a separator run and emits nothing.
    fn flush<T: Float>(accum: &mut String, pending_x: &mut Option<T>, points: &mut Vec<Point<T>>) {
        if accum.is_empty() {
            return;
        }
        let value = T::from(parse_prefix(accum)).unwrap_or_else(T::zero);
        accum.clear();
        match pending_x.take() {
            Some(x) => points.push(Point { x, y: value }),
            None => *pending_x = Some(value),
        }
    }

    let mut points = Vec::new();
    let mut accum = String::new();
    let mut pending_x: Option<T> = None;

    for (offset, &b) in bytes.iter().enumerate() {
        if is_digit_class(b) {
            if accum.len() >= MAX_TOKEN_LEN {
                return Err(OlsError::TokenOverflow {
                    offset,
                    limit: MAX_TOKEN_LEN,
                });
            }
            accum.push(b as char);
        } else {
            flush(&mut accum, &mut pending_x, &mut points);
        }
    }

    // End of stream terminates a pending token; a lone x is dropped.
    flush(&mut accum, &mut pending_x, &mut points);

    Ok(points)
}
