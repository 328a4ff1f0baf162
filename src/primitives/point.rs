//! Point data model.
//!
//! ## Purpose
//!
//! This module defines the [`Point`] type — an immutable (x, y) pair — and
//! the axis-swap post-processing step applied to a parsed point sequence.
//!
//! ## Design notes
//!
//! * **Ownership**: Point sequences are plain `Vec<Point<T>>`/`&[Point<T>]`
//!   with automatic lifetime management; a point has no identity beyond its
//!   position in the sequence.
//! * **Generics**: Generic over `Float` types for flexible precision.
//!
//! ## Invariants
//!
//! * A point is immutable once read; `swap` returns a new value.
//! * `swap_axes` touches only the x/y roles, never the sequence order.

// External dependencies
use num_traits::Float;

// ============================================================================
// Point
// ============================================================================

/// A single 2-D observation: x (independent) and y (dependent).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point<T> {
    /// Independent variable.
    pub x: T,

    /// Dependent variable.
    pub y: T,
}

impl<T: Float> Point<T> {
    /// Construct a point from its coordinates.
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Return the point with its x and y roles exchanged.
    #[inline]
    pub fn swap(self) -> Self {
        Self {
            x: self.y,
            y: self.x,
        }
    }
}

// ============================================================================
// Axis Swap
// ============================================================================

/// Swap x and y for every point in the sequence, in place.
///
/// A pure post-processing pass over an already-built sequence; commonly used
/// when a scanned file stores columns in y, x order.
pub fn swap_axes<T: Float>(points: &mut [Point<T>]) {
    for p in points.iter_mut() {
        *p = p.swap();
    }
}
