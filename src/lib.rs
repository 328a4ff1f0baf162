//! # OLSFIT — Ordinary Least-Squares Linear Regression for Rust
//!
//! A small, focused ordinary least-squares (OLS) implementation: it reduces a
//! sequence of 2-D points to four summary statistics (Σx, Σy, Σx², Σxy) in a
//! single pass and derives the slope and intercept from them in closed form.
//! A byte-level numeric-token scanner turns free-form delimited text (CSV or
//! any non-numeric separator) into a point sequence for fitting.
//!
//! ## Quick Start
//!
//! ```rust
//! use olsfit::prelude::*;
//!
//! let points = vec![
//!     Point { x: 1.0, y: 3.1 },
//!     Point { x: 2.0, y: 4.9 },
//!     Point { x: 3.0, y: 7.0 },
//! ];
//!
//! let model = Ols::new().convention(SlopeIntercept).build()?;
//! let result = model.fit(&points)?;
//!
//! println!("{}", result);
//! # Result::<(), OlsError>::Ok(())
//! ```
//!
//! ```text
//! Best fit (OLS):
//!   Data points: 3
//!   Convention:  slope-intercept
//!   b (intercept) = 1.100000
//!   m (slope)     = 1.950000
//!
//!   y = 5.000000 at x = x̄ = 2.000000
//! ```
//!
//! ## Output conventions
//!
//! Two algebraically equivalent formulations of the closed-form solution are
//! provided, because they round differently and downstream consumers may
//! depend on either arithmetic:
//!
//! * [`SlopeIntercept`](prelude::SlopeIntercept) — solves for the slope `m`
//!   first, then `b = (Σy − mΣx)/n`.
//! * [`Coefficient`](prelude::Coefficient) — solves `a` and `b` directly from
//!   the normal equations, `y ≈ a + b·x`.
//!
//! Both map onto the same [`OlsResult`](prelude::OlsResult) fields
//! (`intercept`, `slope`) and agree to floating-point tolerance whenever the
//! x-values are not all equal.
//!
//! ## Scanning delimited files
//!
//! ```rust
//! use olsfit::prelude::*;
//!
//! let points: Vec<Point<f64>> = scan_points(b"43,99\n21,65\n25,79")?;
//! assert_eq!(points.len(), 3);
//! # Result::<(), OlsError>::Ok(())
//! ```
//!
//! Any run of non-numeric bytes separates tokens; emitted numbers alternate
//! x, y, x, y…, and a trailing lone x is dropped. See [`prelude::scan_points`].
//!
//! ## Degenerate input
//!
//! When every x-value is equal, the normal-equation denominator is exactly
//! zero and the result components are IEEE NaN or ±infinity. This is the
//! documented behavior, not an error: the fit never panics and no guard is
//! silently inserted.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments (with `alloc`):
//!
//! ```toml
//! [dependencies]
//! olsfit = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - data structures and shared error types.
mod primitives;

// Layer 2: Algorithms - summary accumulation and the closed-form solver.
mod algorithms;

// Layer 3: Scanner - numeric-token scanning of delimited byte streams.
mod scanner;

// Layer 4: Engine - input validation and the result report.
mod engine;

// High-level fluent API for OLS fitting.
mod api;

// Standard OLS prelude.
pub mod prelude {
    pub use crate::api::{
        mean_x, scan_points, solve, swap_axes,
        Convention,
        Convention::{Coefficient, SlopeIntercept},
        LinearFit, Ols, OlsError, OlsResult, Point, Summary, Validator, MAX_TOKEN_LEN,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod scanner {
        pub use crate::scanner::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
