//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer sits between the numerical kernel and the public API:
//! - Fail-fast validation of input sequences and paired slices
//! - The result report type returned by a fit
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Scanner
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives
//! ```

/// Input validation.
pub mod validator;

/// Fit result report.
pub mod output;
