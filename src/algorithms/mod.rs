//! Layer 2: Algorithms
//!
//! # Purpose
//!
//! This layer provides the numerical kernel of the crate:
//! - Summary accumulation (Σx, Σy, Σx², Σxy) over a point sequence
//! - The closed-form OLS solver in both output conventions
//!
//! These are pure functions over in-memory slices with no I/O and no
//! validation; callers guard degenerate sizes.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Scanner
//!   ↓
//! Layer 2: Algorithms ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Summary-statistics accumulation.
pub mod summary;

/// Closed-form OLS solver.
pub mod solver;
