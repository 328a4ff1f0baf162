//! Layer 3: Scanner
//!
//! # Purpose
//!
//! This layer turns a delimited byte stream into a point sequence: any run of
//! non-numeric bytes separates tokens, and emitted numbers alternate x, y.
//! It is only needed for file-input mode; direct coordinate input bypasses it.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Scanner ← You are here
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives
//! ```

/// Numeric-token scanning.
pub mod tokens;
