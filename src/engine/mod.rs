//! Layer 3: Engine
//!
//! Validation and result assembly around the math layer.
//!
//! This layer guards the math layer's preconditions and defines the
//! aggregate result container. It performs no statistics itself.
//!
//! # Module Organization
//!
//! - **validator**: Shared fail-fast input validation
//! - **output**: Aggregate result type (DescriptiveReport)
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Math (location, dispersion, frequency)
//!   ↓
//! Layer 1: Primitives (errors, sorting)
//! ```

/// Validation utilities.
///
/// Provides:
/// - Emptiness and per-element finiteness checks
/// - Shared validation logic for every public operation
pub mod validator;

/// Output types.
///
/// Provides:
/// - `DescriptiveReport` aggregate result
/// - Convenience queries and `Display`
pub mod output;
