//! Layer 1: Primitives
//!
//! Core building blocks and types.
//!
//! This layer provides the error type and low-level utilities used
//! throughout the crate. It has zero internal dependencies within the
//! crate.
//!
//! # Module Organization
//!
//! - **errors**: Shared error types (StatsError)
//! - **sorting**: Private-copy sorting helpers
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine (validator, output)
//!   ↓
//! Layer 2: Math (location, dispersion, frequency)
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
///
/// Provides:
/// - Unified `StatsError` enum
/// - Validation-failure variants with context
pub mod errors;

/// Sorting utilities.
///
/// Provides:
/// - Ascending private-copy sorting for median and mode
pub mod sorting;
