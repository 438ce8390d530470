//! Layer 2: Math
//!
//! The statistical computations themselves.
//!
//! Every function in this layer assumes its input has already passed
//! validation (non-empty, all elements finite) and is therefore total.
//! Input slices are never mutated; statistics that depend on order work
//! on private copies.
//!
//! # Module Organization
//!
//! - **location**: maximum, minimum, mean, median
//! - **dispersion**: population standard deviation
//! - **frequency**: multi-valued mode
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine (validator, output)
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives (errors, sorting)
//! ```

/// Location statistics.
///
/// Provides:
/// - Maximum and minimum folds
/// - Arithmetic mean
/// - Median via sorted private copy
pub mod location;

/// Dispersion statistics.
///
/// Provides:
/// - Population standard deviation
pub mod dispersion;

/// Frequency statistics.
///
/// Provides:
/// - Multi-valued mode (all maximal-frequency values, ascending)
pub mod frequency;
