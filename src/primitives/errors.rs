//! Shared error types for descriptive statistics.
//!
//! ## Purpose
//!
//! This module defines the unified [`StatsError`] enum returned by every
//! public operation in the crate. All failures are validation failures:
//! once input has been accepted, every statistic is total.
//!
//! ## Design notes
//!
//! * Variants carry context (the offending index) where it aids debugging.
//! * Errors are raised by validation and propagated unchanged to the
//!   caller; nothing in the crate catches or wraps them.
//! * `Display` is implemented manually for `no_std` compatibility;
//!   `std::error::Error` is implemented under the `std` feature.
//!
//! ## Invariants
//!
//! * Every fallible public operation fails with exactly one of these
//!   three variants.
//! * Equality on errors is structural, making them easy to assert on in
//!   tests.
//!
//! ## Visibility
//!
//! [`StatsError`] is part of the public API and is re-exported from the
//! crate root.

use core::fmt;

// ============================================================================
// Error Type
// ============================================================================

/// Errors produced by input validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsError {
    /// The input cannot be viewed as a contiguous sequence of numbers.
    NotASequence,

    /// The input sequence contains no elements.
    EmptySequence,

    /// An element of the sequence is not a finite number (NaN or infinite).
    NonNumericElement {
        /// Index of the first offending element.
        index: usize,
    },
}

impl fmt::Display for StatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatsError::NotASequence => {
                write!(f, "input is not a contiguous sequence of numbers")
            }
            StatsError::EmptySequence => {
                write!(f, "input sequence contains no elements")
            }
            StatsError::NonNumericElement { index } => {
                write!(f, "element at index {} is not a finite number", index)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for StatsError {}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages_are_specific() {
        assert_eq!(
            StatsError::NotASequence.to_string(),
            "input is not a contiguous sequence of numbers"
        );
        assert_eq!(
            StatsError::EmptySequence.to_string(),
            "input sequence contains no elements"
        );
        assert_eq!(
            StatsError::NonNumericElement { index: 3 }.to_string(),
            "element at index 3 is not a finite number"
        );
    }

    #[test]
    fn errors_compare_structurally() {
        assert_eq!(
            StatsError::NonNumericElement { index: 1 },
            StatsError::NonNumericElement { index: 1 }
        );
        assert_ne!(
            StatsError::NonNumericElement { index: 1 },
            StatsError::NonNumericElement { index: 2 }
        );
    }
}
