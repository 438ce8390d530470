//! Input validation for descriptive statistics.
//!
//! ## Purpose
//!
//! This module provides the shared validation routine run by every
//! public operation before any numeric computation begins. Validation
//! guarantees the math layer's preconditions: a non-empty slice in
//! which every element is a finite number.
//!
//! ## Design notes
//!
//! * Validation is fail-fast: returns on the first error encountered.
//! * Checks are ordered from cheap to expensive: emptiness before the
//!   per-element finiteness loop.
//! * Every public operation re-runs validation independently; there is
//!   no shared validated-state cache, so each function is safe to call
//!   on its own.
//! * Validation is generic over `Float` types to support f32 and f64.
//!
//! ## Key concepts
//!
//! ### Finite Value Checks
//!
//! With a `Float`-bounded element type, the runtime analog of a
//! non-numeric element is a non-finite value. `NaN` and infinities are
//! rejected up front so that every downstream comparison and
//! accumulation is well-defined.
//!
//! ## Invariants
//!
//! * Validated input satisfies every precondition of the math layer.
//! * Validation is deterministic and side-effect free.
//! * The reported index is the first offending element's position.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or copy input data.
//! * This module does not check sequence-ness; the input trait at the
//!   API boundary does.
//!
//! ## Visibility
//!
//! Internal to the crate; callers interact with validation only through
//! the errors it produces.

use num_traits::Float;

use crate::primitives::errors::StatsError;

/// Validation utility for statistic inputs.
///
/// Static methods returning `Result<(), StatsError>`, failing fast on
/// the first violation.
pub struct Validator;

impl Validator {
    /// Validate an input slice for any descriptive statistic.
    pub fn validate_input<T: Float>(numbers: &[T]) -> Result<(), StatsError> {
        // Check 1: Non-empty
        if numbers.is_empty() {
            return Err(StatsError::EmptySequence);
        }

        // Check 2: All elements finite
        for (index, value) in numbers.iter().enumerate() {
            if !value.is_finite() {
                return Err(StatsError::NonNumericElement { index });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_finite_values() {
        assert!(Validator::validate_input(&[1.0_f64, -2.5, 0.0]).is_ok());
    }

    #[test]
    fn rejects_empty_input() {
        let empty: [f64; 0] = [];
        assert_eq!(
            Validator::validate_input(&empty),
            Err(StatsError::EmptySequence)
        );
    }

    #[test]
    fn rejects_nan_with_index() {
        assert_eq!(
            Validator::validate_input(&[1.0_f64, f64::NAN, 3.0]),
            Err(StatsError::NonNumericElement { index: 1 })
        );
    }

    #[test]
    fn rejects_infinities() {
        assert_eq!(
            Validator::validate_input(&[f64::INFINITY]),
            Err(StatsError::NonNumericElement { index: 0 })
        );
        assert_eq!(
            Validator::validate_input(&[0.0_f64, f64::NEG_INFINITY]),
            Err(StatsError::NonNumericElement { index: 1 })
        );
    }

    #[test]
    fn reports_first_offending_index() {
        assert_eq!(
            Validator::validate_input(&[f64::NAN, f64::NAN]),
            Err(StatsError::NonNumericElement { index: 0 })
        );
    }

    #[test]
    fn emptiness_is_checked_before_elements() {
        // An empty slice cannot contain a bad element; the cheaper check wins.
        let empty: [f32; 0] = [];
        assert_eq!(
            Validator::validate_input(&empty),
            Err(StatsError::EmptySequence)
        );
    }
}
