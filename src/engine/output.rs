//! Output types for descriptive statistics.
//!
//! ## Purpose
//!
//! This module defines the [`DescriptiveReport`] struct returned by the
//! aggregator, bundling all seven statistics computed over one input
//! sequence.
//!
//! ## Design notes
//!
//! * Results are generic over `Float` types to support f32 and f64.
//! * Implements `Display` for a human-readable one-per-line summary.
//! * Convenience queries cover the common "is there a single mode?"
//!   question.
//!
//! ## Invariants
//!
//! * All scalar fields are finite for validated input.
//! * `mode` is ascending, duplicate-free, and non-empty.
//! * `range == maximum - minimum` and `minimum <= mean <= maximum`.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.
//!
//! ## Visibility
//!
//! [`DescriptiveReport`] is part of the public API and is the result
//! type of the aggregator.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use core::fmt;
use num_traits::Float;

// ============================================================================
// Report Structure
// ============================================================================

/// All seven descriptive statistics for one input sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct DescriptiveReport<T> {
    /// Largest value.
    pub maximum: T,

    /// Arithmetic mean.
    pub mean: T,

    /// Median (middle value, or mean of the two middle values).
    pub median: T,

    /// Smallest value.
    pub minimum: T,

    /// All values tied for the highest occurrence count, ascending.
    pub mode: Vec<T>,

    /// Difference between maximum and minimum.
    pub range: T,

    /// Population standard deviation.
    pub standard_deviation: T,
}

impl<T: Float> DescriptiveReport<T> {
    // ========================================================================
    // Query Methods
    // ========================================================================

    /// Check if more than one value ties for the highest frequency.
    pub fn is_multimodal(&self) -> bool {
        self.mode.len() > 1
    }

    /// The single most frequent value, if exactly one exists.
    pub fn unique_mode(&self) -> Option<T> {
        match self.mode.as_slice() {
            [single] => Some(*single),
            _ => None,
        }
    }
}

impl<T: Float + fmt::Display> fmt::Display for DescriptiveReport<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "maximum:            {}", self.maximum)?;
        writeln!(f, "mean:               {}", self.mean)?;
        writeln!(f, "median:             {}", self.median)?;
        writeln!(f, "minimum:            {}", self.minimum)?;

        write!(f, "mode:               [")?;
        for (i, value) in self.mode.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        writeln!(f, "]")?;

        writeln!(f, "range:              {}", self.range)?;
        write!(f, "standard deviation: {}", self.standard_deviation)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> DescriptiveReport<f64> {
        DescriptiveReport {
            maximum: 3.0,
            mean: 2.0,
            median: 2.0,
            minimum: 1.0,
            mode: vec![1.0, 2.0, 3.0],
            range: 2.0,
            standard_deviation: (2.0_f64 / 3.0).sqrt(),
        }
    }

    #[test]
    fn multimodal_queries() {
        let report = sample_report();
        assert!(report.is_multimodal());
        assert_eq!(report.unique_mode(), None);

        let unimodal = DescriptiveReport {
            mode: vec![2.0],
            ..report
        };
        assert!(!unimodal.is_multimodal());
        assert_eq!(unimodal.unique_mode(), Some(2.0));
    }

    #[test]
    fn display_lists_every_statistic() {
        let text = sample_report().to_string();
        assert!(text.contains("maximum:            3"));
        assert!(text.contains("mode:               [1, 2, 3]"));
        assert!(text.contains("standard deviation: 0.816"));
    }
}
