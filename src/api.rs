//! Layer 4: API
//!
//! ## Purpose
//!
//! This module provides the public operation surface: the seven
//! descriptive statistics plus the [`descriptive_statistics`]
//! aggregator. Every operation converts its input through
//! [`StatsInput`], runs validation, then delegates to the math layer.
//!
//! ## Design notes
//!
//! * **Independently safe**: each operation validates for itself; no
//!   validated-state is shared or cached between calls.
//! * **Pure**: no operation mutates its input or retains state between
//!   calls, so repeated calls on unchanged input return identical
//!   results.
//! * **Composed range**: `range` is built from `maximum` and `minimum`
//!   rather than an independent scan, inheriting their validation.
//! * **Fail-fast aggregation**: the aggregator returns the first
//!   validation error one of its sub-operations produces; no partial
//!   report is ever returned.
//!
//! ## Visibility
//!
//! This is the primary public API. Types re-exported here are
//! considered stable.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use core::result;
use num_traits::Float;

use crate::engine::validator::Validator;
use crate::math::{dispersion, frequency, location};

// Publicly re-exported types
pub use crate::engine::output::DescriptiveReport;
pub use crate::input::StatsInput;
pub use crate::primitives::errors::StatsError;

/// Result type alias for descriptive-statistics operations.
pub type Result<T> = result::Result<T, StatsError>;

// ============================================================================
// Single-Value Operations
// ============================================================================

/// Largest value in the input.
pub fn maximum<T: Float, I: StatsInput<T> + ?Sized>(numbers: &I) -> Result<T> {
    let data = numbers.as_stats_slice()?;
    Validator::validate_input(data)?;

    Ok(location::maximum(data))
}

/// Smallest value in the input.
pub fn minimum<T: Float, I: StatsInput<T> + ?Sized>(numbers: &I) -> Result<T> {
    let data = numbers.as_stats_slice()?;
    Validator::validate_input(data)?;

    Ok(location::minimum(data))
}

/// Arithmetic mean of the input.
pub fn mean<T: Float, I: StatsInput<T> + ?Sized>(numbers: &I) -> Result<T> {
    let data = numbers.as_stats_slice()?;
    Validator::validate_input(data)?;

    Ok(location::mean(data))
}

/// Median of the input.
///
/// For even-length input this is the mean of the two middle values of
/// the ascending order; for odd-length input, the middle value itself.
pub fn median<T: Float, I: StatsInput<T> + ?Sized>(numbers: &I) -> Result<T> {
    let data = numbers.as_stats_slice()?;
    Validator::validate_input(data)?;

    Ok(location::median(data))
}

/// All values tied for the highest occurrence count, ascending and
/// duplicate-free.
///
/// When every value is unique they all tie at frequency 1 and all are
/// returned.
pub fn mode<T: Float, I: StatsInput<T> + ?Sized>(numbers: &I) -> Result<Vec<T>> {
    let data = numbers.as_stats_slice()?;
    Validator::validate_input(data)?;

    Ok(frequency::mode(data))
}

/// Difference between the largest and smallest value.
pub fn range<T: Float, I: StatsInput<T> + ?Sized>(numbers: &I) -> Result<T> {
    Ok(maximum(numbers)? - minimum(numbers)?)
}

/// Population standard deviation of the input.
///
/// Divides the sum of squared deviations by the full count `n`, not
/// `n - 1`.
pub fn standard_deviation<T: Float, I: StatsInput<T> + ?Sized>(numbers: &I) -> Result<T> {
    let data = numbers.as_stats_slice()?;
    Validator::validate_input(data)?;

    Ok(dispersion::standard_deviation(data))
}

// ============================================================================
// Aggregator
// ============================================================================

/// Compute all seven statistics over the same input.
///
/// Each sub-operation validates independently; the first failure aborts
/// the whole call and no partial report is returned.
pub fn descriptive_statistics<T: Float, I: StatsInput<T> + ?Sized>(
    numbers: &I,
) -> Result<DescriptiveReport<T>> {
    Ok(DescriptiveReport {
        maximum: maximum(numbers)?,
        mean: mean(numbers)?,
        median: median(numbers)?,
        minimum: minimum(numbers)?,
        mode: mode(numbers)?,
        range: range(numbers)?,
        standard_deviation: standard_deviation(numbers)?,
    })
}

/// Parallel variant of [`descriptive_statistics`].
///
/// The sub-statistics are mutually independent and read-only over the
/// same input, so they are evaluated with `rayon::join`. Results are
/// bit-identical to the sequential path.
#[cfg(feature = "parallel")]
pub fn descriptive_statistics_parallel<T, I>(numbers: &I) -> Result<DescriptiveReport<T>>
where
    T: Float + Send + Sync,
    I: StatsInput<T> + ?Sized,
{
    let data = numbers.as_stats_slice()?;

    let ((max_result, min_result), ((mean_result, sd_result), (median_result, mode_result))) =
        rayon::join(
            || (maximum(data), minimum(data)),
            || {
                rayon::join(
                    || (mean(data), standard_deviation(data)),
                    || (median(data), mode(data)),
                )
            },
        );

    let maximum = max_result?;
    let minimum = min_result?;

    Ok(DescriptiveReport {
        maximum,
        mean: mean_result?,
        median: median_result?,
        minimum,
        mode: mode_result?,
        range: maximum - minimum,
        standard_deviation: sd_result?,
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_operation_validates_independently() {
        let empty: [f64; 0] = [];
        assert_eq!(maximum(&empty), Err(StatsError::EmptySequence));
        assert_eq!(mean(&empty), Err(StatsError::EmptySequence));
        assert_eq!(median(&empty), Err(StatsError::EmptySequence));
        assert_eq!(minimum(&empty), Err(StatsError::EmptySequence));
        assert_eq!(mode(&empty), Err(StatsError::EmptySequence));
        assert_eq!(range(&empty), Err(StatsError::EmptySequence));
        assert_eq!(standard_deviation(&empty), Err(StatsError::EmptySequence));
    }

    #[test]
    fn non_finite_elements_are_rejected_everywhere() {
        let bad = [1.0_f64, f64::NAN];
        let expected = Err(StatsError::NonNumericElement { index: 1 });

        assert_eq!(maximum(&bad), expected);
        assert_eq!(range(&bad), expected);
        assert_eq!(standard_deviation(&bad), expected);
        assert_eq!(descriptive_statistics(&bad).map(|_| ()), expected.map(|_: f64| ()));
    }

    #[test]
    fn range_composes_the_extremes() {
        assert_eq!(range(&[5.0_f64, 1.0, 9.0, 3.0]), Ok(8.0));
    }

    #[test]
    fn aggregator_populates_every_field() {
        let report = descriptive_statistics(&[1.0_f64, 2.0, 3.0]).unwrap();

        assert_eq!(report.maximum, 3.0);
        assert_eq!(report.mean, 2.0);
        assert_eq!(report.median, 2.0);
        assert_eq!(report.minimum, 1.0);
        assert_eq!(report.mode, vec![1.0, 2.0, 3.0]);
        assert_eq!(report.range, 2.0);
        assert!((report.standard_deviation - (2.0_f64 / 3.0).sqrt()).abs() < 1e-15);
    }

    #[test]
    fn operations_accept_vecs_and_slices() {
        let vec = vec![3.0_f64, 1.0, 2.0];
        let slice: &[f64] = &[3.0, 1.0, 2.0];

        assert_eq!(maximum(&vec), Ok(3.0));
        assert_eq!(maximum(slice), Ok(3.0));
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_aggregator_matches_sequential() {
        let values = [2.0_f64, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];

        let sequential = descriptive_statistics(&values).unwrap();
        let parallel = descriptive_statistics_parallel(&values).unwrap();

        assert_eq!(sequential, parallel);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_aggregator_fails_on_invalid_input() {
        let empty: [f64; 0] = [];
        assert_eq!(
            descriptive_statistics_parallel(&empty).map(|_| ()),
            Err(StatsError::EmptySequence)
        );
    }
}
