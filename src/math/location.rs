//! Location statistics: maximum, minimum, mean, and median.
//!
//! ## Purpose
//!
//! This module computes the statistics that describe where a dataset
//! sits on the number line. All functions operate on slices that have
//! already passed validation (non-empty, all elements finite).
//!
//! ## Design notes
//!
//! * Maximum and minimum are single folds; no copy is made.
//! * Mean accumulates in sequence order with plain floating-point
//!   addition.
//! * Median sorts a private copy and averages the two middle positions;
//!   the floor/ceil index pair collapses to a single position for odd
//!   lengths, so one formula covers both parities.
//! * All functions are generic over `Float` types to support f32 and f64.
//!
//! ## Invariants
//!
//! * `minimum(s) <= mean(s) <= maximum(s)` for validated input.
//! * `minimum(s) <= median(s) <= maximum(s)` for validated input.
//! * The input slice is never mutated.
//!
//! ## Non-goals
//!
//! * This module does not validate input; the engine layer does.
//! * This module does not handle non-finite values.
//!
//! ## Visibility
//!
//! Internal to the crate; the public surface lives in the API layer.

use num_traits::Float;

use crate::primitives::sorting::sorted_copy;

// ============================================================================
// Extremes
// ============================================================================

/// Largest element under natural numeric ordering.
pub fn maximum<T: Float>(numbers: &[T]) -> T {
    numbers.iter().copied().fold(T::neg_infinity(), T::max)
}

/// Smallest element under natural numeric ordering.
pub fn minimum<T: Float>(numbers: &[T]) -> T {
    numbers.iter().copied().fold(T::infinity(), T::min)
}

// ============================================================================
// Central Tendency
// ============================================================================

/// Arithmetic mean: sum of all elements divided by the element count.
pub fn mean<T: Float>(numbers: &[T]) -> T {
    let mut sum = T::zero();
    for &value in numbers {
        sum = sum + value;
    }

    sum / T::from(numbers.len()).unwrap()
}

/// Median of the values.
///
/// Sorts a private copy ascending, then averages the elements at
/// `floor((n-1)/2)` and `ceil((n-1)/2)`. For odd `n` both indices name
/// the same middle element; for even `n` they straddle the center.
pub fn median<T: Float>(numbers: &[T]) -> T {
    let sorted = sorted_copy(numbers);
    let n = sorted.len();

    let low = (n - 1) / 2;
    let high = n / 2;

    (sorted[low] + sorted[high]) / T::from(2.0).unwrap()
}

// ============================================================================
// Tests
// ============================================================================
