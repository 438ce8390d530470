//! Frequency statistics: the (possibly multi-valued) mode.
//!
//! ## Purpose
//!
//! This module finds the values that occur most often in a dataset. The
//! mode is multi-valued: every value tied for the highest occurrence
//! count is returned, ascending and duplicate-free.
//!
//! ## Design notes
//!
//! * Frequencies are counted by run-length scanning an ascending-sorted
//!   private copy. Equal values are adjacent after sorting, so one pass
//!   yields the count of every distinct value without hashing floats.
//! * The scan collects values in sorted order, so the result needs no
//!   second sort and contains no duplicates by construction.
//! * When every value is unique, all values tie at frequency 1 and all
//!   are returned. Degenerate, but it is what "most frequent" means
//!   with no single-mode assumption.
//!
//! ## Invariants
//!
//! * The result is strictly ascending with no duplicate values.
//! * Every returned value occurs in the input with the same, maximal
//!   frequency.
//! * The result is non-empty for validated (non-empty) input.
//!
//! ## Non-goals
//!
//! * This module does not validate input; the engine layer does.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use num_traits::Float;

use crate::primitives::sorting::sorted_copy;

/// All values sharing the maximum occurrence count, ascending and unique.
pub fn mode<T: Float>(numbers: &[T]) -> Vec<T> {
    let sorted = sorted_copy(numbers);

    let mut modes = Vec::new();
    let mut best_count = 0;

    // Walk runs of equal values in the sorted copy.
    let mut start = 0;
    while start < sorted.len() {
        let value = sorted[start];

        let mut end = start + 1;
        while end < sorted.len() && sorted[end] == value {
            end += 1;
        }

        let count = end - start;
        if count > best_count {
            best_count = count;
            modes.clear();
            modes.push(value);
        } else if count == best_count {
            modes.push(value);
        }

        start = end;
    }

    modes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_values_tie_for_most_frequent() {
        assert_eq!(mode(&[1.0_f64, 2.0, 2.0, 3.0, 3.0]), vec![2.0, 3.0]);
    }

    #[test]
    fn single_clear_winner() {
        assert_eq!(mode(&[1.0_f64, 2.0, 2.0, 3.0]), vec![2.0]);
    }

    #[test]
    fn all_unique_values_all_tie() {
        assert_eq!(mode(&[3.0_f64, 1.0, 2.0]), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn single_element() {
        assert_eq!(mode(&[4.0_f64]), vec![4.0]);
    }

    #[test]
    fn result_is_ascending_regardless_of_input_order() {
        assert_eq!(mode(&[5.0_f64, 5.0, 1.0, 1.0, 3.0]), vec![1.0, 5.0]);
    }

    #[test]
    fn input_is_untouched() {
        let values = [2.0_f64, 1.0, 2.0];
        let _ = mode(&values);
        assert_eq!(values, [2.0, 1.0, 2.0]);
    }
}
