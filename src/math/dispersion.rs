//! Dispersion statistics: population standard deviation.
//!
//! ## Purpose
//!
//! This module measures the spread of a dataset around its mean. The
//! range statistic also measures spread but is composed from the two
//! extremes at the API layer, so only the standard deviation lives here.
//!
//! ## Design notes
//!
//! * Population formula: `sqrt(sum((x_i - mean)^2) / n)`. The sample
//!   variant (`n - 1` divisor) changes the numeric result and is
//!   deliberately not offered.
//! * Squared deviations accumulate in sequence order with plain
//!   floating-point addition.
//!
//! ## Invariants
//!
//! * `standard_deviation(s) >= 0` for validated input.
//! * `standard_deviation(s) == 0` iff all elements are equal.
//!
//! ## Non-goals
//!
//! * This module does not validate input; the engine layer does.
//! * No weighted or sample variants.

use num_traits::Float;

use crate::math::location::mean;

/// Population standard deviation of the values.
pub fn standard_deviation<T: Float>(numbers: &[T]) -> T {
    let mean_value = mean(numbers);

    let mut sum_of_squares = T::zero();
    for &value in numbers {
        let deviation = value - mean_value;
        sum_of_squares = sum_of_squares + deviation * deviation;
    }

    (sum_of_squares / T::from(numbers.len()).unwrap()).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn population_formula_exact_case() {
        // Classic population example: variance 4, deviation 2.
        let values = [2.0_f64, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((standard_deviation(&values) - 2.0).abs() < 1e-15);
    }

    #[test]
    fn uniform_values_have_zero_deviation() {
        assert!(standard_deviation(&[5.0_f64, 5.0, 5.0]).abs() < 1e-15);
    }

    #[test]
    fn single_element_has_zero_deviation() {
        assert!(standard_deviation(&[42.0_f64]).abs() < 1e-15);
    }

    #[test]
    fn three_values_match_closed_form() {
        // For [1, 2, 3]: mean 2, squared deviations 1 + 0 + 1, sd = sqrt(2/3).
        let expected = (2.0_f64 / 3.0).sqrt();
        assert!((standard_deviation(&[1.0_f64, 2.0, 3.0]) - expected).abs() < 1e-15);
    }

    #[test]
    fn deviation_is_never_negative() {
        assert!(standard_deviation(&[-8.0_f64, -1.0, -5.0]) >= 0.0);
    }
}
