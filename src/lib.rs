//! Descriptive statistics over finite numeric sequences.
//!
//! ## Purpose
//!
//! This crate computes the seven classic descriptive statistics —
//! maximum, mean, median, minimum, mode, range and population standard
//! deviation — over an in-memory sequence of numbers, plus an
//! aggregator assembling all of them into one [`DescriptiveReport`].
//!
//! Every operation is a pure, single-step function from input to output
//! or error: no state is retained between calls, inputs are never
//! mutated, and any reordering (median, mode) happens on a private
//! copy.
//!
//! ## Usage
//!
//! ```
//! use descriptive_stats::prelude::*;
//!
//! let values = [1.0_f64, 2.0, 2.0, 3.0, 3.0];
//!
//! assert_eq!(maximum(&values), Ok(3.0));
//! assert_eq!(mode(&values), Ok(vec![2.0, 3.0]));
//!
//! let report = descriptive_statistics(&values)?;
//! assert_eq!(report.range, 2.0);
//! # Ok::<(), descriptive_stats::StatsError>(())
//! ```
//!
//! ## Validation
//!
//! Every operation independently validates its input before computing:
//! the input must be viewable as a contiguous sequence
//! ([`StatsError::NotASequence`]), non-empty
//! ([`StatsError::EmptySequence`]), and contain only finite numbers
//! ([`StatsError::NonNumericElement`]). Errors surface to the caller
//! unchanged; nothing is logged, retried, or partially returned.
//!
//! ## Features
//!
//! * **std** (default): standard library support. Disable for `no_std`
//!   (alloc-only) builds.
//! * **ndarray**: accept 1-D `ndarray` arrays at the API boundary.
//! * **parallel**: `rayon`-based evaluation of the independent
//!   sub-statistics inside the aggregator.
//!
//! ## Architecture
//!
//! ```text
//! Layer 4: API (operations, aggregator)
//!   ↓
//! Layer 3: Engine (validator, output)
//!   ↓
//! Layer 2: Math (location, dispersion, frequency)
//!   ↓
//! Layer 1: Primitives (errors, sorting)
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

/// Layer 1: Error types and sorting helpers.
pub mod primitives;

/// Layer 2: The statistical computations.
pub mod math;

/// Layer 3: Validation and the aggregate result type.
pub mod engine;

/// Input abstraction accepting slices, vectors, arrays and ndarray.
pub mod input;

/// Layer 4: Public operation surface.
pub mod api;

pub use api::{
    descriptive_statistics, maximum, mean, median, minimum, mode, range, standard_deviation,
    DescriptiveReport, Result, StatsError, StatsInput,
};

#[cfg(feature = "parallel")]
pub use api::descriptive_statistics_parallel;

/// Commonly used items, importable in one line.
pub mod prelude {
    pub use crate::api::{
        descriptive_statistics, maximum, mean, median, minimum, mode, range, standard_deviation,
        DescriptiveReport, Result, StatsError, StatsInput,
    };

    #[cfg(feature = "parallel")]
    pub use crate::api::descriptive_statistics_parallel;
}
