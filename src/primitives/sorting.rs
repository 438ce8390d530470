//! Sorting utilities for statistics that depend on order.
//!
//! ## Purpose
//!
//! Median and mode operate on an ascending view of the data. This module
//! provides the private-copy sort they share, so that caller-supplied
//! input is never reordered in place.
//!
//! ## Design notes
//!
//! * The copy-then-sort pattern keeps every public operation free of
//!   observable side effects on its input.
//! * Comparison falls back to `Ordering::Equal` for incomparable pairs;
//!   validated input contains only finite values, so the fallback is
//!   never taken on the normal path.
//!
//! ## Non-goals
//!
//! * This module does not validate input; callers validate first.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use core::cmp::Ordering;
use num_traits::Float;

/// Return an ascending-sorted copy of `values`. The input is untouched.
pub fn sorted_copy<T: Float>(values: &[T]) -> Vec<T> {
    let mut copy = values.to_vec();
    copy.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    copy
}
