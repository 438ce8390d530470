//! Input abstraction for statistic inputs.
//!
//! ## Purpose
//!
//! This module defines the [`StatsInput`] trait which allows every
//! public operation to accept slices, vectors, fixed-size arrays and
//! (with the `ndarray` feature) 1-D ndarray arrays interchangeably.
//!
//! ## Design notes
//!
//! * The trait moves the "is this a sequence of numbers?" question into
//!   the type system: anything that cannot be viewed as a contiguous
//!   `&[T]` is rejected at compile time or, for inputs whose layout is
//!   only known at runtime (non-contiguous ndarray views), fails with
//!   [`StatsError::NotASequence`].
//! * Conversion never copies; operations borrow the caller's data.
//!
//! ## Visibility
//!
//! [`StatsInput`] is part of the public API so that downstream code can
//! be generic over input containers.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(feature = "ndarray")]
use ndarray::{ArrayBase, Data, Ix1};
use num_traits::Float;

use crate::primitives::errors::StatsError;

/// Trait for types usable as input to the descriptive statistics.
pub trait StatsInput<T: Float> {
    /// View the input as a contiguous slice.
    fn as_stats_slice(&self) -> Result<&[T], StatsError>;
}

impl<T: Float> StatsInput<T> for [T] {
    fn as_stats_slice(&self) -> Result<&[T], StatsError> {
        Ok(self)
    }
}

impl<T: Float, const N: usize> StatsInput<T> for [T; N] {
    fn as_stats_slice(&self) -> Result<&[T], StatsError> {
        Ok(self)
    }
}

impl<T: Float> StatsInput<T> for Vec<T> {
    fn as_stats_slice(&self) -> Result<&[T], StatsError> {
        Ok(self.as_slice())
    }
}

#[cfg(feature = "ndarray")]
impl<T: Float, S> StatsInput<T> for ArrayBase<S, Ix1>
where
    S: Data<Elem = T>,
{
    fn as_stats_slice(&self) -> Result<&[T], StatsError> {
        self.as_slice().ok_or(StatsError::NotASequence)
    }
}
