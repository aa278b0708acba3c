// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types.

use thiserror::Error;

/// Reasons a [`CarouselConfig`](crate::CarouselConfig) is rejected.
#[derive(Copy, Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// An extent that must be strictly positive and finite was not.
    #[error("{field} must be finite and greater than zero, got {value}")]
    NonPositiveExtent {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// The reveal slice was negative or non-finite.
    #[error("reveal_slice must be finite and non-negative, got {0}")]
    InvalidRevealSlice(f64),
    /// The recycle threshold was outside the open interval `(0, 1)`.
    #[error("recycle_threshold must lie strictly between 0 and 1, got {0}")]
    InvalidRecycleThreshold(f64),
    /// The small extent was larger than the large extent.
    #[error("small_extent ({small}) must not exceed large_extent ({large})")]
    InvertedExtents {
        /// Configured small extent.
        small: f64,
        /// Configured large extent.
        large: f64,
    },
}
