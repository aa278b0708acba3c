// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Design-grid constants for the carousel.

use crate::ConfigError;
use crate::slot::RECYCLE_THRESHOLD;

/// Extent of the dominant axis for the focused item.
pub const LARGE_EXTENT: f64 = 300.0;
/// Extent of the dominant axis for neighbouring items.
pub const SMALL_EXTENT: f64 = 200.0;
/// How much of a neighbouring item peeks into the viewport.
pub const REVEAL_SLICE: f64 = 20.0;
/// Fixed secondary dimension of the per-page item size hint.
pub const CROSS_EXTENT: f64 = 300.0;

/// Tunable constants used by the geometry engine and layout adapter.
///
/// [`CarouselConfig::default`] reproduces the stock design grid: a 300/200
/// dominant axis, a 20 unit reveal slice, and recycling past half a page.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CarouselConfig {
    /// Dominant-axis extent of an item at its largest.
    pub large_extent: f64,
    /// Dominant-axis extent of an item at its smallest.
    pub small_extent: f64,
    /// Width of the neighbouring items' sliver left visible at rest.
    pub reveal_slice: f64,
    /// Drag ratio past which off-screen items are treated as recycled.
    pub recycle_threshold: f64,
    /// Height of each page in the track.
    pub cross_extent: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            large_extent: LARGE_EXTENT,
            small_extent: SMALL_EXTENT,
            reveal_slice: REVEAL_SLICE,
            recycle_threshold: RECYCLE_THRESHOLD,
            cross_extent: CROSS_EXTENT,
        }
    }
}

impl CarouselConfig {
    /// Sets the large and small dominant-axis extents.
    #[must_use]
    pub const fn with_extents(mut self, large: f64, small: f64) -> Self {
        self.large_extent = large;
        self.small_extent = small;
        self
    }

    /// Sets the reveal slice.
    #[must_use]
    pub const fn with_reveal_slice(mut self, reveal_slice: f64) -> Self {
        self.reveal_slice = reveal_slice;
        self
    }

    /// Sets the recycle threshold.
    #[must_use]
    pub const fn with_recycle_threshold(mut self, threshold: f64) -> Self {
        self.recycle_threshold = threshold;
        self
    }

    /// Sets the page height.
    #[must_use]
    pub const fn with_cross_extent(mut self, cross_extent: f64) -> Self {
        self.cross_extent = cross_extent;
        self
    }

    /// Checks that every constant can produce non-degenerate geometry.
    pub fn validate(self) -> Result<Self, ConfigError> {
        for (field, value) in [
            ("large_extent", self.large_extent),
            ("small_extent", self.small_extent),
            ("cross_extent", self.cross_extent),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NonPositiveExtent { field, value });
            }
        }
        if self.small_extent > self.large_extent {
            return Err(ConfigError::InvertedExtents {
                small: self.small_extent,
                large: self.large_extent,
            });
        }
        if !(self.reveal_slice.is_finite() && self.reveal_slice >= 0.0) {
            return Err(ConfigError::InvalidRevealSlice(self.reveal_slice));
        }
        // Written to reject NaN as well.
        if !(self.recycle_threshold > 0.0 && self.recycle_threshold < 1.0) {
            return Err(ConfigError::InvalidRecycleThreshold(self.recycle_threshold));
        }
        Ok(self)
    }
}
