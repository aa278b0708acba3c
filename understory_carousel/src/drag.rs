// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag progress derived from the host's scroll offset.

use crate::slot::ScrollDirection;

/// Signed scroll progress for one frame.
///
/// The track is three pages wide and rests with the middle page in view, so
/// a content offset equal to the viewport width is a drag ratio of `0`.
/// Positive ratios move towards the next lot, negative ones towards the
/// previous lot.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct DragState {
    drag_ratio: f64,
}

impl DragState {
    /// The resting state.
    pub const REST: Self = Self { drag_ratio: 0.0 };

    /// Derive the drag state from a horizontal content offset.
    ///
    /// A zero, negative, or non-finite viewport width yields the resting
    /// state, as does a non-finite offset. Offsets beyond either end of the
    /// track (elastic overscroll) are clamped to a full-page drag.
    #[must_use]
    pub fn from_offset(content_offset_x: f64, viewport_width: f64) -> Self {
        if !(viewport_width.is_finite() && viewport_width > 0.0) || !content_offset_x.is_finite() {
            return Self::REST;
        }
        Self::from_ratio((content_offset_x - viewport_width) / viewport_width)
    }

    /// Wrap an already computed ratio, clamping it into `-1.0..=1.0`.
    ///
    /// NaN is treated as the resting state.
    #[must_use]
    pub fn from_ratio(drag_ratio: f64) -> Self {
        if drag_ratio.is_nan() {
            return Self::REST;
        }
        Self {
            drag_ratio: drag_ratio.clamp(-1.0, 1.0),
        }
    }

    /// The drag ratio in `-1.0..=1.0`.
    #[must_use]
    pub const fn ratio(&self) -> f64 {
        self.drag_ratio
    }

    /// Which neighbour is being revealed.
    #[must_use]
    pub fn direction(&self) -> ScrollDirection {
        ScrollDirection::from_drag_ratio(self.drag_ratio)
    }

    /// Returns `true` when no drag is in progress.
    #[must_use]
    pub fn is_at_rest(&self) -> bool {
        self.drag_ratio == 0.0
    }
}
