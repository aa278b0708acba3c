// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Horizontal centers per slot and the frame interpolation.
//!
//! The host stacks three viewport-wide pages side by side, so all positions
//! here are in *track* coordinates: page `0` spans `0..w`, page `1` spans
//! `w..2w` and page `2` spans `2w..3w`, where `w` is the viewport width. At
//! rest the current item is centered in page `1` while the neighbours peek in
//! by the reveal slice from pages `0` and `2`.

use crate::CarouselConfig;
use crate::metrics::LayoutMetrics;
use crate::slot::{ScrollDirection, Slot};

/// Center x at rest and after a full-page drag.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CenterPositions {
    /// Center x at drag ratio `0`.
    pub resting_center_x: f64,
    /// Center x at drag ratio `±1`.
    pub target_center_x: f64,
}

impl CenterPositions {
    /// Returns `true` when the item does not move while scrolling.
    #[must_use]
    pub fn is_stationary(&self) -> bool {
        self.resting_center_x == self.target_center_x
    }
}

/// Linear blend from `resting` to `target` by the magnitude of `ratio`.
///
/// The sign of `ratio` is ignored: direction only selects which target
/// geometry was computed, never the blend.
#[must_use]
pub fn interpolate(resting: f64, target: f64, ratio: f64) -> f64 {
    resting + ratio.abs() * (target - resting)
}

/// Compute the centers for `slot` with the default reveal slice.
///
/// `viewport_mid_x` is the midpoint of a single page (normally half of
/// `viewport_width`).
#[must_use]
pub fn compute_centers(
    slot: Slot,
    metrics: &LayoutMetrics,
    drag_ratio: f64,
    viewport_width: f64,
    viewport_mid_x: f64,
) -> CenterPositions {
    compute_centers_with(
        slot,
        metrics,
        drag_ratio,
        viewport_width,
        viewport_mid_x,
        &CarouselConfig::default(),
    )
}

/// Like [`compute_centers`], with the reveal slice taken from `config`.
#[must_use]
pub fn compute_centers_with(
    slot: Slot,
    metrics: &LayoutMetrics,
    drag_ratio: f64,
    viewport_width: f64,
    viewport_mid_x: f64,
    config: &CarouselConfig,
) -> CenterPositions {
    let direction = ScrollDirection::from_drag_ratio(drag_ratio);
    let slice = config.reveal_slice;
    let w = viewport_width;

    match slot {
        Slot::Current => {
            let resting_center_x = viewport_mid_x + w;
            let target_center_x = match direction {
                // Right edge ends `slice` past the start of page 2.
                ScrollDirection::Next => {
                    let right = slice;
                    let left = right - metrics.target_width;
                    midpoint(left, right) + 2.0 * w
                }
                // Left edge ends `slice` short of the end of page 0.
                ScrollDirection::Previous => {
                    let left = w - slice;
                    let right = left + metrics.target_width;
                    midpoint(left, right)
                }
            };
            CenterPositions {
                resting_center_x,
                target_center_x,
            }
        }
        Slot::Next | Slot::NextOverflow => {
            let pages = if slot.is_under_overflow() { 3.0 } else { 2.0 };
            let left = pages * w - slice;
            let right = left + metrics.resting_width;
            let resting_center_x = midpoint(left, right);
            let target_center_x =
                if slot.is_under_overflow() || direction == ScrollDirection::Previous {
                    resting_center_x
                } else {
                    viewport_mid_x + 2.0 * w
                };
            CenterPositions {
                resting_center_x,
                target_center_x,
            }
        }
        Slot::Previous | Slot::PreviousUnderflow => {
            let shift = if slot.is_under_overflow() { w } else { 0.0 };
            let right = slice - shift + w;
            let left = right - metrics.resting_width;
            let resting_center_x = midpoint(left, right);
            let target_center_x = if slot.is_under_overflow() || direction == ScrollDirection::Next
            {
                resting_center_x
            } else {
                viewport_mid_x
            };
            CenterPositions {
                resting_center_x,
                target_center_x,
            }
        }
    }
}

fn midpoint(a: f64, b: f64) -> f64 {
    (a + b) / 2.0
}
