// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resting and target sizes per slot.
//!
//! Sizes live on a fixed design grid: the dominant axis of an item is either
//! the large or the small extent, and the other axis is derived from the
//! content's aspect ratio so that it is preserved exactly. Wide content
//! (`aspect_ratio > 1`) is dominated by width; tall and square content by
//! height.

use kurbo::Size;

use crate::CarouselConfig;
use crate::slot::Slot;

/// Smallest aspect ratio accepted from a lot provider.
pub const MIN_ASPECT_RATIO: f64 = 1.0e-3;
/// Largest aspect ratio accepted from a lot provider.
pub const MAX_ASPECT_RATIO: f64 = 1.0e3;

/// Item size at rest (drag ratio `0`) and at a full drag (`±1`).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayoutMetrics {
    /// Width at rest.
    pub resting_width: f64,
    /// Height at rest.
    pub resting_height: f64,
    /// Width after a full-page drag.
    pub target_width: f64,
    /// Height after a full-page drag.
    pub target_height: f64,
}

impl LayoutMetrics {
    /// Resting size as a [`Size`].
    #[must_use]
    pub const fn resting_size(&self) -> Size {
        Size::new(self.resting_width, self.resting_height)
    }

    /// Target size as a [`Size`].
    #[must_use]
    pub const fn target_size(&self) -> Size {
        Size::new(self.target_width, self.target_height)
    }
}

/// Compute the metrics for `slot` with the default design grid.
///
/// `aspect_ratio` is width over height and is expected to be positive and
/// finite; see [`sanitize_aspect_ratio`] for what happens otherwise.
#[must_use]
pub fn compute_metrics(slot: Slot, aspect_ratio: f64) -> LayoutMetrics {
    compute_metrics_with(slot, aspect_ratio, &CarouselConfig::default())
}

/// Compute the metrics for `slot` using the extents from `config`.
#[must_use]
pub fn compute_metrics_with(slot: Slot, aspect_ratio: f64, config: &CarouselConfig) -> LayoutMetrics {
    let aspect_ratio = sanitize_aspect_ratio(aspect_ratio);
    let large = config.large_extent;
    let small = config.small_extent;

    // Dominant-axis extents. The current item shrinks as it leaves, normal
    // neighbours grow as they arrive, and recycled items never change.
    let (resting, target) = match slot {
        Slot::Current => (large, small),
        Slot::PreviousUnderflow | Slot::NextOverflow => (small, small),
        Slot::Previous | Slot::Next => (small, large),
    };

    // Exactly square content takes the height-dominant path.
    if aspect_ratio > 1.0 {
        LayoutMetrics {
            resting_width: resting,
            resting_height: resting / aspect_ratio,
            target_width: target,
            target_height: target / aspect_ratio,
        }
    } else {
        LayoutMetrics {
            resting_width: resting * aspect_ratio,
            resting_height: resting,
            target_width: target * aspect_ratio,
            target_height: target,
        }
    }
}

/// Bring a provider-supplied aspect ratio into the range the engine accepts.
///
/// NaN becomes `1.0` (square). Everything else, including zero, negative, and
/// infinite values, is clamped into [`MIN_ASPECT_RATIO`]..=[`MAX_ASPECT_RATIO`],
/// which keeps every computed extent finite and non-zero. Values that needed
/// adjusting are reported through `tracing`.
#[must_use]
pub fn sanitize_aspect_ratio(aspect_ratio: f64) -> f64 {
    if aspect_ratio.is_nan() {
        tracing::warn!("lot provider returned a NaN aspect ratio; laying out as square");
        return 1.0;
    }
    let clamped = aspect_ratio.clamp(MIN_ASPECT_RATIO, MAX_ASPECT_RATIO);
    if clamped != aspect_ratio {
        tracing::warn!(
            aspect_ratio,
            clamped,
            "lot provider returned an aspect ratio outside the supported range"
        );
    }
    clamped
}

#[cfg(test)]
mod tests {
    use super::{MAX_ASPECT_RATIO, MIN_ASPECT_RATIO, compute_metrics, sanitize_aspect_ratio};
    use crate::slot::Slot;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "expected {b}, got {a}");
    }

    #[test]
    fn wide_current_shrinks_from_large_to_small() {
        let m = compute_metrics(Slot::Current, 2.0);
        assert_eq!(m.resting_width, 300.0);
        assert_eq!(m.resting_height, 150.0);
        assert_eq!(m.target_width, 200.0);
        assert_eq!(m.target_height, 100.0);
    }

    #[test]
    fn wide_neighbours_grow_and_recycled_items_stay_put() {
        let next = compute_metrics(Slot::Next, 1.5);
        assert_eq!(next.resting_width, 200.0);
        assert_eq!(next.target_width, 300.0);
        assert_close(next.target_height, 200.0);

        let overflow = compute_metrics(Slot::NextOverflow, 1.5);
        assert_eq!(overflow.resting_size(), overflow.target_size());
        assert_eq!(overflow.resting_width, 200.0);
    }

    #[test]
    fn tall_items_are_height_dominant() {
        let m = compute_metrics(Slot::Current, 0.5);
        assert_eq!(m.resting_height, 300.0);
        assert_eq!(m.resting_width, 150.0);
        assert_eq!(m.target_height, 200.0);
        assert_eq!(m.target_width, 100.0);

        let prev = compute_metrics(Slot::Previous, 0.5);
        assert_eq!(prev.resting_height, 200.0);
        assert_eq!(prev.target_height, 300.0);

        let underflow = compute_metrics(Slot::PreviousUnderflow, 0.5);
        assert_eq!(underflow.resting_height, 200.0);
        assert_eq!(underflow.target_height, 200.0);
    }

    #[test]
    fn square_content_takes_height_path() {
        let m = compute_metrics(Slot::Current, 1.0);
        assert_eq!(m.resting_width, 300.0);
        assert_eq!(m.resting_height, 300.0);
        // Just above 1 switches to the width-dominant branch.
        let wide = compute_metrics(Slot::Current, 1.0 + 1e-9);
        assert_eq!(wide.resting_width, 300.0);
        assert!(wide.resting_height < 300.0, "height should derive from width");
    }

    #[test]
    fn aspect_ratio_is_preserved_for_every_slot() {
        for slot in Slot::ALL {
            for ar in [0.25, 0.75, 1.0, 4.0 / 3.0, 16.0 / 9.0, 3.0] {
                let m = compute_metrics(slot, ar);
                assert_close(m.resting_width / m.resting_height, ar);
                assert_close(m.target_width / m.target_height, ar);
            }
        }
    }

    #[test]
    fn invalid_aspect_ratios_are_sanitized() {
        assert_eq!(sanitize_aspect_ratio(f64::NAN), 1.0);
        assert_eq!(sanitize_aspect_ratio(0.0), MIN_ASPECT_RATIO);
        assert_eq!(sanitize_aspect_ratio(-3.0), MIN_ASPECT_RATIO);
        assert_eq!(sanitize_aspect_ratio(f64::INFINITY), MAX_ASPECT_RATIO);
        assert_eq!(sanitize_aspect_ratio(1.25), 1.25);

        let m = compute_metrics(Slot::Current, 0.0);
        assert!(m.resting_width > 0.0 && m.resting_width.is_finite());
        let m = compute_metrics(Slot::Current, f64::INFINITY);
        assert!(m.resting_height > 0.0 && m.resting_height.is_finite());
    }
}
