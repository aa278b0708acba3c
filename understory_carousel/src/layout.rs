// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The layout adapter driven by the host's scroll and resize notifications.

use kurbo::{Point, Rect, Size};

use crate::centers::{compute_centers_with, interpolate};
use crate::drag::DragState;
use crate::metrics::compute_metrics_with;
use crate::slot::{Slot, VISIBLE_ITEMS, classify_window};
use crate::{CarouselConfig, ConfigError, LotProvider};

/// Geometry of one visible item for the current frame.
#[derive(Clone, Debug, PartialEq)]
pub struct ItemAttributes<T> {
    /// Position in the visible window, `0..3`.
    pub ordinal: usize,
    /// Logical role the item plays this frame.
    pub slot: Slot,
    /// Center in track coordinates.
    pub center: Point,
    /// Interpolated size.
    pub size: Size,
    /// Thumbnail handle from the [`LotProvider`].
    pub thumbnail: T,
}

impl<T> ItemAttributes<T> {
    /// The item's frame in track coordinates.
    #[must_use]
    pub fn frame(&self) -> Rect {
        Rect::from_center_size(self.center, self.size)
    }
}

/// Layout adapter for a three-item carousel.
///
/// The host owns the actual views and the paging controller. It forwards
/// resize and scroll notifications here and draws whatever
/// [`CarouselLayout::layout_all`] returns. Nothing is cached between passes:
/// every scroll change invalidates all three items and the next pass
/// recomputes them from scratch.
///
/// ```rust
/// use understory_carousel::{CarouselLayout, FnProvider, Slot};
///
/// let provider = FnProvider::new(|_| 2.0, |index| index);
/// let mut layout = CarouselLayout::new(provider);
/// layout.set_viewport_width(320.0);
/// layout.on_scroll_position_changed(320.0);
///
/// let items = layout.layout_all();
/// assert_eq!(items[1].slot, Slot::Current);
/// assert_eq!(items[1].size.width, 300.0);
/// ```
#[derive(Debug)]
pub struct CarouselLayout<P> {
    provider: P,
    config: CarouselConfig,
    viewport_width: f64,
    content_offset_x: f64,
    drag: DragState,
}

impl<P: LotProvider> CarouselLayout<P> {
    /// Creates an adapter with the default design grid and a zero-width viewport.
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            config: CarouselConfig::default(),
            viewport_width: 0.0,
            content_offset_x: 0.0,
            drag: DragState::REST,
        }
    }

    /// Creates an adapter with a custom configuration.
    pub fn with_config(provider: P, config: CarouselConfig) -> Result<Self, ConfigError> {
        let config = config.validate()?;
        Ok(Self {
            config,
            ..Self::new(provider)
        })
    }

    /// Returns the lot provider.
    #[must_use]
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Returns the current viewport width.
    #[must_use]
    pub const fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    /// Returns the drag state derived from the last scroll notification.
    #[must_use]
    pub const fn drag(&self) -> DragState {
        self.drag
    }

    /// Updates the viewport width and re-derives the drag state.
    ///
    /// Negative and non-finite widths are stored as `0`, which lays every
    /// item out at rest.
    pub fn set_viewport_width(&mut self, width: f64) {
        let width = if width.is_finite() { width.max(0.0) } else { 0.0 };
        if width != self.viewport_width {
            tracing::debug!(width, "carousel viewport resized");
        }
        self.viewport_width = width;
        self.drag = DragState::from_offset(self.content_offset_x, self.viewport_width);
    }

    /// Alias for [`CarouselLayout::set_viewport_width`] matching host naming.
    pub fn on_viewport_width_changed(&mut self, width: f64) {
        self.set_viewport_width(width);
    }

    /// Records a new horizontal content offset.
    pub fn on_scroll_position_changed(&mut self, content_offset_x: f64) {
        self.content_offset_x = content_offset_x;
        self.drag = DragState::from_offset(content_offset_x, self.viewport_width);
    }

    /// Whether a scroll to `new_offset` requires a fresh layout pass.
    ///
    /// Always `true`: every scroll change moves all three items.
    #[must_use]
    pub fn should_invalidate_for_offset(&self, _new_offset: f64) -> bool {
        true
    }

    /// Size the host should give each page of the track.
    #[must_use]
    pub const fn item_size_hint(&self) -> Size {
        Size::new(self.viewport_width, self.config.cross_extent)
    }

    /// Total size of the three-page track.
    #[must_use]
    pub fn content_size(&self) -> Size {
        Size::new(
            self.viewport_width * VISIBLE_ITEMS as f64,
            self.config.cross_extent,
        )
    }

    /// Content offset at which the carousel rests on the current lot.
    #[must_use]
    pub const fn resting_offset(&self) -> f64 {
        self.viewport_width
    }

    /// Lays out all three visible items for the current drag state.
    #[must_use]
    pub fn layout_all(&self) -> [ItemAttributes<P::Thumbnail>; VISIBLE_ITEMS] {
        tracing::trace!(
            drag_ratio = self.drag.ratio(),
            direction = ?self.drag.direction(),
            "carousel layout pass"
        );
        self.layout_window(self.drag)
    }

    /// Lays out all three items for an explicit drag ratio, leaving the
    /// stored scroll state untouched.
    #[must_use]
    pub fn layout_all_at(&self, drag_ratio: f64) -> [ItemAttributes<P::Thumbnail>; VISIBLE_ITEMS] {
        self.layout_window(DragState::from_ratio(drag_ratio))
    }

    /// Returns the visible items for a host query over `rect`.
    ///
    /// The requested region is ignored: the carousel always shows exactly
    /// three items.
    #[must_use]
    pub fn attributes_in_rect(&self, _rect: Rect) -> [ItemAttributes<P::Thumbnail>; VISIBLE_ITEMS] {
        self.layout_all()
    }

    /// Lays out a single ordinal, or `None` outside `0..3`.
    #[must_use]
    pub fn attributes_for_ordinal(&self, ordinal: usize) -> Option<ItemAttributes<P::Thumbnail>> {
        let ratio = self.drag.ratio();
        let slots = classify_window(ratio, self.config.recycle_threshold);
        slots
            .get(ordinal)
            .map(|&slot| self.layout_item(ordinal, slot, ratio))
    }

    fn layout_window(&self, drag: DragState) -> [ItemAttributes<P::Thumbnail>; VISIBLE_ITEMS] {
        let ratio = drag.ratio();
        let slots = classify_window(ratio, self.config.recycle_threshold);
        core::array::from_fn(|ordinal| self.layout_item(ordinal, slots[ordinal], ratio))
    }

    fn layout_item(&self, ordinal: usize, slot: Slot, ratio: f64) -> ItemAttributes<P::Thumbnail> {
        let index = slot.relative_index();
        let aspect_ratio = self.provider.aspect_ratio(index);
        let metrics = compute_metrics_with(slot, aspect_ratio, &self.config);
        let centers = compute_centers_with(
            slot,
            &metrics,
            ratio,
            self.viewport_width,
            self.viewport_width / 2.0,
            &self.config,
        );

        ItemAttributes {
            ordinal,
            slot,
            center: Point::new(
                interpolate(centers.resting_center_x, centers.target_center_x, ratio),
                self.config.cross_extent / 2.0,
            ),
            size: Size::new(
                interpolate(metrics.resting_width, metrics.target_width, ratio),
                interpolate(metrics.resting_height, metrics.target_height, ratio),
            ),
            thumbnail: self.provider.thumbnail(index),
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Rect, Size};

    use super::CarouselLayout;
    use crate::{CarouselConfig, ConfigError, FnProvider, LotProvider, Slot};

    const W: f64 = 320.0;

    /// Wide current lot, tall neighbours, thumbnails are the relative index.
    struct Lots;

    impl LotProvider for Lots {
        type Thumbnail = i32;

        fn aspect_ratio(&self, relative_index: i32) -> f64 {
            if relative_index == 1 { 2.0 } else { 0.75 }
        }

        fn thumbnail(&self, relative_index: i32) -> i32 {
            relative_index
        }
    }

    fn layout_at(offset: f64) -> CarouselLayout<Lots> {
        let mut layout = CarouselLayout::new(Lots);
        layout.set_viewport_width(W);
        layout.on_scroll_position_changed(offset);
        layout
    }

    #[test]
    fn resting_layout_matches_resting_metrics() {
        let layout = layout_at(W);
        let [prev, current, next] = layout.layout_all();

        assert_eq!(current.slot, Slot::Current);
        assert_eq!(current.size, Size::new(300.0, 150.0));
        assert_eq!(current.center.x, W / 2.0 + W);
        assert_eq!(current.center.y, 150.0);

        assert_eq!(prev.slot, Slot::Previous);
        assert_eq!(prev.size, Size::new(150.0, 200.0));
        assert_eq!(prev.frame().x1, W + 20.0, "previous peeks in by the slice");

        assert_eq!(next.slot, Slot::Next);
        assert_eq!(next.frame().x0, 2.0 * W - 20.0, "next peeks in by the slice");
    }

    #[test]
    fn full_drag_to_next_reaches_target_metrics() {
        let layout = layout_at(2.0 * W);
        let [leading, current, next] = layout.layout_all();

        assert_eq!(current.size, Size::new(200.0, 100.0));
        assert_eq!(current.center.x, (20.0 + (20.0 - 200.0)) / 2.0 + 2.0 * W);

        assert_eq!(next.slot, Slot::Next);
        assert_eq!(next.size.height, 300.0);
        assert_eq!(next.center.x, W / 2.0 + 2.0 * W);

        assert_eq!(leading.slot, Slot::NextOverflow);
        assert_eq!(leading.thumbnail, 3, "provider is asked for the overflow lot");
    }

    #[test]
    fn recycled_item_is_scroll_invariant() {
        let a = layout_at(W * 1.6).layout_all();
        let b = layout_at(W * 1.9).layout_all();
        assert_eq!(a[0].slot, Slot::NextOverflow);
        assert_eq!(a[0].center, b[0].center);
        assert_eq!(a[0].size, b[0].size);

        let a = layout_at(W * 0.4).layout_all();
        let b = layout_at(W * 0.05).layout_all();
        assert_eq!(a[2].slot, Slot::PreviousUnderflow);
        assert_eq!(a[2].center, b[2].center);
    }

    #[test]
    fn half_drag_is_halfway() {
        let layout = layout_at(W * 1.5);
        let [leading, current, _] = layout.layout_all();
        assert_eq!(current.size, Size::new(250.0, 125.0));
        assert_eq!(leading.slot, Slot::Previous, "0.5 does not recycle");
    }

    #[test]
    fn zero_viewport_lays_out_at_rest() {
        let mut layout = CarouselLayout::new(Lots);
        layout.on_scroll_position_changed(500.0);
        assert!(layout.drag().is_at_rest(), "no width means no drag");
        let items = layout.layout_all();
        assert_eq!(items[1].size, Size::new(300.0, 150.0));
        assert_eq!(items.len(), 3);
    }

    #[test]
    fn resize_rederives_drag_from_stored_offset() {
        let mut layout = CarouselLayout::new(Lots);
        layout.on_scroll_position_changed(480.0);
        layout.set_viewport_width(W);
        assert_eq!(layout.drag().ratio(), 0.5);
        assert_eq!(layout.item_size_hint(), Size::new(W, 300.0));
        assert_eq!(layout.content_size(), Size::new(3.0 * W, 300.0));
        assert_eq!(layout.resting_offset(), W);

        layout.on_viewport_width_changed(f64::NAN);
        assert_eq!(layout.viewport_width(), 0.0);
    }

    #[test]
    fn region_queries_always_return_the_whole_window() {
        let layout = layout_at(W * 1.2);
        let tiny = Rect::new(0.0, 0.0, 1.0, 1.0);
        let items = layout.attributes_in_rect(tiny);
        assert_eq!(items.map(|item| item.ordinal), [0, 1, 2]);
        assert!(layout.should_invalidate_for_offset(W * 1.21), "every scroll relayouts");
    }

    #[test]
    fn single_ordinal_queries() {
        let layout = layout_at(W * 0.3);
        let item = layout.attributes_for_ordinal(2).expect("ordinal 2 is visible");
        assert_eq!(item.slot, Slot::PreviousUnderflow);
        assert_eq!(item, layout.layout_all()[2]);
        assert!(layout.attributes_for_ordinal(3).is_none(), "only three items exist");
    }

    #[test]
    fn explicit_ratio_does_not_touch_scroll_state() {
        let layout = layout_at(W);
        let items = layout.layout_all_at(-1.0);
        assert_eq!(items[1].size, Size::new(200.0, 100.0));
        assert!(layout.drag().is_at_rest(), "stored drag is unchanged");
    }

    #[test]
    fn custom_config_changes_grid_and_threshold() {
        let config = CarouselConfig::default()
            .with_extents(400.0, 100.0)
            .with_reveal_slice(0.0)
            .with_recycle_threshold(0.25);
        let provider = FnProvider::new(|_| 1.0, |_| ());
        let mut layout = CarouselLayout::with_config(provider, config).expect("valid config");
        layout.set_viewport_width(W);
        layout.on_scroll_position_changed(W * 1.3);

        let [leading, current, _] = layout.layout_all();
        assert_eq!(leading.slot, Slot::NextOverflow);
        assert_eq!(leading.size, Size::new(100.0, 100.0));
        let expected = 400.0 + 0.3 * (100.0 - 400.0);
        assert!(
            (current.size.width - expected).abs() < 1e-9,
            "expected {expected}, got {}",
            current.size.width
        );
    }

    #[test]
    fn invalid_config_is_rejected() {
        let provider = FnProvider::new(|_| 1.0, |_| ());
        let config = CarouselConfig::default().with_recycle_threshold(1.5);
        assert_eq!(
            CarouselLayout::with_config(provider, config).unwrap_err(),
            ConfigError::InvalidRecycleThreshold(1.5)
        );
    }

    #[test]
    fn bad_aspect_ratio_never_produces_degenerate_geometry() {
        let provider = FnProvider::new(|_| f64::NAN, |_| ());
        let mut layout = CarouselLayout::new(provider);
        layout.set_viewport_width(W);
        layout.on_scroll_position_changed(W * 1.4);
        for item in layout.layout_all() {
            assert!(item.size.width > 0.0 && item.size.height > 0.0, "{item:?}");
            assert!(item.center.x.is_finite(), "{item:?}");
        }
    }
}
