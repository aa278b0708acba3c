// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_carousel --heading-base-level=0

//! Understory Carousel: scroll-driven geometry for a three-item paged carousel.
//!
//! A carousel shows the previous, current, and next lot side by side. As the
//! user drags, the current item shrinks and slides away while the neighbour
//! being revealed grows into the center. This crate computes that geometry as
//! a continuous function of drag progress, so every scroll frame gets its own
//! center and size with no jumps between frames.
//!
//! The core concepts are:
//!
//! - [`Slot`]: the logical role of a visible item. Besides previous, current,
//!   and next, two *recycled* slots ([`Slot::PreviousUnderflow`] and
//!   [`Slot::NextOverflow`]) model items that the host's paging controller has
//!   already repurposed after they scrolled more than halfway off-screen.
//! - [`classify`]: maps an ordinal in the visible window (`0`, `1`, `2`) and a
//!   drag ratio to a [`Slot`].
//! - [`compute_metrics`]: resting and target sizes for a slot, preserving the
//!   content's aspect ratio exactly.
//! - [`compute_centers`]: resting and target center x for a slot, in the
//!   coordinates of a three-page track.
//! - [`interpolate`]: the linear blend applied with the magnitude of the drag
//!   ratio.
//! - [`CarouselLayout`]: an adapter that owns the viewport width and scroll
//!   state, pulls aspect ratios and thumbnails from a [`LotProvider`], and
//!   produces three [`ItemAttributes`] per pass.
//!
//! This crate deliberately does **not** know about views, image loading, or
//! when to advance to another lot. Host frameworks are responsible for:
//!
//! - Laying out a track three viewport widths wide and resting it at an
//!   offset of one viewport width.
//! - Forwarding resize and scroll notifications to [`CarouselLayout`].
//! - Drawing the returned attributes and recycling their views.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_carousel::{CarouselLayout, FnProvider, Slot};
//!
//! // Every lot is 3:2 landscape; thumbnails are just the relative index.
//! let provider = FnProvider::new(|_| 1.5, |index| index);
//! let mut layout = CarouselLayout::new(provider);
//! layout.set_viewport_width(320.0);
//!
//! // Drag three quarters of the way towards the next lot.
//! layout.on_scroll_position_changed(320.0 * 1.75);
//!
//! let [leading, current, next] = layout.layout_all();
//! // The leading item has been recycled into the lot after `next`.
//! assert_eq!(leading.slot, Slot::NextOverflow);
//! assert_eq!(leading.thumbnail, 3);
//! assert!(current.size.width < 300.0);
//! assert!(next.size.width > 200.0);
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`, `thiserror`, and `tracing`.
//! - `libm`: enables `no_std` builds of `kurbo` that rely on `libm` for floating-point math.
//! - `serde`: derives `Serialize`/`Deserialize` for [`CarouselConfig`].
//!
//! Diagnostics are emitted through `tracing`; install a subscriber in the host
//! to see them.
//!
//! This crate is `no_std`.

#![no_std]

mod centers;
mod config;
mod drag;
mod error;
mod layout;
mod metrics;
mod provider;
mod slot;

pub use centers::{CenterPositions, compute_centers, compute_centers_with, interpolate};
pub use config::{CROSS_EXTENT, CarouselConfig, LARGE_EXTENT, REVEAL_SLICE, SMALL_EXTENT};
pub use drag::DragState;
pub use error::ConfigError;
pub use layout::{CarouselLayout, ItemAttributes};
pub use metrics::{
    LayoutMetrics, MAX_ASPECT_RATIO, MIN_ASPECT_RATIO, compute_metrics, compute_metrics_with,
    sanitize_aspect_ratio,
};
pub use provider::{FnProvider, LotProvider};
pub use slot::{
    RECYCLE_THRESHOLD, ScrollDirection, Slot, VISIBLE_ITEMS, classify, classify_window,
    classify_with_threshold,
};
