// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scrubbing a carousel through a full drag in both directions.
//!
//! This example drives `understory_carousel::CarouselLayout` the way a host
//! scroll view would: it reports a viewport width, then feeds a sequence of
//! content offsets and prints the frame of every visible item.
//!
//! Run:
//! - `RUST_LOG=understory_carousel=trace cargo run -p understory_demos --example carousel_scrub`

use tracing_subscriber::EnvFilter;
use understory_carousel::{CarouselLayout, LotProvider};

/// A tiny catalogue: a landscape lot between two portrait lots.
struct Catalogue;

impl LotProvider for Catalogue {
    type Thumbnail = &'static str;

    fn aspect_ratio(&self, relative_index: i32) -> f64 {
        match relative_index {
            1 => 16.0 / 9.0,
            0 | 2 => 3.0 / 4.0,
            _ => 1.0,
        }
    }

    fn thumbnail(&self, relative_index: i32) -> &'static str {
        match relative_index {
            -1 => "lot-before-previous.jpg",
            0 => "previous.jpg",
            1 => "current.jpg",
            2 => "next.jpg",
            _ => "lot-after-next.jpg",
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut layout = CarouselLayout::new(Catalogue);
    layout.on_viewport_width_changed(320.0);
    println!(
        "track {:?}, page {:?}",
        layout.content_size(),
        layout.item_size_hint()
    );

    let width = layout.viewport_width();
    // Offsets from a full drag back to the previous lot to a full drag onto the next one.
    let offsets = (0..=8).map(|step| f64::from(step) * width / 4.0);

    for offset in offsets {
        layout.on_scroll_position_changed(offset);
        println!("offset {offset:>6.1}  drag {:+.2}", layout.drag().ratio());
        for item in layout.layout_all() {
            let frame = item.frame();
            println!(
                "  #{} {:<18} x0 {:>7.1}  x1 {:>7.1}  {:>5.1}×{:<5.1} {}",
                item.ordinal,
                format!("{:?}", item.slot),
                frame.x0,
                frame.x1,
                item.size.width,
                item.size.height,
                item.thumbnail,
            );
        }
    }
}
