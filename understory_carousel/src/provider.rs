// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Read-only source of per-lot content information.

use core::fmt;

/// Supplies content information for lots around the current one.
///
/// `relative_index` is a [`Slot`](crate::Slot)'s relative index, in `-1..=3`.
/// Both methods are called once per visible item on every layout pass, on
/// the host's UI thread, so they must be cheap and must not block. Any
/// asynchronous work (such as fetching thumbnails) belongs behind the
/// returned handle.
pub trait LotProvider {
    /// Opaque thumbnail handle threaded through to the host renderer.
    type Thumbnail;

    /// Width over height of the lot's content. Must be positive and finite.
    fn aspect_ratio(&self, relative_index: i32) -> f64;

    /// Thumbnail reference for the lot.
    fn thumbnail(&self, relative_index: i32) -> Self::Thumbnail;
}

impl<P: LotProvider + ?Sized> LotProvider for &P {
    type Thumbnail = P::Thumbnail;

    fn aspect_ratio(&self, relative_index: i32) -> f64 {
        (**self).aspect_ratio(relative_index)
    }

    fn thumbnail(&self, relative_index: i32) -> Self::Thumbnail {
        (**self).thumbnail(relative_index)
    }
}

/// A [`LotProvider`] built from a pair of closures.
///
/// ```rust
/// use understory_carousel::{FnProvider, LotProvider};
///
/// let provider = FnProvider::new(|_| 1.5, |index| index * 10);
/// assert_eq!(provider.aspect_ratio(2), 1.5);
/// assert_eq!(provider.thumbnail(2), 20);
/// ```
pub struct FnProvider<A, F> {
    aspect_ratio: A,
    thumbnail: F,
}

impl<A, F, T> FnProvider<A, F>
where
    A: Fn(i32) -> f64,
    F: Fn(i32) -> T,
{
    /// Wraps an aspect-ratio callback and a thumbnail callback.
    pub fn new(aspect_ratio: A, thumbnail: F) -> Self {
        Self {
            aspect_ratio,
            thumbnail,
        }
    }
}

impl<A, F, T> LotProvider for FnProvider<A, F>
where
    A: Fn(i32) -> f64,
    F: Fn(i32) -> T,
{
    type Thumbnail = T;

    fn aspect_ratio(&self, relative_index: i32) -> f64 {
        (self.aspect_ratio)(relative_index)
    }

    fn thumbnail(&self, relative_index: i32) -> T {
        (self.thumbnail)(relative_index)
    }
}

impl<A, F> fmt::Debug for FnProvider<A, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnProvider").finish_non_exhaustive()
    }
}
