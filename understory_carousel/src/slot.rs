// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Logical slots and the ordinal → slot classifier.
//!
//! The carousel always realizes three items, addressed by their *ordinal*
//! (`0`, `1`, `2`) inside the visible window. The paging controller that owns
//! the real "current lot" recycles an item into the opposite role once it has
//! scrolled more than halfway off-screen, but it never tells us when. The
//! classifier reproduces that decision from the drag ratio alone.

/// Drag ratio past which an off-screen item is treated as recycled.
///
/// The comparison is strict: a ratio of exactly `0.5` (or `-0.5`) keeps the
/// item in its normal role.
pub const RECYCLE_THRESHOLD: f64 = 0.5;

/// Number of items the carousel realizes at any time.
pub const VISIBLE_ITEMS: usize = 3;

/// Logical role of a visible item for the current frame.
///
/// The discriminant of each variant is its *relative index*: the signed offset
/// of the lot from the one preceding the current lot, as understood by the
/// lot provider.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    /// The trailing item, recycled into the lot before [`Slot::Previous`].
    PreviousUnderflow = -1,
    /// The lot just before the current one.
    Previous = 0,
    /// The focused lot.
    Current = 1,
    /// The lot just after the current one.
    Next = 2,
    /// The leading item, recycled into the lot after [`Slot::Next`].
    NextOverflow = 3,
}

impl Slot {
    /// All slots, ordered by relative index.
    pub const ALL: [Self; 5] = [
        Self::PreviousUnderflow,
        Self::Previous,
        Self::Current,
        Self::Next,
        Self::NextOverflow,
    ];

    /// Signed relative index passed to the lot provider.
    #[must_use]
    pub const fn relative_index(self) -> i32 {
        self as i32
    }

    /// Inverse of [`Slot::relative_index`].
    #[must_use]
    pub const fn from_relative_index(index: i32) -> Option<Self> {
        match index {
            -1 => Some(Self::PreviousUnderflow),
            0 => Some(Self::Previous),
            1 => Some(Self::Current),
            2 => Some(Self::Next),
            3 => Some(Self::NextOverflow),
            _ => None,
        }
    }

    /// Returns `true` for the two recycled slots.
    ///
    /// Recycled items already sit at their final size and position, so their
    /// geometry does not react to further scrolling.
    #[must_use]
    pub const fn is_under_overflow(self) -> bool {
        matches!(self, Self::PreviousUnderflow | Self::NextOverflow)
    }

    /// Returns `true` for slots laid out before the current lot.
    #[must_use]
    pub const fn is_previous_side(self) -> bool {
        matches!(self, Self::PreviousUnderflow | Self::Previous)
    }

    /// Returns `true` for slots laid out after the current lot.
    #[must_use]
    pub const fn is_next_side(self) -> bool {
        matches!(self, Self::Next | Self::NextOverflow)
    }
}

/// Which neighbour the user is dragging towards.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ScrollDirection {
    /// Content moves left; the next lot slides in.
    Next,
    /// Content moves right (or is at rest); the previous lot slides in.
    Previous,
}

impl ScrollDirection {
    /// Direction implied by a drag ratio.
    ///
    /// Only strictly positive ratios count as [`ScrollDirection::Next`]; a
    /// ratio of zero reports [`ScrollDirection::Previous`].
    #[must_use]
    pub fn from_drag_ratio(drag_ratio: f64) -> Self {
        if drag_ratio > 0.0 {
            Self::Next
        } else {
            Self::Previous
        }
    }
}

/// Classify a visible ordinal into its slot using [`RECYCLE_THRESHOLD`].
///
/// Returns `None` for ordinals outside `0..3`; hosts never ask for those.
#[must_use]
pub fn classify(ordinal: usize, drag_ratio: f64) -> Option<Slot> {
    classify_with_threshold(ordinal, drag_ratio, RECYCLE_THRESHOLD)
}

/// Like [`classify`], with an explicit recycle threshold.
#[must_use]
pub fn classify_with_threshold(ordinal: usize, drag_ratio: f64, threshold: f64) -> Option<Slot> {
    classify_window(drag_ratio, threshold).get(ordinal).copied()
}

/// Slots of the whole visible window, indexed by ordinal.
#[must_use]
pub fn classify_window(drag_ratio: f64, threshold: f64) -> [Slot; VISIBLE_ITEMS] {
    let leading = if drag_ratio > threshold {
        Slot::NextOverflow
    } else {
        Slot::Previous
    };
    let trailing = if drag_ratio < -threshold {
        Slot::PreviousUnderflow
    } else {
        Slot::Next
    };
    [leading, Slot::Current, trailing]
}
