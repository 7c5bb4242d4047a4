// SPDX-License-Identifier: MPL-2.0
//! The carousel state machine.
//!
//! [`Carousel`] owns the active index for an ordered list of media items and
//! advances it cyclically, one step per tick, wrapping modulo the item count.
//! It is purely synchronous: something else (normally
//! [`crate::driver::CarouselDriver`]) decides *when* [`Carousel::tick`] is
//! called. That split keeps every timing property testable without a clock.
//!
//! # Phases
//!
//! - [`Phase::Empty`]: no items, no active index, nothing to rotate.
//! - [`Phase::Static`]: exactly one item, active index fixed at 0; rotation
//!   would be a no-op, so no timer should be armed.
//! - [`Phase::Rotating`]: two or more items; ticks advance the index.
//! - [`Phase::Disposed`]: terminal; reached only via [`Carousel::dispose`].
//!
//! `initialize`/`replace_items` move between the first three phases based
//! solely on the new item count, so a list that arrives asynchronously after
//! the carousel was created is handled exactly like one present up front.

pub mod transition;

use crate::domain::item::MediaItem;
use crate::domain::newtypes::RotationInterval;
use crate::render::ItemFrame;

/// Lifecycle phase of a [`Carousel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No items; nothing to display or rotate.
    #[default]
    Empty,
    /// Exactly one item; displayed permanently without a timer.
    Static,
    /// Two or more items; a timer may advance the active index.
    Rotating,
    /// Torn down; no further state changes occur.
    Disposed,
}

impl Phase {
    /// Returns true if the carousel holds no items.
    #[must_use]
    pub fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns true if the carousel shows a single fixed item.
    #[must_use]
    pub fn is_static(self) -> bool {
        matches!(self, Self::Static)
    }

    /// Returns true if ticks advance the active index.
    #[must_use]
    pub fn is_rotating(self) -> bool {
        matches!(self, Self::Rotating)
    }

    /// Returns true if the carousel has been disposed.
    #[must_use]
    pub fn is_disposed(self) -> bool {
        matches!(self, Self::Disposed)
    }
}

/// Rotating media carousel over an ordered item list.
///
/// The active index is always a valid index into the item list whenever the
/// list is non-empty and the carousel is live; it is `None` otherwise. List
/// replacement re-validates the index: kept when still in range, reset to 0
/// when out of range, cleared when the new list is empty.
#[derive(Debug, Clone)]
pub struct Carousel<T: MediaItem> {
    items: Vec<T>,
    active_index: Option<usize>,
    /// Index the most recent tick advanced away from, for cross-fade.
    leaving_index: Option<usize>,
    interval: RotationInterval,
    phase: Phase,
    tick_count: u64,
}

impl<T: MediaItem> Carousel<T> {
    /// Creates an empty carousel with the given rotation interval.
    #[must_use]
    pub fn new(interval: RotationInterval) -> Self {
        Self {
            items: Vec::new(),
            active_index: None,
            leaving_index: None,
            interval,
            phase: Phase::Empty,
            tick_count: 0,
        }
    }

    /// Creates a carousel and seeds it with an initial item list.
    #[must_use]
    pub fn with_items(items: Vec<T>, interval: RotationInterval) -> Self {
        let mut carousel = Self::new(interval);
        carousel.initialize(items);
        carousel
    }

    /// Seeds the item list, resetting the active index to the first item.
    ///
    /// An empty list is valid and yields [`Phase::Empty`]. After disposal
    /// this is a no-op.
    pub fn initialize(&mut self, items: Vec<T>) {
        if self.phase.is_disposed() {
            return;
        }
        self.active_index = if items.is_empty() { None } else { Some(0) };
        self.leaving_index = None;
        self.items = items;
        self.phase = Self::phase_for_len(self.items.len());
    }

    /// Replaces the item list, re-validating the active index.
    ///
    /// The index is kept when still in range for the new list, reset to 0
    /// when out of range, and cleared when the new list is empty. Replacing
    /// with an identical list therefore leaves the index untouched. The
    /// carousel never animates through intermediate indices here.
    ///
    /// After disposal this is a no-op.
    pub fn replace_items(&mut self, new_items: Vec<T>) {
        if self.phase.is_disposed() {
            return;
        }

        let new_active = match self.active_index {
            Some(index) if index < new_items.len() => Some(index),
            _ if !new_items.is_empty() => Some(0),
            _ => None,
        };

        // A cross-fade in flight survives the swap only if both of its
        // endpoints still name the same items; otherwise the fade would pair
        // unrelated images.
        let fade_survives = match (self.active_index, new_active, self.leaving_index) {
            (Some(old), Some(new), Some(leaving)) if old == new => {
                Self::same_key(&self.items, &new_items, old)
                    && Self::same_key(&self.items, &new_items, leaving)
            }
            _ => false,
        };

        self.active_index = new_active;
        if !fade_survives {
            self.leaving_index = None;
        }
        self.items = new_items;
        self.phase = Self::phase_for_len(self.items.len());
    }

    /// Advances the active index by exactly one step, wrapping around.
    ///
    /// Only meaningful in [`Phase::Rotating`]; in every other phase this is
    /// a no-op. Returns whether an advance happened.
    pub fn tick(&mut self) -> bool {
        if !self.phase.is_rotating() {
            return false;
        }
        let Some(index) = self.active_index else {
            return false;
        };

        self.leaving_index = Some(index);
        self.active_index = Some((index + 1) % self.items.len());
        self.tick_count += 1;
        true
    }

    /// Tears the carousel down. Idempotent; every later operation is a no-op.
    pub fn dispose(&mut self) {
        self.phase = Phase::Disposed;
        self.active_index = None;
        self.leaving_index = None;
        self.items.clear();
    }

    /// Marks the in-flight cross-fade as finished.
    ///
    /// Called by the renderer once the outgoing item has fully faded; until
    /// then [`Self::frames`] keeps reporting it as leaving.
    pub fn finish_fade(&mut self) {
        self.leaving_index = None;
    }

    /// Returns the current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the configured rotation interval.
    #[must_use]
    pub fn interval(&self) -> RotationInterval {
        self.interval
    }

    /// Returns the active index, if the carousel is live and non-empty.
    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        self.active_index
    }

    /// Returns the index the last tick advanced away from, while the
    /// cross-fade is still in flight.
    #[must_use]
    pub fn leaving_index(&self) -> Option<usize> {
        self.leaving_index
    }

    /// Returns the currently active item, if any.
    #[must_use]
    pub fn active_item(&self) -> Option<&T> {
        self.active_index.and_then(|index| self.items.get(index))
    }

    /// Returns the number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks whether the item list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the item list in display order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Returns how many ticks have advanced this carousel since creation.
    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Returns a per-item snapshot for the renderer.
    ///
    /// Exactly one frame is active at a time; at most one additional frame is
    /// marked leaving while a cross-fade is in flight. Everything else is
    /// inactive. Disposed or empty carousels yield no frames.
    #[must_use]
    pub fn frames(&self) -> Vec<ItemFrame<'_, T>> {
        self.items
            .iter()
            .enumerate()
            .map(|(index, item)| ItemFrame {
                key: item.key(),
                item,
                index,
                active: self.active_index == Some(index),
                leaving: self.leaving_index == Some(index),
            })
            .collect()
    }

    fn phase_for_len(len: usize) -> Phase {
        match len {
            0 => Phase::Empty,
            1 => Phase::Static,
            _ => Phase::Rotating,
        }
    }

    fn same_key(old: &[T], new: &[T], index: usize) -> bool {
        match (old.get(index), new.get(index)) {
            (Some(a), Some(b)) => a.key() == b.key(),
            _ => false,
        }
    }
}
