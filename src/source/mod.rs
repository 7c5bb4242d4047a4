// SPDX-License-Identifier: MPL-2.0
//! Data sources producing the carousel's item list.
//!
//! The carousel does not know how items were fetched; a source's only job is
//! to yield an ordered, finite, possibly empty list that gets handed to
//! [`crate::Carousel::replace_items`]. Fetch failures are a source concern:
//! [`http::HttpSource`] recovers by substituting its static fallback list, so
//! the carousel always receives *some* valid list.

pub mod http;

pub use http::HttpSource;

use crate::domain::item::MediaItem;

/// A fixed in-memory item list.
///
/// Used directly for parent-supplied items and as the fallback inside
/// [`HttpSource`].
#[derive(Debug, Clone, Default)]
pub struct StaticSource<T: MediaItem> {
    items: Vec<T>,
}

impl<T: MediaItem + Clone> StaticSource<T> {
    /// Creates a source over the given items; order is display order.
    #[must_use]
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Returns the current item list.
    #[must_use]
    pub fn items(&self) -> Vec<T> {
        self.items.clone()
    }

    /// Returns the number of items this source yields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks whether this source yields no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
