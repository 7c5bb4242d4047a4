// SPDX-License-Identifier: MPL-2.0
//! The item contract the carousel requires, and the concrete remote-catalog
//! record.
//!
//! The carousel never interprets item content. It needs exactly one thing
//! from an item: a stable key, so a renderer can re-paint efficiently and a
//! list refresh can tell "same item" from "different item at the same slot".

use serde::{Deserialize, Serialize};

/// An opaque media item with a stable identity.
///
/// Implemented for plain strings (an image URL is its own key) and for
/// [`MediaRecord`]. Keys must be stable across list refreshes for the same
/// logical item.
pub trait MediaItem {
    /// Returns the stable key identifying this item.
    fn key(&self) -> &str;
}

impl MediaItem for String {
    fn key(&self) -> &str {
        self
    }
}

impl MediaItem for &str {
    fn key(&self) -> &str {
        self
    }
}

/// A media item as delivered by a remote catalog endpoint.
///
/// The wire shape is a JSON array of objects with at least `id` and
/// `image_url`; unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaRecord {
    /// Stable identity of the item across refreshes.
    pub id: String,
    /// Location of the media to paint.
    pub image_url: String,
    /// Optional caption shown by the renderer.
    #[serde(default)]
    pub caption: Option<String>,
}

impl MediaItem for MediaRecord {
    fn key(&self) -> &str {
        &self.id
    }
}
