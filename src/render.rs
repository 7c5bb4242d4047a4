// SPDX-License-Identifier: MPL-2.0
//! The contract the carousel exposes to its renderer.
//!
//! The carousel does not prescribe markup, styling or transition curves. Per
//! item it reports only identity and activity ([`ItemFrame`]); per paint it
//! offers failure isolation ([`Visual`]): a single item that fails to load is
//! replaced by a fallback visual without the carousel ever hearing about it,
//! so one broken image never stops rotation of the others.

use crate::domain::item::MediaItem;

/// Read-only per-item snapshot handed to the renderer.
///
/// Produced by [`crate::Carousel::frames`]. Exactly one frame is active at a
/// time; at most one additional frame is marked `leaving` while a cross-fade
/// is in flight.
#[derive(Debug, Clone, Copy)]
pub struct ItemFrame<'a, T: MediaItem> {
    /// The item to paint.
    pub item: &'a T,
    /// Stable key for efficient re-paint.
    pub key: &'a str,
    /// Position in display order.
    pub index: usize,
    /// Whether this item is the active one (full opacity).
    pub active: bool,
    /// Whether this item is fading out after the most recent advance.
    pub leaving: bool,
}

/// What the renderer actually paints for one item.
///
/// Built from the outcome of the renderer's own load attempt. Load failures
/// stay inside the renderer: the carousel state is unaffected and rotation
/// continues over the full list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visual<'a, T: MediaItem> {
    /// The item loaded; paint it.
    Ready(&'a T),
    /// The item failed to load; paint the fallback visual instead.
    Fallback,
}

impl<'a, T: MediaItem> Visual<'a, T> {
    /// Resolves a load outcome into a paintable visual.
    pub fn from_result<E>(item: &'a T, outcome: Result<(), E>) -> Self {
        match outcome {
            Ok(()) => Visual::Ready(item),
            Err(_) => Visual::Fallback,
        }
    }

    /// Returns true if the fallback visual will be painted.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        matches!(self, Visual::Fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::Carousel;
    use crate::domain::newtypes::RotationInterval;

    #[test]
    fn load_failure_resolves_to_fallback() {
        let item = "broken.jpg".to_string();
        let visual = Visual::from_result(&item, Err("404"));
        assert!(visual.is_fallback());

        let visual = Visual::from_result(&item, Ok::<(), &str>(()));
        assert_eq!(visual, Visual::Ready(&item));
    }

    #[test]
    fn one_broken_item_does_not_stop_rotation() {
        let items = vec!["a.jpg".to_string(), "broken.jpg".to_string(), "c.jpg".to_string()];
        let mut carousel = Carousel::with_items(items, RotationInterval::from_millis(3_000));

        // The renderer fails to load item 1; carousel state is untouched.
        let frames = carousel.frames();
        let visual = Visual::from_result(frames[1].item, Err("timeout"));
        assert!(visual.is_fallback());
        assert_eq!(carousel.active_index(), Some(0));
        assert_eq!(carousel.len(), 3);

        // Rotation still passes through the broken slot.
        carousel.tick();
        assert_eq!(carousel.active_index(), Some(1));
        carousel.tick();
        assert_eq!(carousel.active_index(), Some(2));
    }
}
