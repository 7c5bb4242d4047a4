// SPDX-License-Identifier: MPL-2.0
//! `media_carousel` is a timer-driven rotating media carousel engine.
//!
//! It owns the active-index/timer state machine for an ordered, possibly
//! changing list of media items: fixed-period advance with wrap-around,
//! cross-fade between the outgoing and incoming item, and deterministic
//! teardown of the single timer each live carousel holds.
//!
//! The engine itself ([`Carousel`]) is synchronous and runtime-agnostic; the
//! [`driver::CarouselDriver`] pairs it with a Tokio timer task. Item lists
//! come from any [`source`] (a static list, or a remote JSON endpoint with a
//! static fallback) and are handed to renderers as [`render::ItemFrame`]
//! snapshots.

#![doc(html_root_url = "https://docs.rs/media_carousel/0.1.0")]

pub mod carousel;
pub mod config;
pub mod domain;
pub mod driver;
pub mod error;
pub mod render;
pub mod source;

#[cfg(test)]
pub mod test_utils;

pub use carousel::{Carousel, Phase};
pub use domain::item::{MediaItem, MediaRecord};
pub use domain::newtypes::RotationInterval;
pub use error::{Error, Result};
