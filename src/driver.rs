// SPDX-License-Identifier: MPL-2.0
//! Tokio-backed timer ownership for a [`Carousel`].
//!
//! Each live driver holds at most one timer task. Arming happens only behind
//! the explicit `initialize`/`replace_items` boundary, never implicitly per
//! repaint: the previous task is always aborted before a new one is spawned,
//! and a new one is spawned only when the carousel actually rotates (two or
//! more items). The first tick fires one full period after the most recent
//! arm, not immediately, and missed ticks are skipped rather than bursted.
//!
//! [`CarouselDriver::dispose`] (also run from `Drop`) aborts the task
//! synchronously before the state goes away, so a torn-down view never has a
//! timer firing against it.

use crate::carousel::Carousel;
use crate::domain::item::MediaItem;
use crate::domain::newtypes::RotationInterval;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

/// Shared handle to a driver's carousel, for renderers running elsewhere.
pub type SharedCarousel<T> = Arc<Mutex<Carousel<T>>>;

/// Owns one [`Carousel`] plus the single timer task that advances it.
#[derive(Debug)]
pub struct CarouselDriver<T: MediaItem + Send + 'static> {
    shared: SharedCarousel<T>,
    timer: Option<JoinHandle<()>>,
}

impl<T: MediaItem + Send + 'static> CarouselDriver<T> {
    /// Creates a driver around an empty carousel. No timer is armed until a
    /// list with two or more items arrives.
    #[must_use]
    pub fn new(interval: RotationInterval) -> Self {
        Self {
            shared: Arc::new(Mutex::new(Carousel::new(interval))),
            timer: None,
        }
    }

    /// Seeds the item list and (re)arms the timer as appropriate.
    pub fn initialize(&mut self, items: Vec<T>) {
        self.with_mut(|carousel| carousel.initialize(items));
        self.rearm();
    }

    /// Replaces the item list, re-validating the index, and re-establishes
    /// the timer schedule: the pending tick is cancelled and a fresh one is
    /// scheduled one full period out, only if the new list still rotates.
    pub fn replace_items(&mut self, items: Vec<T>) {
        self.with_mut(|carousel| carousel.replace_items(items));
        self.rearm();
    }

    /// Cancels any pending timer and disposes the carousel. Idempotent.
    pub fn dispose(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
        self.with_mut(Carousel::dispose);
    }

    /// Returns a shared handle for renderers to snapshot frames from.
    #[must_use]
    pub fn carousel(&self) -> SharedCarousel<T> {
        Arc::clone(&self.shared)
    }

    /// Runs a closure against the carousel state.
    pub fn with<R>(&self, f: impl FnOnce(&Carousel<T>) -> R) -> R {
        let guard = self.shared.lock().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    /// Returns the key of the currently active item, if any.
    #[must_use]
    pub fn active_key(&self) -> Option<String> {
        self.with(|carousel| carousel.active_item().map(|item| item.key().to_string()))
    }

    /// Returns how many ticks have advanced the carousel.
    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.with(Carousel::tick_count)
    }

    /// Returns true while a timer task is live.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.timer.as_ref().is_some_and(|timer| !timer.is_finished())
    }

    fn with_mut<R>(&self, f: impl FnOnce(&mut Carousel<T>) -> R) -> R {
        let mut guard = self.shared.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    fn rearm(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
        if !self.with(|carousel| carousel.phase().is_rotating()) {
            return;
        }

        let period = self.with(Carousel::interval).as_duration();
        let shared = Arc::clone(&self.shared);

        match Handle::try_current() {
            Ok(handle) => {
                let first_tick = time::Instant::now() + period;
                self.timer = Some(handle.spawn(async move {
                    let mut ticker = time::interval_at(first_tick, period);
                    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
                    loop {
                        ticker.tick().await;
                        let advanced = {
                            let mut carousel =
                                shared.lock().unwrap_or_else(PoisonError::into_inner);
                            carousel.tick()
                        };
                        // The carousel was disposed or shrank under us; the
                        // next rearm/dispose aborts this task, stop early.
                        if !advanced {
                            break;
                        }
                    }
                }));
            }
            Err(_) => {
                log::warn!(
                    "no tokio runtime available; carousel stays static until driven manually"
                );
            }
        }
    }
}

impl<T: MediaItem + Send + 'static> Drop for CarouselDriver<T> {
    fn drop(&mut self) {
        self.dispose();
    }
}
