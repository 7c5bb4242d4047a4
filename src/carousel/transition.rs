// SPDX-License-Identifier: MPL-2.0
//! Cross-fade opacity curve.
//!
//! The carousel's index change is atomic; the visual hand-off is not. While a
//! fade is in flight both the incoming and the outgoing item are painted, the
//! incoming one rising from 0 to 1 and the outgoing one falling from 1 to 0.
//! This module computes those opacities from elapsed time; the renderer owns
//! when to sample it and calls [`crate::Carousel::finish_fade`] once done.

use std::time::Duration;

/// Default cross-fade length.
pub const DEFAULT_FADE: Duration = Duration::from_millis(600);

/// Opacity pair for one sampled moment of a cross-fade.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeOpacities {
    /// Opacity of the incoming (newly active) item, in `[0, 1]`.
    pub incoming: f32,
    /// Opacity of the outgoing (leaving) item, in `[0, 1]`.
    pub outgoing: f32,
}

/// A linear cross-fade of fixed duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrossFade {
    duration: Duration,
}

impl CrossFade {
    /// Creates a cross-fade with the given duration.
    ///
    /// A zero duration is treated as an instantaneous cut: any sample
    /// reports the fade as complete.
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }

    /// Returns the fade duration.
    #[must_use]
    pub fn duration(self) -> Duration {
        self.duration
    }

    /// Returns the progress fraction in `[0, 1]` for the given elapsed time.
    #[must_use]
    pub fn progress(self, elapsed: Duration) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let fraction = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        fraction.clamp(0.0, 1.0)
    }

    /// Samples the incoming/outgoing opacities at the given elapsed time.
    #[must_use]
    pub fn opacities(self, elapsed: Duration) -> FadeOpacities {
        let progress = self.progress(elapsed);
        FadeOpacities {
            incoming: progress,
            outgoing: 1.0 - progress,
        }
    }

    /// Returns true once the fade has fully completed.
    #[must_use]
    pub fn is_complete(self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }
}

impl Default for CrossFade {
    fn default() -> Self {
        Self::new(DEFAULT_FADE)
    }
}
