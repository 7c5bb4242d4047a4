// SPDX-License-Identifier: MPL-2.0
//! Carousel domain newtypes.
//!
//! This module provides type-safe wrappers for carousel values, ensuring
//! they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// RotationInterval
// =============================================================================

/// Rotation interval bounds, in milliseconds.
pub mod interval_bounds {
    /// Minimum rotation interval (anything shorter reads as flicker).
    pub const MIN_MS: u64 = 250;
    /// Maximum rotation interval (one minute).
    pub const MAX_MS: u64 = 60_000;
    /// Default rotation interval.
    pub const DEFAULT_MS: u64 = 4_000;
}

/// Rotation period between automatic advances, guaranteed to be within the
/// valid range (250 ms – 60 s).
///
/// Production carousels use 3000, 4000 and 5000 ms; each instance has its own
/// constant. This newtype enforces validity at the type level, making it
/// impossible to arm a timer with a zero or absurd period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationInterval(Duration);

impl RotationInterval {
    /// Creates a new rotation interval from milliseconds, clamping to the
    /// valid range.
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self(Duration::from_millis(millis.clamp(
            interval_bounds::MIN_MS,
            interval_bounds::MAX_MS,
        )))
    }

    /// Creates a new rotation interval from a [`Duration`], clamping to the
    /// valid range.
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        let millis = u64::try_from(duration.as_millis()).unwrap_or(interval_bounds::MAX_MS);
        Self::from_millis(millis)
    }

    /// Returns the interval as a [`Duration`].
    #[must_use]
    pub fn as_duration(self) -> Duration {
        self.0
    }

    /// Returns the interval in whole milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        // Within bounds by construction, so the cast cannot truncate.
        self.0.as_millis() as u64
    }
}

impl Default for RotationInterval {
    fn default() -> Self {
        Self(Duration::from_millis(interval_bounds::DEFAULT_MS))
    }
}

impl From<Duration> for RotationInterval {
    fn from(duration: Duration) -> Self {
        Self::new(duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_millis_accepts_observed_production_values() {
        for millis in [3_000, 4_000, 5_000] {
            assert_eq!(RotationInterval::from_millis(millis).as_millis(), millis);
        }
    }

    #[test]
    fn zero_clamps_to_minimum() {
        assert_eq!(
            RotationInterval::from_millis(0).as_millis(),
            interval_bounds::MIN_MS
        );
    }

    #[test]
    fn oversized_clamps_to_maximum() {
        assert_eq!(
            RotationInterval::from_millis(u64::MAX).as_millis(),
            interval_bounds::MAX_MS
        );
    }

    #[test]
    fn default_is_four_seconds() {
        assert_eq!(
            RotationInterval::default().as_millis(),
            interval_bounds::DEFAULT_MS
        );
    }

    #[test]
    fn from_duration_clamps_like_from_millis() {
        let interval = RotationInterval::new(Duration::from_secs(3600));
        assert_eq!(interval.as_millis(), interval_bounds::MAX_MS);

        let interval: RotationInterval = Duration::from_millis(3_000).into();
        assert_eq!(interval.as_duration(), Duration::from_millis(3_000));
    }
}
