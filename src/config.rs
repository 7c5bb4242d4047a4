// SPDX-License-Identifier: MPL-2.0
//! Per-carousel configuration.
//!
//! Each carousel instance on a page carries its own constants (interval,
//! endpoint, fallback items). This module loads and saves them as TOML so
//! deployments can tune instances without a rebuild.
//!
//! # Examples
//!
//! ```no_run
//! use media_carousel::config::CarouselConfig;
//!
//! let config = CarouselConfig::load_from_path("hero.toml".as_ref()).unwrap_or_default();
//! let interval = config.interval();
//! ```

use crate::domain::item::MediaRecord;
use crate::domain::newtypes::{interval_bounds, RotationInterval};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Rotation period in milliseconds; clamped into valid bounds on use.
    #[serde(default)]
    pub interval_ms: Option<u64>,
    /// Endpoint serving the item list, if this instance fetches remotely.
    #[serde(default)]
    pub source_url: Option<String>,
    /// Items shown when no endpoint is configured or the fetch fails.
    #[serde(default)]
    pub fallback_items: Vec<MediaRecord>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            interval_ms: Some(interval_bounds::DEFAULT_MS),
            source_url: None,
            fallback_items: Vec::new(),
        }
    }
}

impl CarouselConfig {
    /// Returns the validated rotation interval for this instance.
    #[must_use]
    pub fn interval(&self) -> RotationInterval {
        self.interval_ms
            .map_or_else(RotationInterval::default, RotationInterval::from_millis)
    }

    /// Loads a configuration from the given path.
    ///
    /// A missing file yields the defaults; an unreadable or malformed file
    /// is an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)?;
        let config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Saves the configuration to the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }
}
