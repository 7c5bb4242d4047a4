// SPDX-License-Identifier: MPL-2.0
//! Remote item list with a static fallback.

use crate::domain::item::MediaRecord;
use crate::error::{Result, SourceError};
use std::time::Duration;

/// Network timeout for item-list fetches.
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetches a JSON array of [`MediaRecord`] from an endpoint, substituting a
/// configured fallback list when the fetch fails in any way.
///
/// The fallback policy means a consumer can always do
/// `driver.replace_items(source.fetch_or_fallback().await)` without caring
/// whether the backend was reachable; an unreachable backend degrades to the
/// static list instead of an empty carousel.
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
    fallback: Vec<MediaRecord>,
    client: reqwest::Client,
}

impl HttpSource {
    /// Creates a source for the given endpoint with an empty fallback list.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            fallback: Vec::new(),
            client: reqwest::Client::new(),
        }
    }

    /// Sets the static fallback list used when the fetch fails.
    #[must_use]
    pub fn with_fallback(mut self, fallback: Vec<MediaRecord>) -> Self {
        self.fallback = fallback;
        self
    }

    /// Returns the endpoint URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetches the item list from the endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is unreachable, answers with a
    /// non-success status, or the body is not a JSON array of records.
    pub async fn fetch(&self) -> Result<Vec<MediaRecord>> {
        let response = self
            .client
            .get(self.url.as_str())
            .timeout(FETCH_TIMEOUT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::BadStatus(status.as_u16()).into());
        }

        let records = response
            .json::<Vec<MediaRecord>>()
            .await
            .map_err(|err| SourceError::Decode(err.to_string()))?;
        Ok(records)
    }

    /// Fetches the item list, falling back to the static list on any failure.
    ///
    /// The carousel only ever sees "here is the current list"; whether it
    /// came from the endpoint or the fallback is logged, not surfaced.
    pub async fn fetch_or_fallback(&self) -> Vec<MediaRecord> {
        match self.fetch().await {
            Ok(records) => {
                log::debug!("fetched {} items from {}", records.len(), self.url);
                records
            }
            Err(err) => {
                log::warn!(
                    "item fetch from {} failed ({err}); using fallback list of {}",
                    self.url,
                    self.fallback.len()
                );
                self.fallback.clone()
            }
        }
    }
}
