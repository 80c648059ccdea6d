//! iTunes lookup API client for App Store price, rating and release date
//!
//! Unauthenticated; one request per app.

use reqwest::Client;

use crate::config::Config;
use crate::error::{ReportError, Result};
use crate::models::{LookupResponse, StoreListing};

pub struct ItunesClient {
    pub(crate) client: Client,
    pub(crate) lookup_url: String,
}

impl ItunesClient {
    /// Client for a lookup endpoint such as `https://itunes.apple.com/us/lookup`
    pub fn new(lookup_url: String) -> Self {
        log::debug!("iTunes lookup endpoint: {}", lookup_url);
        Self {
            client: Client::new(),
            lookup_url,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.itunes_lookup_url())
    }

    /// Look up one app by App Store id; `None` when the store has no result
    /// (delisted or not sold in this country).
    pub async fn lookup(&self, adam_id: &str) -> Result<Option<StoreListing>> {
        log::debug!("Looking up App Store id {}", adam_id);

        let response = self
            .client
            .get(&self.lookup_url)
            .query(&[("id", adam_id)])
            .header("User-Agent", "catalog_report/0.3")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ReportError::HttpStatus {
                status: response.status(),
                url: response.url().to_string(),
            });
        }

        let lookup: LookupResponse = response.json().await?;
        let listing = lookup.results.into_iter().next();
        match &listing {
            Some(found) => log::debug!(
                "App Store id {} is {:?}",
                adam_id,
                found.track_name.as_deref().unwrap_or("<unnamed>")
            ),
            None => log::warn!("App Store has no listing for id {}", adam_id),
        }
        Ok(listing)
    }
}
