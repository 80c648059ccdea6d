//! Jamf Pro Classic API client.
//!
//! Covers the calls the report needs: listing mobile device apps, fetching
//! one app record, and the create / poll / delete cycle of a temporary
//! advanced mobile device search used to count installs.

mod apps;
mod client;
mod retry;
mod search;

use std::time::Duration;

use reqwest::Client;

use crate::config::Config;

pub use search::search_body;

/// Pause between attempts when a resource is not yet readable
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(1);

/// Jamf Pro Classic API client using basic auth.
pub struct JamfClient {
    pub(crate) client: Client,
    pub(crate) base_url: String,
    pub(crate) user: String,
    pub(crate) pass: String,
    pub(crate) retry_delay: Duration,
}

impl JamfClient {
    /// Creates a client for the given `JSSResource` root URL.
    pub fn new(base_url: String, user: String, pass: String) -> Self {
        log::info!("Creating Jamf Pro API client for {}", base_url);
        log::debug!("API user: {}", user);
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            user,
            pass,
            retry_delay: DEFAULT_RETRY_DELAY,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.jamf_api_url(),
            config.jamf.user.clone(),
            config.jamf.pass.clone(),
        )
    }

    /// Override the pause between retry attempts.
    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }
}

#[cfg(test)]
#[path = "tests/mod.rs"]
mod tests;
