//! Shared request plumbing: auth, status checks, JSON decoding.

use log::{debug, error};
use reqwest::header::ACCEPT;
use reqwest::Response;
use serde::de::DeserializeOwned;

use crate::error::{ReportError, Result};

use super::JamfClient;

impl JamfClient {
    pub(crate) fn resource_url(&self, resource: &str) -> String {
        format!("{}/{}", self.base_url, resource.trim_start_matches('/'))
    }

    /// Authenticated GET of a Classic API resource, decoded from JSON.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, resource: &str) -> Result<T> {
        let url = self.resource_url(resource);
        debug!("GET {url}");

        let response = self
            .client
            .get(&url)
            .basic_auth(&self.user, Some(&self.pass))
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let response = check_status(response, &url).await?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Turn a non-2xx response into `ReportError::HttpStatus`, logging the body.
pub(crate) async fn check_status(response: Response, url: &str) -> Result<Response> {
    let status = response.status();
    debug!("{url} -> {status}");

    if status.is_success() {
        return Ok(response);
    }

    let error_text = response.text().await.unwrap_or_default();
    error!("Request to {url} failed with status {status}: {error_text}");
    Err(ReportError::HttpStatus {
        status,
        url: url.to_string(),
    })
}
