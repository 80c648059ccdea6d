//! Temporary advanced mobile device search used to count installs.
//!
//! Jamf Pro has no direct "devices with app X" endpoint, so each count creates
//! a search on the App Identifier criterion, reads its device list, then
//! deletes it again. Freshly created searches are often not readable right
//! away, hence the polling.

use lazy_static::lazy_static;
use log::{debug, info, warn};
use regex::Regex;
use reqwest::header::{ACCEPT, CONTENT_TYPE};

use crate::error::{ReportError, Result};
use crate::models::AdvancedSearchResponse;

use super::client::check_status;
use super::retry::retry_fixed;
use super::JamfClient;

const SEARCH_RESOURCE: &str = "advancedmobiledevicesearches/id";

lazy_static! {
    static ref SEARCH_ID_RE: Regex = Regex::new(r"<id>\s*(\d+)\s*</id>").unwrap();
}

/// XML body for a search matching devices that have `bundle_id` installed.
pub fn search_body(app_id: &str, bundle_id: &str) -> String {
    format!(
        "<advanced_mobile_device_search>\
<id>0</id>\
<name>api_tempsearch_id_{}</name>\
<view_as>Standard Web Page</view_as>\
<criteria>\
<size>1</size>\
<criterion>\
<name>App Identifier</name>\
<priority>0</priority>\
<and_or>and</and_or>\
<search_type>is</search_type>\
<value>{}</value>\
</criterion>\
</criteria>\
</advanced_mobile_device_search>",
        xml_escape(app_id),
        xml_escape(bundle_id)
    )
}

fn xml_escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// The id Jamf assigned, from a reply like `<advanced_mobile_device_search><id>12</id>...`
pub(crate) fn parse_search_id(reply: &str) -> Option<String> {
    SEARCH_ID_RE
        .captures(reply)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

impl JamfClient {
    /// Create the temporary search and return its server-assigned id.
    pub async fn create_search(&self, app_id: &str, bundle_id: &str) -> Result<String> {
        let url = self.resource_url(&format!("{SEARCH_RESOURCE}/0"));
        debug!("Creating advanced search for {bundle_id} at {url}");

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.user, Some(&self.pass))
            .header(CONTENT_TYPE, "application/xml")
            .header(ACCEPT, "application/xml")
            .body(search_body(app_id, bundle_id))
            .send()
            .await?;

        let response = check_status(response, &url).await?;
        let reply = response.text().await?;
        debug!("Create search reply: {reply}");

        let search_id = parse_search_id(&reply).ok_or(ReportError::MissingSearchId(reply))?;
        info!("Created advanced search {search_id} for app {app_id}");
        Ok(search_id)
    }

    /// Read the search results, retrying until readable; returns the device count.
    pub async fn poll_search(&self, search_id: &str, attempts: u32) -> Result<usize> {
        let resource = format!("{SEARCH_RESOURCE}/{search_id}");
        let what = format!("read advanced search {search_id}");

        let search: AdvancedSearchResponse =
            retry_fixed(attempts, self.retry_delay, &what, || self.get_json(&resource))
                .await
                .map_err(|e| {
                    debug!("Last poll error for search {search_id}: {e}");
                    ReportError::SearchNotReady {
                        search_id: search_id.to_string(),
                        attempts: attempts.max(1),
                    }
                })?;

        let count = search.advanced_mobile_device_search.mobile_devices.len();
        debug!("Advanced search {search_id} matched {count} device(s)");
        Ok(count)
    }

    pub async fn delete_search(&self, search_id: &str) -> Result<()> {
        let url = self.resource_url(&format!("{SEARCH_RESOURCE}/{search_id}"));
        debug!("Deleting advanced search {search_id}");

        let response = self
            .client
            .delete(&url)
            .basic_auth(&self.user, Some(&self.pass))
            .send()
            .await?;

        check_status(response, &url).await?;
        Ok(())
    }

    /// Number of devices with `bundle_id` installed.
    ///
    /// The search is deleted even when it never became readable.
    pub async fn count_installed(
        &self,
        app_id: &str,
        bundle_id: &str,
        attempts: u32,
    ) -> Result<usize> {
        let search_id = self.create_search(app_id, bundle_id).await?;
        let count = self.poll_search(&search_id, attempts).await;

        let deleted = self.delete_search(&search_id).await;
        if deleted.is_err() {
            warn!("Advanced search {search_id} was left on the server");
        }

        let count = count?;
        deleted?;
        Ok(count)
    }
}
