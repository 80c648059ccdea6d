//! Mobile device app listing and detail lookup.

use log::{debug, info};

use crate::error::Result;
use crate::models::{AppDetailResponse, AppListResponse, MobileDeviceApp};

use super::retry::retry_fixed;
use super::JamfClient;

impl JamfClient {
    /// Ids of every mobile device app, ascending by numeric value
    /// (`9` before `101`), not in string order.
    pub async fn list_app_ids(&self) -> Result<Vec<String>> {
        info!("Listing mobile device apps");
        let list: AppListResponse = self.get_json("mobiledeviceapplications").await?;

        let mut ids: Vec<u64> = list
            .mobile_device_applications
            .iter()
            .map(|app| app.id)
            .collect();
        ids.sort_unstable();

        info!("Found {} mobile device app(s)", ids.len());
        Ok(ids.into_iter().map(|id| id.to_string()).collect())
    }

    /// Fetch one app record.
    pub async fn get_app(&self, app_id: &str) -> Result<MobileDeviceApp> {
        debug!("Fetching mobile device app {app_id}");
        let detail: AppDetailResponse = self
            .get_json(&format!("mobiledeviceapplications/id/{app_id}"))
            .await?;
        Ok(detail.mobile_device_application)
    }

    /// Fetch one app record, retrying transient failures.
    pub async fn get_app_with_retry(
        &self,
        app_id: &str,
        attempts: u32,
    ) -> Result<MobileDeviceApp> {
        let what = format!("fetch app {app_id}");
        retry_fixed(attempts, self.retry_delay, &what, || self.get_app(app_id)).await
    }
}
