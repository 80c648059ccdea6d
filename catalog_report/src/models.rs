//! Response shapes for the Jamf Pro Classic API and the iTunes lookup API

use serde::Deserialize;

/// `GET /mobiledeviceapplications`
#[derive(Debug, Deserialize)]
pub struct AppListResponse {
    #[serde(default)]
    pub mobile_device_applications: Vec<AppSummary>,
}

/// One entry of the app listing; only the id is needed
#[derive(Debug, Deserialize, Clone)]
pub struct AppSummary {
    pub id: u64,
}

/// `GET /mobiledeviceapplications/id/<id>`
#[derive(Debug, Deserialize)]
pub struct AppDetailResponse {
    pub mobile_device_application: MobileDeviceApp,
}

/// Full app record as returned by Jamf Pro
#[derive(Debug, Deserialize, Clone)]
pub struct MobileDeviceApp {
    pub general: AppGeneral,
    #[serde(default)]
    pub self_service: SelfService,
    #[serde(default)]
    pub vpp: VppInfo,
}

impl MobileDeviceApp {
    /// Only apps with device-based VPP license assignment are reported
    pub fn has_device_licenses(&self) -> bool {
        self.vpp.assign_vpp_device_based_licenses
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppGeneral {
    pub name: String,
    #[serde(default)]
    pub bundle_id: String,
    #[serde(default)]
    pub category: Option<NamedRef>,
    #[serde(default)]
    pub itunes_store_url: Option<String>,
}

/// `{ "id": .., "name": .. }` reference used for categories; the id is ignored
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct NamedRef {
    pub name: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct SelfService {
    #[serde(default)]
    pub feature_on_main_page: bool,
    #[serde(default)]
    pub self_service_categories: Vec<NamedRef>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct VppInfo {
    #[serde(default)]
    pub assign_vpp_device_based_licenses: bool,
    #[serde(default)]
    pub total_vpp_licenses: Option<i64>,
    #[serde(default)]
    pub remaining_vpp_licenses: Option<i64>,
    #[serde(default)]
    pub used_vpp_licenses: Option<i64>,
}

/// `GET /advancedmobiledevicesearches/id/<id>`
#[derive(Debug, Deserialize)]
pub struct AdvancedSearchResponse {
    pub advanced_mobile_device_search: AdvancedSearch,
}

#[derive(Debug, Deserialize)]
pub struct AdvancedSearch {
    #[serde(default)]
    pub mobile_devices: Vec<serde_json::Value>,
}

/// iTunes lookup reply
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupResponse {
    #[serde(default)]
    pub results: Vec<StoreListing>,
}

/// App Store metadata for one app. Numbers keep their JSON rendering.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct StoreListing {
    #[serde(default)]
    pub track_name: Option<String>,
    #[serde(default)]
    pub price: Option<serde_json::Number>,
    #[serde(default)]
    pub current_version_release_date: Option<String>,
    #[serde(default)]
    pub average_user_rating: Option<serde_json::Number>,
}
