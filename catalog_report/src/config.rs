//! Connection settings for Jamf Pro and the iTunes lookup API
//!
//! Settings come from a JSON file and may be overridden per field from the
//! environment (`JAMF_URL`, `JAMF_USER`, `JAMF_PASS`, `ITUNES_COUNTRY_CODE`).

use std::path::Path;

use serde::Deserialize;

use crate::error::{ReportError, Result};

/// iTunes lookup API host
pub const ITUNES_BASE_URL: &str = "https://itunes.apple.com";

/// Fields may be left out of the file and supplied from the environment
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct JamfSettings {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub pass: String,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ItunesSettings {
    #[serde(default)]
    pub country_code: String,
}

/// Full config file structure
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Config {
    pub jamf: JamfSettings,
    pub itunes: ItunesSettings,
}

impl Config {
    /// Load config from a JSON file, then apply environment overrides
    pub fn load(path: &Path) -> Result<Self> {
        Self::load_with(path, |key| std::env::var(key).ok())
    }

    /// Load config from a JSON file, apply overrides from `lookup`, and
    /// require every setting to be non-empty afterwards
    pub fn load_with<F>(path: &Path, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::from_file(path)?;
        config.apply_overrides(lookup);
        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        let required = [
            ("jamf.url", "JAMF_URL", &self.jamf.url),
            ("jamf.user", "JAMF_USER", &self.jamf.user),
            ("jamf.pass", "JAMF_PASS", &self.jamf.pass),
            ("itunes.country_code", "ITUNES_COUNTRY_CODE", &self.itunes.country_code),
        ];

        for (field, env_key, value) in required {
            if value.trim().is_empty() {
                return Err(ReportError::Config {
                    path: path.to_path_buf(),
                    message: format!("{field} is not set (add it to the file or set {env_key})"),
                });
            }
        }
        Ok(())
    }

    /// Load config from a JSON file only
    pub fn from_file(path: &Path) -> Result<Self> {
        log::debug!("Reading config from {}", path.display());

        let raw = std::fs::read_to_string(path).map_err(|e| ReportError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        serde_json::from_str(&raw).map_err(|e| ReportError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Replace file values with any value `lookup` returns for the override keys
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = non_empty("JAMF_URL") {
            log::debug!("JAMF_URL override: {}", url);
            self.jamf.url = url;
        }
        if let Some(user) = non_empty("JAMF_USER") {
            self.jamf.user = user;
        }
        if let Some(pass) = non_empty("JAMF_PASS") {
            self.jamf.pass = pass;
        }
        if let Some(cc) = non_empty("ITUNES_COUNTRY_CODE") {
            log::debug!("ITUNES_COUNTRY_CODE override: {}", cc);
            self.itunes.country_code = cc;
        }
    }

    /// Jamf Pro server URL without trailing slash
    pub fn jamf_url(&self) -> &str {
        self.jamf.url.trim_end_matches('/')
    }

    /// Classic API root, e.g. `https://example.jamfcloud.com/JSSResource`
    pub fn jamf_api_url(&self) -> String {
        format!("{}/JSSResource", self.jamf_url())
    }

    /// Storefront lookup endpoint for the configured country
    pub fn itunes_lookup_url(&self) -> String {
        format!(
            "{}/{}/lookup",
            ITUNES_BASE_URL,
            self.itunes.country_code.trim().to_lowercase()
        )
    }

    /// Web UI link for one app record
    pub fn jamf_app_page(&self, app_id: &str) -> String {
        format!("{}/mobileDeviceApps.html?id={}", self.jamf_url(), app_id)
    }
}
