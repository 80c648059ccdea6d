//! Per-app report loop: Jamf detail, install count, App Store listing, CSV row.

use log::{debug, error, info, warn};

use crate::adam_id::extract_adam_id;
use crate::config::Config;
use crate::error::{ReportError, Result};
use crate::itunes::ItunesClient;
use crate::jamf::JamfClient;
use crate::report::{CatalogRow, ReportWriter};

/// Default attempts for reading a fresh advanced search
pub const DEFAULT_RETRY: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportOptions {
    /// Count installs through a temporary advanced search
    pub count_installed: bool,
    /// Attempts for the search poll and the app detail fetch
    pub retry: u32,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            count_installed: true,
            retry: DEFAULT_RETRY,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub written: usize,
    /// Apps without device-based VPP license assignment
    pub skipped: usize,
    pub failed: usize,
}

/// Outcome for one app id
#[derive(Debug)]
enum AppOutcome {
    Row(Box<CatalogRow>),
    NotDeviceLicensed,
}

/// Report every id in `app_ids`, in order, appending rows to `writer`.
///
/// A failure for one app is logged and counted; only writer errors abort.
pub async fn run_report(
    jamf: &JamfClient,
    itunes: &ItunesClient,
    config: &Config,
    app_ids: &[String],
    writer: &mut ReportWriter,
    options: &ReportOptions,
) -> Result<RunSummary> {
    let mut summary = RunSummary::default();
    let total = app_ids.len();

    for (index, app_id) in app_ids.iter().enumerate() {
        info!("[{}/{}] Processing app {}", index + 1, total, app_id);

        match report_app(jamf, itunes, config, app_id, options).await {
            Ok(AppOutcome::Row(row)) => {
                writer.append(&row)?;
                summary.written += 1;
            }
            Ok(AppOutcome::NotDeviceLicensed) => {
                debug!("App {app_id} has no device-based licenses, skipping");
                summary.skipped += 1;
            }
            Err(e) => {
                error!("Failed to report app {app_id}: {e}");
                summary.failed += 1;
            }
        }
    }

    info!(
        "Report complete: {} written, {} skipped, {} failed",
        summary.written, summary.skipped, summary.failed
    );
    Ok(summary)
}

async fn report_app(
    jamf: &JamfClient,
    itunes: &ItunesClient,
    config: &Config,
    app_id: &str,
    options: &ReportOptions,
) -> Result<AppOutcome> {
    let app = jamf.get_app_with_retry(app_id, options.retry).await?;
    if !app.has_device_licenses() {
        return Ok(AppOutcome::NotDeviceLicensed);
    }

    let bundle_id = app.general.bundle_id.trim();
    let installed_count = if !options.count_installed {
        None
    } else if bundle_id.is_empty() {
        warn!("App {app_id} has no bundle id, install count skipped");
        None
    } else {
        match jamf
            .count_installed(app_id, bundle_id, options.retry)
            .await
        {
            Ok(count) => Some(count),
            Err(e @ ReportError::SearchNotReady { .. }) => {
                warn!("No install count for app {app_id}: {e}");
                None
            }
            Err(e) => return Err(e),
        }
    };

    let store_url = app.general.itunes_store_url.as_deref().unwrap_or_default();
    let listing = match extract_adam_id(store_url) {
        Some(adam_id) => itunes.lookup(&adam_id).await?,
        None => {
            warn!("App {app_id} has no usable App Store URL: {store_url:?}");
            None
        }
    };

    let row = CatalogRow::assemble(
        app_id,
        &app,
        installed_count,
        listing.as_ref(),
        config.jamf_app_page(app_id),
    );
    Ok(AppOutcome::Row(Box::new(row)))
}
