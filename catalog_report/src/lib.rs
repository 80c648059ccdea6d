//! Catalog Report - Jamf Pro mobile device app catalog to CSV
//!
//! Lists mobile device apps from Jamf Pro, adds App Store price, rating and
//! release date from the iTunes lookup API, optionally counts devices with
//! each app installed, and writes one CSV row per device-licensed app.

pub mod adam_id;
pub mod config;
pub mod error;
pub mod itunes;
pub mod jamf;
pub mod models;
pub mod pipeline;
pub mod report;
pub mod worklist;

pub use adam_id::extract_adam_id;
pub use config::Config;
pub use error::{ReportError, Result};
pub use itunes::ItunesClient;
pub use jamf::JamfClient;
pub use pipeline::{run_report, ReportOptions, RunSummary};
pub use report::{report_file_name, CatalogRow, ReportWriter};
pub use worklist::Worklist;
