//! CSV catalog report: row assembly and writing

use std::fs::File;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use csv::WriterBuilder;

use crate::error::Result;
use crate::models::{MobileDeviceApp, StoreListing};

/// Rendering of a value that is not available
pub const NONE: &str = "None";

/// Self Service categories carried per row
pub const MAX_SELF_SERVICE_CATEGORIES: usize = 5;

pub const HEADER: [&str; 19] = [
    "id",
    "name",
    "main_category",
    "self_service_cat1",
    "self_service_cat2",
    "self_service_cat3",
    "self_service_cat4",
    "self_service_cat5",
    "featured",
    "installed_count",
    "used_licenses",
    "remaining_licenses",
    "total_licenses",
    "price",
    "latest_release",
    "average_rating",
    "bundle_id",
    "jamf_url",
    "itunes_url",
];

/// One report line, every field already rendered
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogRow {
    pub id: String,
    pub name: String,
    pub main_category: String,
    pub self_service_categories: [String; MAX_SELF_SERVICE_CATEGORIES],
    pub featured: String,
    pub installed_count: String,
    pub used_licenses: String,
    pub remaining_licenses: String,
    pub total_licenses: String,
    pub price: String,
    pub latest_release: String,
    pub average_rating: String,
    pub bundle_id: String,
    pub jamf_url: String,
    pub itunes_url: String,
}

fn or_none<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| NONE.to_string())
}

fn render_bool(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

impl CatalogRow {
    /// Merge the Jamf record, the install count and the App Store listing.
    pub fn assemble(
        app_id: &str,
        app: &MobileDeviceApp,
        installed_count: Option<usize>,
        listing: Option<&StoreListing>,
        jamf_url: String,
    ) -> Self {
        let general = &app.general;

        let mut categories: [String; MAX_SELF_SERVICE_CATEGORIES] =
            std::array::from_fn(|_| NONE.to_string());
        for (slot, category) in categories
            .iter_mut()
            .zip(&app.self_service.self_service_categories)
        {
            *slot = category.name.clone();
        }

        Self {
            id: app_id.to_string(),
            name: general.name.clone(),
            main_category: or_none(general.category.as_ref().map(|c| &c.name)),
            self_service_categories: categories,
            featured: render_bool(app.self_service.feature_on_main_page).to_string(),
            installed_count: or_none(installed_count),
            used_licenses: or_none(app.vpp.used_vpp_licenses),
            remaining_licenses: or_none(app.vpp.remaining_vpp_licenses),
            total_licenses: or_none(app.vpp.total_vpp_licenses),
            price: or_none(listing.and_then(|l| l.price.as_ref())),
            latest_release: or_none(listing.and_then(|l| l.current_version_release_date.as_ref())),
            average_rating: or_none(listing.and_then(|l| l.average_user_rating.as_ref())),
            bundle_id: general.bundle_id.clone(),
            jamf_url,
            itunes_url: or_none(general.itunes_store_url.as_ref()),
        }
    }

    /// Fields in `HEADER` order
    pub fn fields(&self) -> Vec<&str> {
        let mut fields = Vec::with_capacity(HEADER.len());
        fields.extend([
            self.id.as_str(),
            self.name.as_str(),
            self.main_category.as_str(),
        ]);
        fields.extend(self.self_service_categories.iter().map(String::as_str));
        fields.extend([
            self.featured.as_str(),
            self.installed_count.as_str(),
            self.used_licenses.as_str(),
            self.remaining_licenses.as_str(),
            self.total_licenses.as_str(),
            self.price.as_str(),
            self.latest_release.as_str(),
            self.average_rating.as_str(),
            self.bundle_id.as_str(),
            self.jamf_url.as_str(),
            self.itunes_url.as_str(),
        ]);
        fields
    }
}

/// `<YYYY-MM-DD>-jamf_cat_report.csv`
pub fn report_file_name(date: NaiveDate) -> String {
    format!("{}-jamf_cat_report.csv", date.format("%Y-%m-%d"))
}

/// Appends rows to a report file, flushing after each so partial runs
/// still leave a usable file.
pub struct ReportWriter {
    writer: csv::Writer<File>,
    path: PathBuf,
    rows: usize,
}

impl ReportWriter {
    /// Create (or truncate) `path` and write the header row.
    pub fn create(path: &Path) -> Result<Self> {
        log::info!("Writing report to {}", path.display());

        let mut writer = WriterBuilder::new().has_headers(false).from_path(path)?;
        writer.write_record(HEADER)?;
        writer.flush()?;

        Ok(Self {
            writer,
            path: path.to_path_buf(),
            rows: 0,
        })
    }

    pub fn append(&mut self, row: &CatalogRow) -> Result<()> {
        self.writer.write_record(row.fields())?;
        self.writer.flush()?;
        self.rows += 1;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Data rows written so far (header excluded)
    pub fn rows(&self) -> usize {
        self.rows
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
