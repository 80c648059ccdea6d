//! Error types for catalog_report

use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for catalog_report operations
#[derive(Debug, Error)]
pub enum ReportError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    /// Failed to parse JSON response or config file
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// HTTP error status code
    #[error("HTTP error {status} from {url}")]
    HttpStatus {
        status: reqwest::StatusCode,
        url: String,
    },
    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Writing the CSV report failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    /// Config file missing or unusable
    #[error("Config error in {path}: {message}")]
    Config { path: PathBuf, message: String },
    /// App id is not a number
    #[error("Invalid app id: {0:?}")]
    InvalidAppId(String),
    /// Search creation reply did not carry an id
    #[error("No search id in advanced search reply: {0}")]
    MissingSearchId(String),
    /// Search still unreadable after all attempts
    #[error("Advanced search {search_id} not ready after {attempts} attempt(s)")]
    SearchNotReady { search_id: String, attempts: u32 },
}

/// Result alias for catalog_report operations
pub type Result<T> = std::result::Result<T, ReportError>;
