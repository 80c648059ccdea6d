//! Which app ids a run reports on

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::error::{ReportError, Result};
use crate::jamf::JamfClient;

#[derive(Debug, Clone, PartialEq)]
pub enum Worklist {
    /// Every mobile device app on the server
    All,
    /// Ids given on the command line, in that order
    Ids(Vec<String>),
    /// A file with one id per line
    File(PathBuf),
}

impl Worklist {
    pub async fn resolve(&self, jamf: &JamfClient) -> Result<Vec<String>> {
        match self {
            Worklist::All => jamf.list_app_ids().await,
            Worklist::Ids(ids) => ids.iter().map(|id| validate_app_id(id)).collect(),
            Worklist::File(path) => read_id_file(path),
        }
    }
}

/// Trimmed id, or `InvalidAppId` when it is not a plain number
pub fn validate_app_id(raw: &str) -> Result<String> {
    let id = raw.trim();
    if id.is_empty() || !id.chars().all(|c| c.is_ascii_digit()) {
        return Err(ReportError::InvalidAppId(raw.to_string()));
    }
    Ok(id.to_string())
}

/// Read newline separated ids, skipping blank lines
pub fn read_id_file(path: &Path) -> Result<Vec<String>> {
    log::info!("Reading app ids from {}", path.display());

    let reader = BufReader::new(File::open(path)?);
    let mut ids = Vec::new();

    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        ids.push(validate_app_id(&line)?);
    }

    log::info!("Read {} app id(s)", ids.len());
    Ok(ids)
}
