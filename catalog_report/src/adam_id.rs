//! App Store id ("adam id") extraction from store URLs

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// `.../id361285480?mt=8`
    static ref QUERY_ID_RE: Regex = Regex::new(r"id(\d+)\?").unwrap();
    /// `.../id361285480` with no query string
    static ref TRAILING_ID_RE: Regex = Regex::new(r"id(\d+)(?:$|[/#])").unwrap();
}

/// Pull the numeric App Store id out of an iTunes / App Store URL.
///
/// Tries `id<digits>?` first, then `id<digits>` at the end of the path.
///
/// # Examples
/// - "https://itunes.apple.com/us/app/keynote/id361285480?mt=8" -> Some("361285480")
/// - "https://apps.apple.com/us/app/keynote/id361285480" -> Some("361285480")
/// - "" -> None
pub fn extract_adam_id(url: &str) -> Option<String> {
    let id = QUERY_ID_RE
        .captures(url)
        .or_else(|| TRAILING_ID_RE.captures(url))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string());

    if id.is_none() {
        log::debug!("No App Store id in URL: {:?}", url);
    }
    id
}
