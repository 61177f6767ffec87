//! Doc comment header extraction with regex matching.

use super::year_table::year_to_version;
use crate::{Edition, FetchResult};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, trace};

static LICENSE_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@license.*").expect("Invalid license pattern"));

static COPYRIGHT_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@copyright.*").expect("Invalid copyright pattern"));

static YEAR_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9-]{4,}").expect("Invalid year pattern"));

/// Guess the edition from the `@license` doc comment line.
///
/// The first `@license` line decides:
///
/// - contains `enterprise` -> Enterprise
/// - else contains `commercial` -> Professional
/// - else -> Community
///
/// Matching is case-sensitive. Returns `None` for a non-200 response or
/// when no `@license` line is present.
pub(crate) fn extract_edition(result: &FetchResult) -> Option<Edition> {
    if !result.is_ok() {
        debug!(status = result.status_code, "asset not available");
        return None;
    }

    let Some(line) = LICENSE_LINE.find(result.body()) else {
        debug!("no @license line in asset");
        return None;
    };
    let line = line.as_str();
    trace!(line, "matched license line");

    let edition = if line.contains("enterprise") {
        Edition::Enterprise
    } else if line.contains("commercial") {
        Edition::Professional
    } else {
        Edition::Community
    };
    Some(edition)
}

/// Guess the version from the `@copyright` doc comment line.
///
/// Takes the first run of at least four digits/hyphens on the first
/// `@copyright` line (`2013`, `2006-2015`) and looks it up per edition.
///
/// Returns `None` for a non-200 response, a missing edition, a missing
/// `@copyright` line, or a line without a year token.
pub(crate) fn extract_version(
    result: &FetchResult,
    edition: Option<Edition>,
) -> Option<&'static str> {
    let edition = edition?;
    if !result.is_ok() {
        return None;
    }

    let Some(line) = COPYRIGHT_LINE.find(result.body()) else {
        debug!("no @copyright line in asset");
        return None;
    };
    trace!(line = line.as_str(), "matched copyright line");

    let Some(token) = YEAR_TOKEN.find(line.as_str()) else {
        debug!("no year in @copyright line");
        return None;
    };

    Some(year_to_version(token.as_str(), edition))
}
