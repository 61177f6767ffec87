//! Detection result types.

use crate::Edition;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Version label reported when an edition is found but the copyright year
/// is not in the lookup table.
pub const UNKNOWN_VERSION: &str = "Unknown";

/// Result of an edition/version detection.
///
/// `Detected` is still a detection when the version could not be pinned
/// down. Two cases are kept apart:
///
/// - `version: Some("Unknown")`: a copyright year was read but is not in
///   the lookup table
/// - `version: None`: no `@copyright` line or no year on it
///
/// Only `NotDetected` means nothing could be inferred.
///
/// # Example
///
/// ```rust
/// use magento_doc_comment::{Edition, VersionGuess};
///
/// let guess = VersionGuess::Detected {
///     edition: Edition::Community,
///     version: Some("1.9".to_string()),
/// };
/// assert!(guess.is_detected());
/// assert_eq!(guess.to_string(), "Community 1.9");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VersionGuess {
    /// An edition was found.
    Detected {
        /// Detected edition.
        edition: Edition,
        /// Display label for the guessed version: a single version, a
        /// range like `"1.9 - 1.10"`, or `"Unknown"`. `None` when the
        /// asset carried no copyright year at all.
        version: Option<String>,
    },

    /// The response gave nothing to go on.
    NotDetected,
}

impl VersionGuess {
    /// Returns `true` for `Detected`, whatever its version.
    pub fn is_detected(&self) -> bool {
        matches!(self, Self::Detected { .. })
    }

    /// The detected edition, if any.
    pub fn edition(&self) -> Option<Edition> {
        match self {
            Self::Detected { edition, .. } => Some(*edition),
            Self::NotDetected => None,
        }
    }

    /// The version label, if an edition was detected and a copyright year
    /// was read.
    pub fn version(&self) -> Option<&str> {
        match self {
            Self::Detected { version, .. } => version.as_deref(),
            Self::NotDetected => None,
        }
    }

    /// Consume into an `(edition, version)` pair.
    pub fn into_pair(self) -> Option<(Edition, Option<String>)> {
        match self {
            Self::Detected { edition, version } => Some((edition, version)),
            Self::NotDetected => None,
        }
    }
}

impl fmt::Display for VersionGuess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Detected {
                edition,
                version: Some(version),
            } => write!(f, "{} {}", edition, version),
            Self::Detected {
                edition,
                version: None,
            } => write!(f, "{} (no copyright year)", edition),
            Self::NotDetected => f.write_str("not detected"),
        }
    }
}
