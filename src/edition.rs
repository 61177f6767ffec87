//! Edition enum identifying the commercial tier of a Magento install.

use serde::{Deserialize, Serialize};
use std::fmt;
use strum::IntoEnumIterator;

/// The commercial edition of a Magento installation.
///
/// Editions carry no ordering; they are compared by identity only.
///
/// # Example
///
/// ```rust
/// use magento_doc_comment::Edition;
///
/// for edition in Edition::all() {
///     println!("{}", edition.display_name());
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Edition {
    /// Community Edition (open source license header)
    Community,
    /// Professional Edition (commercial license header)
    Professional,
    /// Enterprise Edition (enterprise license header)
    Enterprise,
}

impl Edition {
    /// Human-readable name for the edition.
    ///
    /// ```rust
    /// use magento_doc_comment::Edition;
    ///
    /// assert_eq!(Edition::Enterprise.display_name(), "Enterprise");
    /// ```
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Community => "Community",
            Self::Professional => "Professional",
            Self::Enterprise => "Enterprise",
        }
    }

    /// Iterator over all editions.
    pub fn all() -> impl Iterator<Item = Self> {
        <Self as IntoEnumIterator>::iter()
    }
}

impl fmt::Display for Edition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
