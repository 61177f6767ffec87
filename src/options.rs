//! Detection options configuration.
//!
//! This module provides the [`DetectOptions`] struct for configuring
//! which public asset the detector probes.

/// Path of the public script whose doc comment carries the license and
/// copyright headers.
pub const DEFAULT_ASSET_PATH: &str = "js/varien/product.js";

/// Configuration options for detection.
///
/// # Default Behavior
///
/// The default probes `js/varien/product.js`, which ships with every
/// Magento 1 install and keeps its original doc block.
///
/// # Example
///
/// ```rust
/// use magento_doc_comment::DetectOptions;
///
/// // Use default options
/// let opts = DetectOptions::default();
///
/// // Probe a mirrored copy of the asset
/// let opts = DetectOptions::default().with_asset_path("static/js/varien/product.js");
/// assert_eq!(opts.asset_path, "static/js/varien/product.js");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectOptions {
    /// Path fetched relative to the target's base URL.
    ///
    /// Default: `js/varien/product.js`
    pub asset_path: String,
}

impl DetectOptions {
    /// Replace the probed asset path.
    pub fn with_asset_path(mut self, path: impl Into<String>) -> Self {
        self.asset_path = path.into();
        self
    }
}

impl Default for DetectOptions {
    fn default() -> Self {
        Self {
            asset_path: DEFAULT_ASSET_PATH.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_asset_path() {
        let opts = DetectOptions::default();
        assert_eq!(opts.asset_path, "js/varien/product.js");
    }

    #[test]
    fn test_custom_asset_path() {
        let opts = DetectOptions::default().with_asset_path("skin/product.js");
        assert_eq!(opts.asset_path, "skin/product.js");
    }

    #[test]
    fn test_clone() {
        let opts = DetectOptions::default().with_asset_path("a.js");
        let cloned = opts.clone();
        assert_eq!(opts, cloned);
    }
}
