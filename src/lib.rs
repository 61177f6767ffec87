//! # magento-doc-comment
//!
//! Magento edition and version detection from public doc comment headers.
//!
//! Magento 1 ships `js/varien/product.js` with a doc block whose
//! `@license` line names the edition and whose `@copyright` year pins
//! the release line. This crate reads those two lines and maps them to an
//! edition/version guess. It is one check in a larger scanner: the caller
//! supplies the HTTP fetch capability and collects the result.
//!
//! ## Features
//!
//! - `Edition` enum for Community, Professional and Enterprise
//! - `VersionGuess` enum for the detection result
//! - `Fetch` trait for the caller's HTTP client
//! - `detect()` async function running the check against one site
//!
//! ## Example
//!
//! ```rust,no_run
//! use magento_doc_comment::{detect, Fetch};
//!
//! async fn scan(site: &dyn Fetch) {
//!     let guess = detect(site).await;
//!     match guess.into_pair() {
//!         Some((edition, Some(version))) => println!("Magento {} {}", edition, version),
//!         Some((edition, None)) => println!("Magento {}, version unknown", edition),
//!         None => println!("edition not detected"),
//!     }
//! }
//! ```

mod detect;
mod detection;
mod edition;
mod fetch;
mod options;
mod version_guess;

pub use detect::{detect, detect_blocking, detect_with_options, guess_from_response};
pub use edition::Edition;
pub use fetch::{Fetch, FetchError, FetchResult};
pub use options::{DetectOptions, DEFAULT_ASSET_PATH};
pub use version_guess::{VersionGuess, UNKNOWN_VERSION};
