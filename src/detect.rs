//! Edition and version detection functions.

use crate::detection::{extract_edition, extract_version};
use crate::{DetectOptions, Fetch, FetchResult, VersionGuess};
use tracing::debug;

/// Detect the Magento edition and version of a site.
///
/// Fetches `js/varien/product.js` through `fetch` and reads its doc
/// comment headers.
///
/// # Detection Process
///
/// 1. GET the asset through the supplied fetch capability
/// 2. Guess the edition from the `@license` line
/// 3. Guess the version from the year on the `@copyright` line
///
/// # Returns
///
/// - `Detected { edition, version }` once an edition is found. `version`
///   is `Some("Unknown")` when the year is not in the table, and `None`
///   when there is no `@copyright` year at all.
/// - `NotDetected` on a fetch error, a non-200 status, or a body without
///   a `@license` line.
///
/// # Example
///
/// ```rust
/// use futures::future::BoxFuture;
/// use magento_doc_comment::{detect, Edition, Fetch, FetchError, FetchResult};
///
/// struct Site;
///
/// impl Fetch for Site {
///     fn get<'a>(&'a self, _path: &'a str) -> BoxFuture<'a, Result<FetchResult, FetchError>> {
///         Box::pin(async {
///             Ok(FetchResult::new(
///                 200,
///                 "@license Copyright blah\n@copyright (c) 2006-2015 Magento",
///             ))
///         })
///     }
/// }
///
/// let guess = futures::executor::block_on(detect(&Site));
/// assert_eq!(guess.edition(), Some(Edition::Community));
/// assert_eq!(guess.version(), Some("1.9"));
/// ```
pub async fn detect<F: Fetch + ?Sized>(fetch: &F) -> VersionGuess {
    detect_with_options(fetch, &DetectOptions::default()).await
}

/// Detect with custom options.
///
/// See [`detect`] for the detection process.
pub async fn detect_with_options<F: Fetch + ?Sized>(
    fetch: &F,
    options: &DetectOptions,
) -> VersionGuess {
    // Step 1: Fetch the asset through the caller's client
    let result = match fetch.get(&options.asset_path).await {
        Ok(result) => result,
        Err(e) => {
            debug!(path = %options.asset_path, error = %e, "fetch failed");
            return VersionGuess::NotDetected;
        }
    };

    // Steps 2-3: Read the doc comment headers
    guess_from_response(&result)
}

/// Blocking variant of [`detect`] for synchronous callers.
///
/// Drives the fetch future on the current thread.
pub fn detect_blocking<F: Fetch + ?Sized>(fetch: &F) -> VersionGuess {
    futures::executor::block_on(detect(fetch))
}

/// Run both header extractions over an already fetched response.
///
/// Useful when the caller fetched the asset itself, e.g. as part of a
/// crawl that already holds the body.
pub fn guess_from_response(result: &FetchResult) -> VersionGuess {
    // Step 2: Edition from the @license line
    let Some(edition) = extract_edition(result) else {
        return VersionGuess::NotDetected;
    };

    // Step 3: Version from the @copyright year
    let version = extract_version(result, Some(edition));
    debug!(%edition, version = ?version, "guessed edition and version");

    VersionGuess::Detected {
        edition,
        version: version.map(str::to_string),
    }
}
