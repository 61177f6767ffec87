//! Fetch capability supplied by the surrounding scanner.
//!
//! The detector never performs networking itself. The caller hands it
//! something implementing [`Fetch`], usually a thin wrapper around the
//! scanner's HTTP client bound to the target's base URL.

use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// A fetched text resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchResult {
    /// HTTP status code of the response.
    pub status_code: u16,

    /// Response body, if one was received and decoded as text.
    pub body: Option<String>,
}

impl FetchResult {
    /// Build a result with a body.
    pub fn new(status_code: u16, body: impl Into<String>) -> Self {
        Self {
            status_code,
            body: Some(body.into()),
        }
    }

    /// Build a result that carries no body (e.g. a HEAD-like or empty reply).
    pub fn without_body(status_code: u16) -> Self {
        Self {
            status_code,
            body: None,
        }
    }

    /// Whether the status is exactly 200.
    pub fn is_ok(&self) -> bool {
        self.status_code == 200
    }

    /// The body text, or an empty string when there is none.
    pub fn body(&self) -> &str {
        self.body.as_deref().unwrap_or("")
    }
}

/// Errors a [`Fetch`] implementation may report.
///
/// The detector treats every variant as "resource unavailable".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum FetchError {
    /// The request never produced a response.
    #[error("transport error: {message}")]
    Transport {
        /// Description from the underlying client.
        message: String,
    },

    /// The path could not be joined onto the target's base URL.
    ///
    /// Not produced by this crate; for `Fetch` implementations that
    /// resolve paths against a base URL themselves.
    #[error("invalid asset path: {path}")]
    InvalidPath {
        /// The offending path.
        path: String,
    },
}

/// Capability to GET a path relative to the scanned site.
///
/// # Example
///
/// ```rust
/// use futures::future::BoxFuture;
/// use magento_doc_comment::{Fetch, FetchError, FetchResult};
///
/// struct Canned(FetchResult);
///
/// impl Fetch for Canned {
///     fn get<'a>(&'a self, _path: &'a str) -> BoxFuture<'a, Result<FetchResult, FetchError>> {
///         Box::pin(async move { Ok(self.0.clone()) })
///     }
/// }
/// ```
pub trait Fetch: Send + Sync {
    /// Fetch `path`, relative to the target's base URL.
    fn get<'a>(&'a self, path: &'a str) -> BoxFuture<'a, Result<FetchResult, FetchError>>;
}

impl<T: Fetch + ?Sized> Fetch for &T {
    fn get<'a>(&'a self, path: &'a str) -> BoxFuture<'a, Result<FetchResult, FetchError>> {
        (**self).get(path)
    }
}

impl<T: Fetch + ?Sized> Fetch for Box<T> {
    fn get<'a>(&'a self, path: &'a str) -> BoxFuture<'a, Result<FetchResult, FetchError>> {
        (**self).get(path)
    }
}

impl<T: Fetch + ?Sized> Fetch for Arc<T> {
    fn get<'a>(&'a self, path: &'a str) -> BoxFuture<'a, Result<FetchResult, FetchError>> {
        (**self).get(path)
    }
}
