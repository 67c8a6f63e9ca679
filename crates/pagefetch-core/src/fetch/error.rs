//! Fetch error type.

use thiserror::Error;

use crate::storage::StorageError;
use crate::url_model::UrlError;

/// Why a single URL could not be fetched and saved.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The URL was rejected before any request was made.
    #[error(transparent)]
    Url(#[from] UrlError),
    /// Curl reported an error (DNS, connection refused, TLS, etc.).
    #[error("GET {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: curl::Error,
    },
    /// The response had a non-2xx status.
    #[error("GET {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u32 },
    /// The body could not be written to disk.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl FetchError {
    pub(crate) fn transport(url: &str, source: curl::Error) -> Self {
        FetchError::Transport {
            url: url.to_string(),
            source,
        }
    }

    /// HTTP status for `HttpStatus` errors.
    pub fn status(&self) -> Option<u32> {
        match self {
            FetchError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
