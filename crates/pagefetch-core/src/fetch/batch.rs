//! Batch fetch over a list of raw URLs.

use std::path::PathBuf;

use super::{FetchError, Fetcher};
use crate::url_model::normalize_and_validate;

/// Outcome counts for a batch run in lenient mode.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FetchSummary {
    /// Paths written, in input order.
    pub saved: Vec<PathBuf>,
    /// URLs rejected by validation.
    pub rejected: usize,
    /// URLs that failed during the request or the write.
    pub failed: usize,
}

/// Validates and fetches each URL in order.
///
/// When `strict` is false every failure is logged and the batch moves on, so
/// this only ever returns `Ok`. When `strict` is true the first failure
/// (including a validation rejection) is logged and returned.
pub fn fetch_urls<S: AsRef<str>>(
    fetcher: &Fetcher,
    urls: &[S],
    strict: bool,
) -> Result<FetchSummary, FetchError> {
    let mut summary = FetchSummary::default();

    for raw in urls {
        let raw = raw.as_ref();
        let span = tracing::info_span!("fetch", url = %raw.trim());
        let _enter = span.enter();

        let url = match normalize_and_validate(raw) {
            Ok(url) => url,
            Err(e) => {
                tracing::error!("{}", e);
                if strict {
                    return Err(e.into());
                }
                summary.rejected += 1;
                continue;
            }
        };

        match fetcher.fetch_and_save(&url) {
            Ok(path) => summary.saved.push(path),
            Err(e) => {
                tracing::error!(status = e.status(), "error during fetch: {}", e);
                if strict {
                    return Err(e);
                }
                summary.failed += 1;
            }
        }
    }

    Ok(summary)
}
