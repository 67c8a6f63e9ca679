//! Metadata records for saved pages.
//!
//! A record is derived entirely from the local file: its mtime is the last
//! fetch time and its content is parsed as HTML for link and image counts.
//! Pages not yet on disk are fetched once, strictly, before reporting.

mod count;

pub use count::{count_elements, ElementCounts};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::fmt;
use std::io::Write;
use std::path::Path;
use std::time::SystemTime;

use crate::fetch::{fetch_urls, Fetcher};
use crate::storage::{PageStore, StorageError};
use crate::url_model::{local_path, normalize_and_validate, site_id};

/// Format for `last_fetch`, e.g. `Tue Mar 16 2021 15:46 UTC`.
pub const TIMESTAMP_FORMAT: &str = "%a %b %d %Y %H:%M UTC";

/// One metadata record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMetadata {
    /// Local filename without the `.html` suffix.
    pub site: String,
    pub num_links: usize,
    pub images: usize,
    pub last_fetch: SystemTime,
}

impl fmt::Display for PageMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "site: {}", self.site)?;
        writeln!(f, "num_links: {}", self.num_links)?;
        writeln!(f, "images: {}", self.images)?;
        write!(f, "last_fetch: {}", format_timestamp(self.last_fetch))
    }
}

/// Renders `time` in UTC using [`TIMESTAMP_FORMAT`].
pub fn format_timestamp(time: SystemTime) -> String {
    DateTime::<Utc>::from(time).format(TIMESTAMP_FORMAT).to_string()
}

/// Builds the record for the page saved at `relative`.
pub fn collect_metadata(
    store: &PageStore,
    relative: &Path,
    site: String,
) -> Result<PageMetadata, StorageError> {
    let last_fetch = store.modified(relative)?;
    let html = store.read_page(relative)?;
    let counts = count_elements(&html);
    Ok(PageMetadata {
        site,
        num_links: counts.links,
        images: counts.images,
        last_fetch,
    })
}

/// Writes one record per URL to `out`, in input order, each followed by a blank line.
///
/// URLs are normalized first so the existence check and any fetch-on-miss
/// agree on the local path. A URL that fails validation, fails to fetch, or
/// whose file cannot be read is logged and skipped. Only a failure to write
/// to `out` is returned as an error.
pub fn report_metadata<S: AsRef<str>, W: Write>(
    fetcher: &Fetcher,
    urls: &[S],
    out: &mut W,
) -> Result<Vec<PageMetadata>> {
    let mut records = Vec::with_capacity(urls.len());

    for raw in urls {
        let raw = raw.as_ref();
        let span = tracing::info_span!("metadata", url = %raw.trim());
        let _enter = span.enter();

        let url = match normalize_and_validate(raw) {
            Ok(url) => url,
            Err(e) => {
                tracing::error!("{}", e);
                continue;
            }
        };
        let relative = local_path(url.as_str());

        if !fetcher.store().exists(&relative) {
            tracing::debug!(path = %relative.display(), "no local copy, fetching");
            if let Err(e) = fetch_urls(fetcher, &[url.as_str()], true) {
                tracing::error!("skipping metadata, fetch failed: {}", e);
                continue;
            }
        }

        let record = match collect_metadata(fetcher.store(), &relative, site_id(url.as_str())) {
            Ok(record) => record,
            Err(e) => {
                tracing::error!("skipping metadata: {}", e);
                continue;
            }
        };

        writeln!(out, "{}\n", record).context("failed to write metadata record")?;
        records.push(record);
    }

    Ok(records)
}
