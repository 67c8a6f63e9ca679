//! `pagefetch <url>...` – fetch each URL and save it locally.

use anyhow::Result;
use pagefetch_core::fetch::{fetch_urls, Fetcher};

pub fn run_fetch(fetcher: &Fetcher, urls: &[String]) -> Result<()> {
    let summary = fetch_urls(fetcher, urls, false)?;
    tracing::info!(
        saved = summary.saved.len(),
        rejected = summary.rejected,
        failed = summary.failed,
        "fetch finished"
    );
    Ok(())
}
