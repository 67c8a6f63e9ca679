//! `pagefetch --metadata <url>...` – print one metadata record per URL.

use anyhow::Result;
use pagefetch_core::fetch::Fetcher;
use pagefetch_core::metadata::report_metadata;
use std::io::{self, Write};

pub fn run_metadata(fetcher: &Fetcher, urls: &[String]) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_metadata(fetcher, urls, &mut out)
}

/// Writes the records for `urls` to `out` and flushes it.
pub fn write_metadata<W: Write>(fetcher: &Fetcher, urls: &[String], out: &mut W) -> Result<()> {
    let records = report_metadata(fetcher, urls, out)?;
    out.flush()?;
    tracing::debug!(records = records.len(), requested = urls.len(), "metadata finished");
    Ok(())
}
