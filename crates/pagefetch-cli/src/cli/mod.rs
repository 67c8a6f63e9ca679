//! CLI for pagefetch.

mod commands;

use anyhow::Result;
use clap::Parser;
use pagefetch_core::config::PagefetchConfig;
use pagefetch_core::fetch::Fetcher;

use commands::{run_fetch, run_metadata};

/// Fetch web pages to local files, or report link/image metadata for them.
#[derive(Debug, Parser)]
#[command(name = "pagefetch", version)]
#[command(about = "Fetches web pages and reports their metadata", long_about = None)]
pub struct Cli {
    /// URLs to fetch. A missing scheme defaults to https://.
    #[arg(required = true, num_args = 1..)]
    pub urls: Vec<String>,

    /// Show metadata of URLs instead of fetching. URLs that have not been fetched will be fetched.
    #[arg(long)]
    pub metadata: bool,
}

impl Cli {
    pub fn run(&self, cfg: &PagefetchConfig) -> Result<()> {
        let fetcher = Fetcher::from_config(cfg)?;
        tracing::debug!(root = %fetcher.store().root().display(), "output directory");

        if self.metadata {
            run_metadata(&fetcher, &self.urls)
        } else {
            run_fetch(&fetcher, &self.urls)
        }
    }
}

#[cfg(test)]
mod tests;
