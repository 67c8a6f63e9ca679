//! HTTP GET and save-to-disk.
//!
//! One blocking GET per URL through libcurl's easy interface. Redirects are
//! followed; no retries and no timeouts beyond libcurl's defaults. A 2xx body
//! is decoded per its charset and written to the page store under the path
//! derived from the URL.

mod batch;
mod charset;
mod error;

pub use batch::{fetch_urls, FetchSummary};
pub use charset::{charset_from_content_type, decode_body};
pub use error::FetchError;

use std::path::PathBuf;

use crate::config::{self, PagefetchConfig};
use crate::storage::PageStore;
use crate::url_model::{local_path, NormalizedUrl};

/// A fully-read GET response.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// Status of the final response after redirects.
    pub status: u32,
    /// `Content-Type` of the final response, if sent.
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body decoded to text using the response charset.
    pub fn text(&self) -> String {
        decode_body(&self.body, self.content_type.as_deref())
    }
}

/// Fetches pages and saves them into a [`PageStore`].
#[derive(Debug, Clone)]
pub struct Fetcher {
    store: PageStore,
    user_agent: String,
    max_redirects: u32,
}

impl Fetcher {
    pub fn new(store: PageStore) -> Self {
        Self {
            store,
            user_agent: config::default_user_agent(),
            max_redirects: config::DEFAULT_MAX_REDIRECTS,
        }
    }

    /// Builds a fetcher from config; the store is rooted at the configured output directory.
    pub fn from_config(cfg: &PagefetchConfig) -> anyhow::Result<Self> {
        Ok(Self::new(PageStore::new(cfg.output_dir()?))
            .with_user_agent(cfg.user_agent())
            .with_max_redirects(cfg.max_redirects()))
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_max_redirects(mut self, max_redirects: u32) -> Self {
        self.max_redirects = max_redirects;
        self
    }

    pub fn store(&self) -> &PageStore {
        &self.store
    }

    /// Performs a GET and returns the response regardless of status.
    /// Only transport-level failures are errors here.
    pub fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        let curl_err = |e| FetchError::transport(url, e);
        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.get(true).map_err(curl_err)?;
        easy.url(url).map_err(curl_err)?;
        easy.follow_location(true).map_err(curl_err)?;
        easy.max_redirections(self.max_redirects).map_err(curl_err)?;
        easy.useragent(&self.user_agent).map_err(curl_err)?;

        {
            let mut transfer = easy.transfer();
            transfer
                .write_function(|data| {
                    body.extend_from_slice(data);
                    Ok(data.len())
                })
                .map_err(curl_err)?;
            transfer.perform().map_err(curl_err)?;
        }

        let status = easy.response_code().map_err(curl_err)?;
        let content_type = easy
            .content_type()
            .map_err(curl_err)?
            .map(str::to_string);

        Ok(HttpResponse {
            status,
            content_type,
            body,
        })
    }

    /// GETs `url` and overwrites its local file with the decoded body.
    ///
    /// A non-2xx status is logged and returned as [`FetchError::HttpStatus`];
    /// nothing is written in that case.
    pub fn fetch_and_save(&self, url: &NormalizedUrl) -> Result<PathBuf, FetchError> {
        tracing::info!("fetching content for {}", url);
        let response = self.get(url.as_str())?;
        if !response.is_success() {
            tracing::error!(status = response.status, "received HTTP status {}", response.status);
            return Err(FetchError::HttpStatus {
                url: url.to_string(),
                status: response.status,
            });
        }

        let text = response.text();
        let path = self.store.write_page(&local_path(url.as_str()), &text)?;
        tracing::debug!(path = %path.display(), bytes = text.len(), "saved page");
        Ok(path)
    }
}
