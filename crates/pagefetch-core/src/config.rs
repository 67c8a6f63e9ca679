use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::logging::LogTarget;

/// Redirect hops followed before a GET gives up.
pub const DEFAULT_MAX_REDIRECTS: u32 = 10;

/// `User-Agent` sent when none is configured.
pub fn default_user_agent() -> String {
    format!("pagefetch/{}", env!("CARGO_PKG_VERSION"))
}

/// Optional configuration loaded from `~/.config/pagefetch/config.toml`.
///
/// Every field may be omitted; an absent file means all defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PagefetchConfig {
    /// Directory pages are saved under (default: current working directory).
    pub output_dir: Option<PathBuf>,
    /// `User-Agent` header value (default: `pagefetch/<version>`).
    pub user_agent: Option<String>,
    /// Maximum redirects to follow per request.
    pub max_redirects: Option<u32>,
    /// Append logs to this file instead of stderr.
    pub log_file: Option<PathBuf>,
}

impl PagefetchConfig {
    /// Output root; falls back to the current working directory.
    pub fn output_dir(&self) -> Result<PathBuf> {
        match &self.output_dir {
            Some(dir) => Ok(dir.clone()),
            None => std::env::current_dir().context("failed to resolve current directory"),
        }
    }

    pub fn user_agent(&self) -> String {
        self.user_agent.clone().unwrap_or_else(default_user_agent)
    }

    pub fn max_redirects(&self) -> u32 {
        self.max_redirects.unwrap_or(DEFAULT_MAX_REDIRECTS)
    }

    pub fn log_target(&self) -> LogTarget {
        match &self.log_file {
            Some(path) => LogTarget::File(path.clone()),
            None => LogTarget::Stderr,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("pagefetch")?;
    Ok(xdg_dirs.get_config_file("config.toml"))
}

/// Load configuration from disk, or defaults when there is no config file.
///
/// Unlike a first-run setup, nothing is written when the file is missing.
pub fn load_or_default() -> Result<PagefetchConfig> {
    let path = match config_path() {
        Ok(path) => path,
        Err(e) => {
            tracing::debug!("no config directory ({:#}); using defaults", e);
            return Ok(PagefetchConfig::default());
        }
    };
    if !path.exists() {
        return Ok(PagefetchConfig::default());
    }
    load_from_path(&path)
}

pub fn load_from_path(path: &Path) -> Result<PagefetchConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let cfg: PagefetchConfig = toml::from_str(&data)
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    Ok(cfg)
}
