//! Local filename derivation from a URL string.

use std::path::PathBuf;

/// Suffix every saved page carries.
pub const PAGE_SUFFIX: &str = ".html";

/// Returns the local filename for `url`: everything after the first `://`
/// (or the whole string when there is no scheme), with `.html` appended
/// unless already present.
///
/// # Examples
///
/// - `local_filename("https://example.com/page")` → `"example.com/page.html"`
/// - `local_filename("example.com/index.html")` → `"example.com/index.html"`
pub fn local_filename(url: &str) -> String {
    let stripped = url.split_once("://").map_or(url, |(_, rest)| rest);
    if stripped.ends_with(PAGE_SUFFIX) {
        stripped.to_string()
    } else {
        format!("{stripped}{PAGE_SUFFIX}")
    }
}

/// [`local_filename`] as a relative path (resolved against the output root by storage).
pub fn local_path(url: &str) -> PathBuf {
    PathBuf::from(local_filename(url))
}

/// Site identifier shown in metadata records: the local filename without `.html`.
pub fn site_id(url: &str) -> String {
    let name = local_filename(url);
    match name.strip_suffix(PAGE_SUFFIX) {
        Some(site) => site.to_string(),
        None => name,
    }
}
