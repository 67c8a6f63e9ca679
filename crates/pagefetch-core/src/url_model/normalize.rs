//! Scheme normalization and URL syntax validation.

use std::fmt;
use thiserror::Error;
use url::{Host, Url};

const WEB_SCHEMES: [&str; 2] = ["http://", "https://"];
const DEFAULT_SCHEME: &str = "https://";

/// Reason a raw URL was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlError {
    /// The input carries a scheme other than http/https (e.g. `ftp://`).
    #[error("non-web protocol in URL: {0}")]
    NonWebProtocol(String),
    /// The input (after scheme normalization) is not a usable URL.
    #[error("invalid URL supplied: {0}")]
    Invalid(String),
}

/// A trimmed URL string guaranteed to start with `http://` or `https://`.
///
/// The string is kept as supplied (plus the optional `https://` prefix) rather
/// than reserialized, so the local path derived from it is predictable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedUrl(String);

impl NormalizedUrl {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NormalizedUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// True if `url` starts with `http://` or `https://` (any case) followed by
/// at least one character.
pub fn is_web_protocol(url: &str) -> bool {
    let lower = url.to_ascii_lowercase();
    WEB_SCHEMES.iter().any(|scheme| {
        lower
            .strip_prefix(scheme)
            .is_some_and(|rest| !rest.is_empty())
    })
}

/// Trims `raw`, prepends `https://` when it has no scheme, and validates the result.
///
/// # Examples
///
/// - `"example.com"` → `"https://example.com"`
/// - `"HTTP://Example.com/a"` → unchanged
/// - `"ftp://example.com"` → `UrlError::NonWebProtocol`
pub fn normalize_and_validate(raw: &str) -> Result<NormalizedUrl, UrlError> {
    let trimmed = raw.trim();

    let candidate = if is_web_protocol(trimmed) {
        trimmed.to_string()
    } else if trimmed.contains("://") {
        return Err(UrlError::NonWebProtocol(trimmed.to_string()));
    } else {
        format!("{DEFAULT_SCHEME}{trimmed}")
    };

    if !is_valid_url(&candidate) {
        return Err(UrlError::Invalid(candidate));
    }
    Ok(NormalizedUrl(candidate))
}

/// Absolute URL with a real host: an IP literal, `localhost`, or a dotted domain.
/// Embedded whitespace is rejected even where the parser would percent-encode it.
fn is_valid_url(candidate: &str) -> bool {
    if candidate.chars().any(char::is_whitespace) {
        return false;
    }
    let parsed = match Url::parse(candidate) {
        Ok(u) => u,
        Err(_) => return false,
    };
    match parsed.host() {
        Some(Host::Domain(domain)) => {
            domain.eq_ignore_ascii_case("localhost")
                || domain.split('.').filter(|label| !label.is_empty()).count() >= 2
        }
        Some(Host::Ipv4(_)) | Some(Host::Ipv6(_)) => true,
        None => false,
    }
}
