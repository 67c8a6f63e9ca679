//! URL modeling and local filename derivation.
//!
//! Normalizes user-supplied URLs to an explicit web scheme, validates their
//! syntax, and maps them to the relative path their content is saved under.

mod normalize;
mod path;

pub use normalize::{is_web_protocol, normalize_and_validate, NormalizedUrl, UrlError};
pub use path::{local_filename, local_path, site_id, PAGE_SUFFIX};
