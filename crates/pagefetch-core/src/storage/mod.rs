//! Local page storage rooted at the output directory.
//!
//! Pages are addressed by the relative path derived from their URL. Writes go
//! to a `.part` temp file first and are renamed into place, so a failed write
//! never clobbers an earlier successful fetch.

mod writer;

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::time::SystemTime;
use thiserror::Error;

/// Temporary file suffix used before atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Path for the temp file: appends `.part` to the final path (e.g. `page.html` → `page.html.part`).
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

#[derive(Debug, Error)]
pub enum StorageError {
    /// The derived path is absolute or climbs out of the output root.
    #[error("refusing to write outside the output directory: {}", .0.display())]
    UnsafePath(PathBuf),
    #[error("{action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StorageError {
    fn io(action: &'static str, path: &Path, source: io::Error) -> Self {
        StorageError::Io {
            action,
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Directory that holds one file per fetched URL.
#[derive(Debug, Clone)]
pub struct PageStore {
    root: PathBuf,
}

impl PageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Joins `relative` onto the root, rejecting absolute paths and `..` components.
    pub fn resolve(&self, relative: &Path) -> Result<PathBuf, StorageError> {
        let safe = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
        if !safe || relative.as_os_str().is_empty() {
            return Err(StorageError::UnsafePath(relative.to_path_buf()));
        }
        Ok(self.root.join(relative))
    }

    /// True if a saved page exists at `relative`.
    pub fn exists(&self, relative: &Path) -> bool {
        self.resolve(relative).map(|p| p.is_file()).unwrap_or(false)
    }

    /// Overwrites the page at `relative` with `text`, creating parent directories.
    /// Returns the absolute-or-root-relative path written.
    pub fn write_page(&self, relative: &Path, text: &str) -> Result<PathBuf, StorageError> {
        let final_path = self.resolve(relative)?;
        if let Some(parent) = final_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| StorageError::io("create directory", parent, e))?;
        }
        writer::write_atomic(&final_path, text.as_bytes())?;
        Ok(final_path)
    }

    /// Reads the page at `relative` as text (invalid UTF-8 is replaced, not rejected).
    pub fn read_page(&self, relative: &Path) -> Result<String, StorageError> {
        let path = self.resolve(relative)?;
        let bytes = fs::read(&path).map_err(|e| StorageError::io("read", &path, e))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Modification time of the page at `relative`, i.e. when it was last fetched.
    pub fn modified(&self, relative: &Path) -> Result<SystemTime, StorageError> {
        let path = self.resolve(relative)?;
        fs::metadata(&path)
            .and_then(|m| m.modified())
            .map_err(|e| StorageError::io("stat", &path, e))
    }
}
