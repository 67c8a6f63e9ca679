//! Temp-file write plus atomic rename.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use super::{temp_path, StorageError};

/// Writes `data` to `final_path.part`, syncs it, then renames it over `final_path`.
/// On failure the temp file is removed and any existing `final_path` is left as it was.
pub(super) fn write_atomic(final_path: &Path, data: &[u8]) -> Result<(), StorageError> {
    let temp = temp_path(final_path);
    let result = write_and_sync(&temp, data).and_then(|()| {
        std::fs::rename(&temp, final_path).map_err(|e| StorageError::io("rename", final_path, e))
    });
    if result.is_err() {
        let _ = std::fs::remove_file(&temp);
    }
    result
}

fn write_and_sync(temp: &Path, data: &[u8]) -> Result<(), StorageError> {
    let mut file = File::options()
        .write(true)
        .create(true)
        .truncate(true)
        .open(temp)
        .map_err(|e| StorageError::io("create temp file", temp, e))?;
    file.write_all(data)
        .map_err(|e| StorageError::io("write", temp, e))?;
    file.sync_all()
        .map_err(|e| StorageError::io("sync", temp, e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_atomic_replaces_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.html");
        std::fs::write(&path, "old").unwrap();

        write_atomic(&path, b"new body").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new body");
        assert!(!temp_path(&path).exists());
    }

    #[test]
    fn failed_write_creates_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("page.html");
        assert!(write_atomic(&path, b"x").is_err());
        assert!(!path.exists());
    }
}
