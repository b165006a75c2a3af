//! Atomic I/O operations with file locking

use crate::{Error, Result};
use fs2::FileExt;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;

/// Write content atomically to a file with locking.
///
/// Uses write-to-temp-then-rename so a reader never observes a partially
/// written sidecar. The parent directory must already exist: the codec
/// creates node directories itself and must notice when one is missing.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    // Temp file lives next to the target so the rename stays on one filesystem
    let temp_name = format!(
        ".{}.{}.tmp",
        path.file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = path.with_file_name(&temp_name);

    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file
        .lock_exclusive()
        .map_err(|_| Error::LockFailed {
            path: path.to_path_buf(),
        })?;

    let written = temp_file
        .write_all(content)
        .and_then(|()| temp_file.sync_all());
    if let Err(e) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(Error::io(&temp_path, e));
    }

    temp_file.unlock().map_err(|_| Error::LockFailed {
        path: path.to_path_buf(),
    })?;

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(Error::io(path, e));
    }

    Ok(())
}

/// Read text content from a file.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

/// Write text content to a file atomically.
pub fn write_text(path: &Path, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}

/// Create a single directory that must not exist yet.
///
/// The parent is created if needed. An occupied target is reported as
/// [`Error::DirectoryAlreadyExists`] and left untouched.
pub fn create_dir_new(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    match fs::create_dir(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => Err(Error::DirectoryAlreadyExists {
            path: path.to_path_buf(),
        }),
        Err(e) => Err(Error::io(path, e)),
    }
}

/// Recursively remove a directory, treating an absent one as already removed.
pub fn remove_dir_if_exists(path: &Path) -> Result<()> {
    match fs::remove_dir_all(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(Error::io(path, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn write_atomic_leaves_no_temp_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".meta.json");

        write_text(&path, "{}\n").unwrap();

        let leftovers: Vec<_> = fs::read_dir(temp.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty(), "found {leftovers:?}");
        assert_eq!(read_text(&path).unwrap(), "{}\n");
    }

    #[test]
    fn write_atomic_requires_parent() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing").join("request.json");

        assert!(matches!(write_text(&path, "{}"), Err(Error::Io { .. })));
    }

    #[test]
    fn create_dir_new_refuses_existing() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("Suite");

        create_dir_new(&dir).unwrap();
        let err = create_dir_new(&dir).unwrap_err();

        assert!(matches!(err, Error::DirectoryAlreadyExists { path } if path == dir));
    }

    #[test]
    fn create_dir_new_creates_missing_parents() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("a").join("b").join("Suite");

        create_dir_new(&dir).unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn remove_dir_if_exists_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("Folder");
        fs::create_dir_all(dir.join("nested")).unwrap();

        remove_dir_if_exists(&dir).unwrap();
        remove_dir_if_exists(&dir).unwrap();
        assert!(!dir.exists());
    }
}
