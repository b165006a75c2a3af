//! Scratch directory allocation

use crate::{Error, Result};
use std::path::Path;
use tempfile::TempDir;

/// Prefix of every scratch directory this crate allocates.
pub const TEMP_PREFIX: &str = "coltree-";

/// Allocate a uniquely named directory under the system temp directory.
///
/// The directory is removed when the handle drops; call [`TempDir::keep`]
/// to take over cleanup.
pub fn make_temp_directory() -> Result<TempDir> {
    tempfile::Builder::new()
        .prefix(TEMP_PREFIX)
        .tempdir()
        .map_err(|e| Error::io(std::env::temp_dir(), e))
}

/// Allocate a uniquely named directory inside `dir`.
///
/// Staging next to the final location keeps the promoting rename on one
/// filesystem.
pub fn make_temp_directory_in(dir: &Path) -> Result<TempDir> {
    tempfile::Builder::new()
        .prefix(TEMP_PREFIX)
        .tempdir_in(dir)
        .map_err(|e| Error::io(dir, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_directories_are_unique() {
        let a = make_temp_directory().unwrap();
        let b = make_temp_directory().unwrap();

        assert_ne!(a.path(), b.path());
        assert!(a.path().is_dir());
        let name = a.path().file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with(TEMP_PREFIX));
    }

    #[test]
    fn temp_directory_removed_on_drop() {
        let dir = make_temp_directory().unwrap();
        let path = dir.path().to_path_buf();
        drop(dir);
        assert!(!path.exists());
    }

    #[test]
    fn temp_directory_in_parent() {
        let parent = TempDir::new().unwrap();
        let staged = make_temp_directory_in(parent.path()).unwrap();
        assert_eq!(staged.path().parent(), Some(parent.path()));
    }
}
