//! Pre-flight checks gating destructive or structure-dependent operations
//!
//! Each predicate either returns `Ok(())` or a distinguishable [`Error`].
//! Library code never exits the process on failure; the CLI decides that.

use crate::{CollectionFile, Error, Result};
use std::fs::{self, File};
use std::io::ErrorKind;
use std::path::Path;

/// The directory must exist and be listable.
pub fn assert_directory_exists(dir: &Path) -> Result<()> {
    match fs::read_dir(dir) {
        Ok(_) => Ok(()),
        Err(e) => {
            tracing::debug!(path = %dir.display(), error = %e, "directory not readable");
            Err(Error::DirectoryMissing {
                path: dir.to_path_buf(),
            })
        }
    }
}

/// Nothing may occupy the path yet.
pub fn assert_directory_absent(dir: &Path) -> Result<()> {
    match fs::symlink_metadata(dir) {
        Ok(_) => Err(Error::DirectoryAlreadyExists {
            path: dir.to_path_buf(),
        }),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(Error::io(dir, e)),
    }
}

/// The path must be a regular file the current user can open for reading.
pub fn assert_file_readable(file: &Path) -> Result<()> {
    let unreadable = |source| Error::FileUnreadable {
        path: file.to_path_buf(),
        source,
    };

    let handle = File::open(file).map_err(unreadable)?;
    let metadata = handle.metadata().map_err(unreadable)?;
    if !metadata.is_file() {
        return Err(unreadable(std::io::Error::new(
            ErrorKind::InvalidInput,
            "not a regular file",
        )));
    }
    Ok(())
}

/// The directory must exist and carry a readable `.meta.json`.
///
/// This is the admission check before any structural mutation: operating on
/// a child of anything else would leave an unregistered directory behind.
pub fn assert_collection_dir(dir: &Path) -> Result<()> {
    assert_directory_exists(dir)?;
    assert_file_readable(&dir.join(CollectionFile::Meta)).map_err(|_| {
        Error::NotACollectionDirectory {
            path: dir.to_path_buf(),
        }
    })
}
