//! Folder lifecycle on an exported tree
//!
//! Each operation touches exactly one folder directory and its parent's
//! `.meta.json`. There is no transaction: a failure after the filesystem
//! changed is compensated where possible and reported as
//! [`Error::MutationRollbackFailure`] where not.

use std::path::{Path, PathBuf};

use crate::meta::DirectoryMeta;
use crate::{Error, Result};
use coltree_fs::{assert_collection_dir, io, path::validate_segment};

/// Split a folder path into its parent directory and base name.
fn split_folder_path(path: &Path) -> Result<(PathBuf, String)> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| coltree_fs::Error::InvalidName {
            name: path.display().to_string(),
            reason: "path has no UTF-8 final component",
        })?;
    validate_segment(name)?;

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    Ok((parent, name.to_string()))
}

/// Create an empty folder at `path` and register it with its parent.
///
/// The parent must be a collection directory. Whatever already lives at
/// `path` is replaced. Re-creating a registered folder does not duplicate
/// its `childrenOrder` entry.
pub fn create_folder(path: &Path) -> Result<()> {
    let (parent, name) = split_folder_path(path)?;
    assert_collection_dir(&parent)?;
    let mut parent_meta = DirectoryMeta::load_required(&parent)?;

    let dir = parent.join(&name);
    io::remove_dir_if_exists(&dir)?;
    io::create_dir_new(&dir)?;

    let registered = DirectoryMeta::default().save(&dir).and_then(|()| {
        if parent_meta.register_child(&name) {
            parent_meta.save(&parent)
        } else {
            Ok(())
        }
    });

    if let Err(e) = registered {
        tracing::warn!(path = %dir.display(), error = %e, "rolling back folder creation");
        if let Err(rollback) = io::remove_dir_if_exists(&dir) {
            return Err(Error::MutationRollbackFailure {
                path: dir,
                message: format!("{e}; removing the new directory also failed: {rollback}"),
            });
        }
        return Err(e);
    }

    tracing::info!(path = %dir.display(), "created folder");
    Ok(())
}

/// Delete the folder at `path` and drop it from its parent's order.
///
/// A folder that is already gone only has its registration removed.
pub fn remove_folder(path: &Path) -> Result<()> {
    let (parent, name) = split_folder_path(path)?;
    assert_collection_dir(&parent)?;
    let mut parent_meta = DirectoryMeta::load_required(&parent)?;

    let dir = parent.join(&name);
    io::remove_dir_if_exists(&dir)?;

    parent_meta.unregister_child(&name);
    parent_meta
        .save(&parent)
        .map_err(|e| Error::MutationRollbackFailure {
            path: parent.clone(),
            message: format!("{} was deleted but its registration remains: {e}", dir.display()),
        })?;

    tracing::info!(path = %dir.display(), "removed folder");
    Ok(())
}
