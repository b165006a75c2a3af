//! Error types for coltree-core

use std::path::{Path, PathBuf};

/// Result type for coltree-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while exporting, importing or mutating a tree
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Guard, I/O, name codec and sidecar errors from coltree-fs
    #[error(transparent)]
    Fs(#[from] coltree_fs::Error),

    /// Event trigger that cannot form an `event.<listen>.js` file name
    #[error("Event trigger {listen:?} cannot be stored as an event file")]
    InvalidEventName { listen: String },

    /// Two events on one node share a trigger and would share a file
    #[error("Duplicate {listen:?} event in {path}")]
    DuplicateEvent { listen: String, path: PathBuf },

    /// A structural mutation failed half way and could not be undone
    #[error("Collection tree at {path} may be inconsistent: {message}")]
    MutationRollbackFailure { path: PathBuf, message: String },

    /// JSON serialization/deserialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Content of `path` did not have the expected shape.
    pub(crate) fn corrupt(path: &Path, message: impl ToString) -> Self {
        Self::Fs(coltree_fs::Error::MetadataCorrupt {
            path: path.to_path_buf(),
            message: message.to_string(),
        })
    }
}
