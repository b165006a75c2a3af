//! Error types for coltree-fs

use std::path::PathBuf;

/// Result type for coltree-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in coltree-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory {path} already exists")]
    DirectoryAlreadyExists { path: PathBuf },

    #[error("Unable to open directory {path}")]
    DirectoryMissing { path: PathBuf },

    #[error("Unable to read file {path}: {source}")]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is not a collection directory: .meta.json is missing or unreadable")]
    NotACollectionDirectory { path: PathBuf },

    #[error("Corrupt metadata in {path}: {message}")]
    MetadataCorrupt { path: PathBuf, message: String },

    #[error("Name {name:?} contains a path separator; enable slash substitution or rename it")]
    UnsafeName { name: String },

    #[error("Name {name:?} cannot be used as a directory name: {reason}")]
    InvalidName { name: String, reason: &'static str },

    #[error("Failed to parse {format} at {path}: {message}")]
    ConfigParse {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Failed to serialize {format} for {path}: {message}")]
    ConfigSerialize {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Unsupported file format: {extension}")]
    UnsupportedFormat { extension: String },

    #[error("Lock acquisition failed for {path}")]
    LockFailed { path: PathBuf },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Re-label a parse failure as corrupt sidecar metadata.
    ///
    /// Other errors pass through unchanged.
    pub fn into_metadata_corrupt(self) -> Self {
        match self {
            Self::ConfigParse { path, message, .. } => Self::MetadataCorrupt { path, message },
            other => other,
        }
    }
}
