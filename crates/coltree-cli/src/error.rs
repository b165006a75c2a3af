//! Error types for coltree-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from coltree-core
    #[error(transparent)]
    Core(#[from] coltree_core::Error),

    /// Error from coltree-fs
    #[error(transparent)]
    Fs(#[from] coltree_fs::Error),

    /// Failure to render the imported document
    #[error("Failed to serialize collection: {0}")]
    Json(#[from] serde_json::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
