//! Format-agnostic loading and saving of sidecar and configuration files

use crate::{Error, Result, io};
use serde::{Serialize, de::DeserializeOwned};
use std::path::Path;

/// Format-agnostic file store.
///
/// Detects the format from the file extension and handles
/// serialization/deserialization transparently. Sidecar files (`.meta.json`
/// and friends) go through the JSON path; user configuration may also be TOML.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConfigStore;

impl ConfigStore {
    pub fn new() -> Self {
        Self
    }

    /// Load a value from a file.
    ///
    /// Format is detected from file extension:
    /// - `.json` -> JSON
    /// - `.toml` -> TOML
    pub fn load<T: DeserializeOwned>(&self, path: &Path) -> Result<T> {
        let content = io::read_text(path)?;
        Self::parse(path, &content)
    }

    /// Parse already-read content, using `path` for format detection and errors.
    pub fn parse<T: DeserializeOwned>(path: &Path, content: &str) -> Result<T> {
        match format_of(path)? {
            Format::Json => serde_json::from_str(content).map_err(|e| Error::ConfigParse {
                path: path.to_path_buf(),
                format: "JSON".into(),
                message: e.to_string(),
            }),
            Format::Toml => toml::from_str(content).map_err(|e| Error::ConfigParse {
                path: path.to_path_buf(),
                format: "TOML".into(),
                message: e.to_string(),
            }),
        }
    }

    /// Save a value to a file.
    ///
    /// JSON is pretty-printed with two-space indentation and a trailing
    /// newline so exported trees diff cleanly. Uses an atomic write.
    pub fn save<T: Serialize + ?Sized>(&self, path: &Path, value: &T) -> Result<()> {
        let content = match format_of(path)? {
            Format::Json => {
                let mut text =
                    serde_json::to_string_pretty(value).map_err(|e| Error::ConfigSerialize {
                        path: path.to_path_buf(),
                        format: "JSON".into(),
                        message: e.to_string(),
                    })?;
                text.push('\n');
                text
            }
            Format::Toml => toml::to_string_pretty(value).map_err(|e| Error::ConfigSerialize {
                path: path.to_path_buf(),
                format: "TOML".into(),
                message: e.to_string(),
            })?,
        };

        io::write_text(path, &content)
    }
}

enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> Result<Format> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match extension.as_str() {
        "json" => Ok(Format::Json),
        "toml" => Ok(Format::Toml),
        _ => Err(Error::UnsupportedFormat { extension }),
    }
}
