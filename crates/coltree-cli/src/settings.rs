//! Settings file resolution
//!
//! Command-line flags win over the settings file, which wins over the
//! built-in defaults. Flags can only switch an option on.

use std::path::Path;

use coltree_core::ExportOptions;
use coltree_fs::{ConfigStore, assert_file_readable};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Contents of the file passed with `--config`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub export: ExportOptions,
}

impl Settings {
    /// Load `path`, or the defaults when no file was given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        assert_file_readable(path)?;
        let settings: Self = ConfigStore::new().load(path)?;
        tracing::debug!(path = %path.display(), ?settings, "loaded settings");
        Ok(settings)
    }

    /// Export options after applying command-line overrides.
    pub fn export_options(&self, substitute_slashes: bool, atomic: bool) -> ExportOptions {
        ExportOptions {
            substitute_slashes: self.export.substitute_slashes || substitute_slashes,
            atomic: self.export.atomic || atomic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn no_file_means_defaults() {
        let settings = Settings::load(None).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.export_options(false, false), ExportOptions::default());
    }

    #[test]
    fn toml_export_table_is_read() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("coltree.toml");
        fs::write(&path, "[export]\nsubstitute_slashes = true\n").unwrap();

        let settings = Settings::load(Some(&path)).unwrap();

        assert!(settings.export.substitute_slashes);
        assert!(!settings.export.atomic);
    }

    #[test]
    fn json_settings_are_read() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("coltree.json");
        fs::write(&path, r#"{"export": {"atomic": true}}"#).unwrap();

        let settings = Settings::load(Some(&path)).unwrap();

        assert!(settings.export.atomic);
    }

    #[test]
    fn flags_override_file() {
        let settings = Settings {
            export: ExportOptions {
                substitute_slashes: false,
                atomic: true,
            },
        };

        let options = settings.export_options(true, false);

        assert!(options.substitute_slashes);
        assert!(options.atomic);
    }

    #[test]
    fn missing_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        assert!(Settings::load(Some(&temp.path().join("absent.toml"))).is_err());
    }
}
