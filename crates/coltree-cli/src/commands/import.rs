//! Import command implementation
//!
//! The document goes to stdout by default, so progress is reported on
//! stderr.

use std::path::Path;

use colored::Colorize;
use coltree_core::Importer;
use coltree_fs::assert_collection_dir;

use crate::error::Result;

/// Run the import command
pub fn run_import(dir: &Path, out: Option<&Path>) -> Result<()> {
    assert_collection_dir(dir)?;

    eprintln!(
        "{} Importing {}",
        "=>".blue().bold(),
        dir.display().to_string().cyan()
    );

    let document = Importer::new().import(dir)?;

    match out {
        Some(path) => {
            document.save(path)?;
            let (folders, requests) = document.counts();
            eprintln!(
                "{} Imported {} folders and {} requests into {}",
                "OK".green().bold(),
                folders,
                requests,
                path.display()
            );
        }
        None => println!("{}", serde_json::to_string_pretty(&document)?),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use coltree_core::{CollectionDocument, ExportOptions, export};
    use coltree_test_utils::fixtures;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_import_to_file() {
        let temp = TempDir::new().unwrap();
        let document = CollectionDocument::try_from(fixtures::suite_login()).unwrap();
        let report = export(&document, temp.path(), ExportOptions::default()).unwrap();
        let out = temp.path().join("suite.json");

        run_import(&report.root, Some(&out)).unwrap();

        assert_eq!(CollectionDocument::load(&out).unwrap(), document);
    }

    #[test]
    fn test_import_requires_collection_dir() {
        let temp = TempDir::new().unwrap();

        let result = run_import(temp.path(), None);

        assert!(matches!(
            result,
            Err(crate::error::CliError::Fs(
                coltree_fs::Error::NotACollectionDirectory { .. }
            ))
        ));
    }
}
