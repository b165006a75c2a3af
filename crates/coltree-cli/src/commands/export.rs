//! Export command implementation

use std::path::Path;

use colored::Colorize;
use coltree_core::{CollectionDocument, ExportOptions, Exporter};
use coltree_fs::assert_file_readable;

use crate::error::Result;

/// Run the export command
///
/// Reads `collection` and writes its directory tree under `out`.
pub fn run_export(collection: &Path, out: &Path, options: ExportOptions) -> Result<()> {
    assert_file_readable(collection)?;

    println!(
        "{} Exporting {}",
        "=>".blue().bold(),
        collection.display().to_string().cyan()
    );

    let document = CollectionDocument::load(collection)?;
    let report = Exporter::new(options).export(&document, out)?;

    for warning in &report.warnings {
        println!("{} {}", "warning:".yellow().bold(), warning);
    }

    println!(
        "{} Exported {} folders and {} requests to {}",
        "OK".green().bold(),
        report.folders,
        report.requests,
        report.root.display()
    );
    Ok(())
}
