//! Check command implementation

use std::path::Path;

use colored::Colorize;
use coltree_core::Importer;
use coltree_fs::assert_collection_dir;

use crate::error::Result;

/// Run the check command
///
/// Passes when `dir` is a collection directory whose whole tree imports.
pub fn run_check(dir: &Path) -> Result<()> {
    assert_collection_dir(dir)?;
    let document = Importer::new().import(dir)?;
    let (folders, requests) = document.counts();

    println!(
        "{} {} is a valid collection tree",
        "OK".green().bold(),
        dir.display()
    );
    println!("{}:     {}", "Name".dimmed(), document.name().cyan());
    println!("{}:  {}", "Folders".dimmed(), folders);
    println!("{}: {}", "Requests".dimmed(), requests);
    Ok(())
}
