//! Folder mutation command implementations

use std::path::Path;

use colored::Colorize;

use crate::error::Result;

/// Run the create-folder command
pub fn run_create_folder(path: &Path) -> Result<()> {
    println!(
        "{} Creating folder: {}",
        "=>".blue().bold(),
        path.display().to_string().cyan()
    );

    coltree_core::create_folder(path)?;

    println!("{} Folder created.", "OK".green().bold());
    Ok(())
}

/// Run the remove-folder command
pub fn run_remove_folder(path: &Path) -> Result<()> {
    println!(
        "{} Removing folder: {}",
        "=>".blue().bold(),
        path.display().to_string().cyan()
    );

    coltree_core::remove_folder(path)?;

    println!("{} Folder removed.", "OK".green().bold());
    Ok(())
}
