//! coltree CLI
//!
//! Converts API collection files to directory trees and back.

mod cli;
mod commands;
mod error;
mod settings;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use cli::{Cli, Commands};
use error::{CliError, Result};
use settings::Settings;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    match cli.command {
        Some(cmd) => execute_command(cmd, &Settings::load(cli.config.as_deref())?),
        None => {
            println!("{} collection tree codec", "coltree".green().bold());
            println!();
            println!("Run {} for available commands.", "coltree --help".cyan());
            Ok(())
        }
    }
}

/// Logs go to stderr so `import` can stream the document on stdout.
fn init_tracing(verbose: bool) -> Result<()> {
    let builder = FmtSubscriber::builder().with_writer(std::io::stderr);

    let installed = if verbose {
        let subscriber = builder
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
    } else {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let subscriber = builder.with_env_filter(filter).finish();
        tracing::subscriber::set_global_default(subscriber)
    };

    installed.map_err(|e| CliError::user(format!("Failed to set tracing subscriber: {e}")))?;
    tracing::debug!(verbose, "tracing initialised");
    Ok(())
}

fn execute_command(cmd: Commands, settings: &Settings) -> Result<()> {
    match cmd {
        Commands::Export {
            collection,
            out,
            substitute_slashes,
            atomic,
        } => commands::run_export(
            &collection,
            &out,
            settings.export_options(substitute_slashes, atomic),
        ),
        Commands::Import { dir, out } => commands::run_import(&dir, out.as_deref()),
        Commands::CreateFolder { path } => commands::run_create_folder(&path),
        Commands::RemoveFolder { path } => commands::run_remove_folder(&path),
        Commands::Check { dir } => commands::run_check(&dir),
    }
}
