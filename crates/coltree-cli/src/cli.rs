//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// coltree - Store API collections as reviewable directory trees
#[derive(Parser, Debug)]
#[command(name = "coltree")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Settings file (TOML or JSON) with an `[export]` table
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Export a collection file as a directory tree
    ///
    /// The tree is created under OUT in a directory named after the
    /// collection. An existing directory of that name is never overwritten.
    ///
    /// Examples:
    ///   coltree export store.json                # Creates ./Store API/
    ///   coltree export store.json -o trees       # Creates trees/Store API/
    ///   coltree export store.json --atomic       # All or nothing
    Export {
        /// Collection JSON file
        collection: PathBuf,

        /// Directory to create the tree in
        #[arg(short, long, default_value = ".")]
        out: PathBuf,

        /// Escape `/` and `\` in item names instead of failing
        #[arg(long, env = "COLTREE_SUBSTITUTE_SLASHES")]
        substitute_slashes: bool,

        /// Build the tree in a staging directory and move it into place
        #[arg(long)]
        atomic: bool,
    },

    /// Rebuild a collection file from a directory tree
    ///
    /// Prints pretty JSON to stdout unless --out is given.
    Import {
        /// Root directory of an exported collection
        dir: PathBuf,

        /// File to write the collection to
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Create an empty folder and register it with its parent
    CreateFolder {
        /// Path of the new folder inside an exported tree
        path: PathBuf,
    },

    /// Delete a folder and drop it from its parent's order
    RemoveFolder {
        /// Path of the folder inside an exported tree
        path: PathBuf,
    },

    /// Verify that a directory is an importable collection tree
    Check {
        /// Root directory of an exported collection
        dir: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_export_with_defaults() {
        let cli = Cli::parse_from(["coltree", "export", "store.json"]);
        assert!(!cli.verbose);
        assert_eq!(
            cli.command,
            Some(Commands::Export {
                collection: PathBuf::from("store.json"),
                out: PathBuf::from("."),
                substitute_slashes: false,
                atomic: false,
            })
        );
    }

    #[test]
    fn parse_export_flags() {
        let cli = Cli::parse_from([
            "coltree",
            "export",
            "store.json",
            "-o",
            "trees",
            "--substitute-slashes",
            "--atomic",
        ]);
        assert_eq!(
            cli.command,
            Some(Commands::Export {
                collection: PathBuf::from("store.json"),
                out: PathBuf::from("trees"),
                substitute_slashes: true,
                atomic: true,
            })
        );
    }

    #[test]
    fn parse_import_with_output() {
        let cli = Cli::parse_from(["coltree", "import", "Suite", "--out", "suite.json"]);
        assert_eq!(
            cli.command,
            Some(Commands::Import {
                dir: PathBuf::from("Suite"),
                out: Some(PathBuf::from("suite.json")),
            })
        );
    }

    #[test]
    fn parse_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "coltree",
            "create-folder",
            "Suite/Auth",
            "--verbose",
            "--config",
            "coltree.toml",
        ]);
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("coltree.toml")));
        assert_eq!(
            cli.command,
            Some(Commands::CreateFolder {
                path: PathBuf::from("Suite/Auth"),
            })
        );
    }

    #[test]
    fn parse_no_command() {
        let cli = Cli::parse_from(["coltree"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
