//! Command implementations for coltree-cli

pub mod check;
pub mod export;
pub mod folder;
pub mod import;

pub use check::run_check;
pub use export::run_export;
pub use folder::{run_create_folder, run_remove_folder};
pub use import::run_import;
