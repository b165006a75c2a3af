//! Filesystem layer for coltree
//!
//! Everything the collection codec needs from the disk lives here: the
//! guard predicates that gate destructive operations, atomic sidecar writes,
//! the name codec that turns item names into directory segments, and scratch
//! workspace allocation.

pub mod config;
pub mod constants;
pub mod error;
pub mod guard;
pub mod io;
pub mod path;
pub mod workspace;

pub use config::ConfigStore;
pub use constants::CollectionFile;
pub use error::{Error, Result};
pub use guard::{
    assert_collection_dir, assert_directory_absent, assert_directory_exists, assert_file_readable,
};
pub use path::{resolve_collision, sanitize};
pub use workspace::{make_temp_directory, make_temp_directory_in};
