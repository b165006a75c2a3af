//! Collection document <-> directory tree codec
//!
//! This crate turns an API collection (nested folders of HTTP requests,
//! saved responses and scripts) into a directory tree that version control
//! handles well, and reads such a tree back:
//!
//! - **Export**: [`export`] writes one directory per folder or request,
//!   `request.json`/`response.json` files, `event.<listen>.js` scripts and the
//!   ordering sidecars `.meta.json` and `.event.meta.json`
//! - **Import**: [`import`] rebuilds the document, taking sibling order from
//!   the sidecars rather than from the directory listing
//! - **Structural mutation**: [`create_folder`] and [`remove_folder`] edit an
//!   exported tree in place and keep the parent's ordering consistent
//!
//! # Architecture
//!
//! ```text
//!              coltree-cli
//!                   |
//!             coltree-core
//!   (model, export, import, mutate)
//!                   |
//!              coltree-fs
//!  (guards, atomic I/O, name codec, sidecars)
//! ```
//!
//! # Example
//!
//! ```no_run
//! use coltree_core::{CollectionDocument, ExportOptions, export, import};
//! use std::path::Path;
//!
//! fn example() -> coltree_core::Result<()> {
//!     let document = CollectionDocument::load(Path::new("collection.json"))?;
//!     let report = export(&document, Path::new("out"), ExportOptions::default())?;
//!     let restored = import(&report.root)?;
//!     assert_eq!(restored.name(), document.name());
//!     Ok(())
//! }
//! ```

pub mod body;
pub mod error;
pub mod event;
pub mod export;
pub mod import;
pub mod meta;
pub mod model;
pub mod mutate;

pub use error::{Error, Result};
pub use export::{ExportOptions, ExportReport, ExportWarning, Exporter, export};
pub use import::{Importer, NodeKind, TreeNode, import};
pub use meta::{DirectoryMeta, EventMeta};
pub use model::{
    Body, CollectionDocument, Event, Folder, Header, Info, Item, Request, RequestItem, Script,
};
pub use mutate::{create_folder, remove_folder};
