//! Collection document -> directory tree
//!
//! The exporter walks the document pre-order: a node's directory and its own
//! files are written before any child is visited, and a folder's `.meta.json`
//! is written once all of its children exist.

use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::body;
use crate::event;
use crate::meta::DirectoryMeta;
use crate::model::{CollectionDocument, Folder, Item, RequestItem};
use crate::Result;
use coltree_fs::{
    CollectionFile, ConfigStore, assert_directory_absent, io, make_temp_directory_in,
    resolve_collision, sanitize,
};

/// Options controlling an export
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    /// Escape `/` and `\` in item names instead of failing.
    pub substitute_slashes: bool,
    /// Build the tree in a staging directory and rename it into place, so a
    /// failed export leaves nothing behind.
    pub atomic: bool,
}

/// Non-fatal problem met during an export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportWarning {
    /// A body declared as JSON did not parse; it was written verbatim.
    BodyReformat { item: String, message: String },
}

impl fmt::Display for ExportWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BodyReformat { item, message } => write!(
                f,
                "Unable to parse raw body for {item} as JSON, kept as text: {message}"
            ),
        }
    }
}

/// Summary of a finished export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportReport {
    /// Root directory of the exported tree
    pub root: PathBuf,
    /// Number of folder directories written (the root excluded)
    pub folders: usize,
    /// Number of request directories written
    pub requests: usize,
    /// Problems that did not stop the export
    pub warnings: Vec<ExportWarning>,
}

impl ExportReport {
    fn new(root: PathBuf) -> Self {
        Self {
            root,
            folders: 0,
            requests: 0,
            warnings: Vec::new(),
        }
    }
}

/// Writes collection documents as directory trees
#[derive(Debug, Default)]
pub struct Exporter {
    options: ExportOptions,
    store: ConfigStore,
}

impl Exporter {
    pub fn new(options: ExportOptions) -> Self {
        Self {
            options,
            store: ConfigStore::new(),
        }
    }

    /// Export `document` into a new directory under `target_root`.
    ///
    /// The directory is named after `info.name`. If it already exists the
    /// export fails with `DirectoryAlreadyExists` before writing anything.
    pub fn export(&self, document: &CollectionDocument, target_root: &Path) -> Result<ExportReport> {
        let root_name = sanitize(document.name(), self.options.substitute_slashes)?;
        let root = target_root.join(&root_name);
        assert_directory_absent(&root)?;

        let mut report = ExportReport::new(root.clone());

        if self.options.atomic {
            fs::create_dir_all(target_root).map_err(|e| coltree_fs::Error::io(target_root, e))?;
            let staging = make_temp_directory_in(target_root)?;
            let staged_root = staging.path().join(&root_name);

            self.write_root(document, &staged_root, &mut report)?;

            assert_directory_absent(&root)?;
            fs::rename(&staged_root, &root).map_err(|e| coltree_fs::Error::io(&root, e))?;
            tracing::debug!(staging = %staging.path().display(), "promoted staged export");
        } else {
            self.write_root(document, &root, &mut report)?;
        }

        tracing::info!(
            root = %root.display(),
            folders = report.folders,
            requests = report.requests,
            warnings = report.warnings.len(),
            "exported collection"
        );
        Ok(report)
    }

    fn write_root(
        &self,
        document: &CollectionDocument,
        dir: &Path,
        report: &mut ExportReport,
    ) -> Result<()> {
        io::create_dir_new(dir)?;

        let hoisted = [
            (CollectionFile::Info, Some(serde_json::to_value(&document.info)?)),
            (CollectionFile::Auth, document.auth.clone()),
            (
                CollectionFile::Variable,
                document.variable.clone().map(Value::Array),
            ),
        ];
        for (file, value) in hoisted {
            let (Some(key), Some(value)) = (file.root_key(), value) else {
                continue;
            };
            let mut sidecar = Map::new();
            sidecar.insert(key.to_string(), value);
            self.store.save(&dir.join(file), &sidecar)?;
        }

        if !document.event.is_empty() {
            event::write_events(dir, &document.event)?;
        }

        let children_order = self.write_children(dir, &document.item, report)?;
        DirectoryMeta::new(children_order, None).save(dir)
    }

    /// Write every child of `dir` and return their on-disk names in order.
    fn write_children(
        &self,
        dir: &Path,
        items: &[Item],
        report: &mut ExportReport,
    ) -> Result<Vec<String>> {
        let mut emitted = HashSet::with_capacity(items.len());
        let mut order = Vec::with_capacity(items.len());

        for item in items {
            let segment = sanitize(item.name(), self.options.substitute_slashes)?;
            let segment = resolve_collision(&emitted, &segment);
            if segment != item.name() {
                tracing::debug!(name = item.name(), segment = %segment, "renamed on disk");
            }
            emitted.insert(segment.clone());

            let child = dir.join(&segment);
            match item {
                Item::Folder(folder) => self.write_folder(folder, &child, report)?,
                Item::Request(request) => self.write_request(request, &child, report)?,
            }
            order.push(segment);
        }

        Ok(order)
    }

    fn write_folder(&self, folder: &Folder, dir: &Path, report: &mut ExportReport) -> Result<()> {
        tracing::debug!(path = %dir.display(), "writing folder");
        io::create_dir_new(dir)?;

        if !folder.event.is_empty() {
            event::write_events(dir, &folder.event)?;
        }

        let children_order = self.write_children(dir, &folder.item, report)?;
        DirectoryMeta::new(children_order, folder.description.clone()).save(dir)?;

        report.folders += 1;
        Ok(())
    }

    fn write_request(
        &self,
        item: &RequestItem,
        dir: &Path,
        report: &mut ExportReport,
    ) -> Result<()> {
        tracing::debug!(path = %dir.display(), "writing request");
        io::create_dir_new(dir)?;

        let (request, reformat_error) = body::request_to_disk(&item.request)?;
        if let Some(message) = reformat_error {
            tracing::warn!(item = %item.name, error = %message, "Unable to parse raw body as JSON");
            report.warnings.push(ExportWarning::BodyReformat {
                item: item.name.clone(),
                message,
            });
        }
        self.store.save(&dir.join(CollectionFile::Request), &request)?;

        if !item.event.is_empty() {
            event::write_events(dir, &item.event)?;
        }

        if let Some(response) = &item.response {
            self.store.save(&dir.join(CollectionFile::Response), response)?;
        }

        report.requests += 1;
        Ok(())
    }
}

/// Export `document` under `target_root` with the given options.
pub fn export(
    document: &CollectionDocument,
    target_root: &Path,
    options: ExportOptions,
) -> Result<ExportReport> {
    Exporter::new(options).export(document, target_root)
}
