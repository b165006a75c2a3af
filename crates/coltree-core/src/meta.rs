//! Ordering sidecars
//!
//! Directory listings are unordered, so every folder carries a `.meta.json`
//! with the order of its children and every node with decomposed events a
//! `.event.meta.json` with the order of its event files.

use crate::Result;
use coltree_fs::{CollectionFile, ConfigStore, Error as FsError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::Path;

/// Contents of `.meta.json`.
///
/// Keys other than `childrenOrder` and `description` are preserved when the
/// file is rewritten.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryMeta {
    #[serde(default)]
    pub children_order: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DirectoryMeta {
    pub fn new(children_order: Vec<String>, description: Option<String>) -> Self {
        Self {
            children_order,
            description,
            extra: Map::new(),
        }
    }

    /// Load the sidecar of `dir`, or `None` if the directory has none.
    pub fn load(dir: &Path) -> Result<Option<Self>> {
        load_optional(&dir.join(CollectionFile::Meta))
    }

    /// Load the sidecar of `dir`, failing if it is missing.
    pub fn load_required(dir: &Path) -> Result<Self> {
        load_required(&dir.join(CollectionFile::Meta))
    }

    pub fn save(&self, dir: &Path) -> Result<()> {
        Ok(ConfigStore::new().save(&dir.join(CollectionFile::Meta), self)?)
    }

    /// Append `name` unless it is already listed. Returns whether it was added.
    pub fn register_child(&mut self, name: &str) -> bool {
        if self.children_order.iter().any(|n| n == name) {
            return false;
        }
        self.children_order.push(name.to_string());
        true
    }

    /// Drop every occurrence of `name`. Returns whether anything was removed.
    pub fn unregister_child(&mut self, name: &str) -> bool {
        let before = self.children_order.len();
        self.children_order.retain(|n| n != name);
        before != self.children_order.len()
    }
}

/// Contents of `.event.meta.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventMeta {
    #[serde(default)]
    pub event_order: Vec<String>,
}

impl EventMeta {
    /// Load the event sidecar of `dir`; it must exist once events do.
    pub fn load_required(dir: &Path) -> Result<Self> {
        load_required(&dir.join(CollectionFile::EventMeta))
    }

    pub fn save(&self, dir: &Path) -> Result<()> {
        Ok(ConfigStore::new().save(&dir.join(CollectionFile::EventMeta), self)?)
    }
}

fn load_optional<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    match ConfigStore::new().load(path) {
        Ok(value) => Ok(Some(value)),
        Err(FsError::Io { source, .. }) if source.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into_metadata_corrupt().into()),
    }
}

fn load_required<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    match ConfigStore::new().load(path) {
        Ok(value) => Ok(value),
        Err(FsError::Io { path, source }) => Err(FsError::FileUnreadable { path, source }.into()),
        Err(e) => Err(e.into_metadata_corrupt().into()),
    }
}

/// Stable sort of `entries` by position in `order`.
///
/// Entries missing from `order` go after all listed ones and keep their
/// incoming relative order. Duplicate names in `order` count at their first
/// position.
pub fn sort_by_order<T>(entries: &mut [T], order: &[String], name_of: impl Fn(&T) -> &str) {
    let mut index: HashMap<&str, usize> = HashMap::with_capacity(order.len());
    for (position, name) in order.iter().enumerate() {
        index.entry(name.as_str()).or_insert(position);
    }

    entries.sort_by_key(|entry| index.get(name_of(entry)).copied().unwrap_or(usize::MAX));
}
