//! Directory tree -> collection document
//!
//! The importer only reads. Semantic order always comes from the ordering
//! sidecars; listing order is normalised to file-name order first so that
//! entries missing from a sidecar still come back deterministically.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::body;
use crate::event;
use crate::meta::{DirectoryMeta, sort_by_order};
use crate::model::{CollectionDocument, Event, Folder, Info, Item, Request, RequestItem};
use crate::{Error, Result};
use coltree_fs::{CollectionFile, ConfigStore, assert_directory_exists};

/// Kind of a listed filesystem entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    File,
    Directory,
}

/// Typed directory listing
///
/// Ordering sidecars are left out: they steer the import but never become
/// document content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub path: PathBuf,
    pub name: String,
    pub kind: NodeKind,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// List `path` recursively. Children are sorted by name.
    pub fn scan(path: &Path) -> Result<Self> {
        // `.` and friends have no file name of their own
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .or_else(|| {
                fs::canonicalize(path)
                    .ok()
                    .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
            })
            .unwrap_or_default();
        Self::scan_dir(path.to_path_buf(), name)
    }

    fn scan_dir(path: PathBuf, name: String) -> Result<Self> {
        let entries = fs::read_dir(&path).map_err(|e| coltree_fs::Error::io(&path, e))?;

        let mut children = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| coltree_fs::Error::io(&path, e))?;
            let child_path = entry.path();
            let child_name = entry.file_name().to_string_lossy().into_owned();
            let file_type = entry
                .file_type()
                .map_err(|e| coltree_fs::Error::io(&child_path, e))?;

            if file_type.is_dir() {
                children.push(Self::scan_dir(child_path, child_name)?);
            } else if file_type.is_file() {
                if CollectionFile::from_file_name(&child_name).is_some_and(|f| f.is_metadata()) {
                    continue;
                }
                children.push(Self {
                    path: child_path,
                    name: child_name,
                    kind: NodeKind::File,
                    children: Vec::new(),
                });
            } else {
                tracing::debug!(path = %child_path.display(), "skipping special file");
            }
        }
        children.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(Self {
            path,
            name,
            kind: NodeKind::Directory,
            children,
        })
    }
}

/// Everything found directly inside one directory
#[derive(Debug, Default)]
struct DirectoryContents {
    description: Option<String>,
    events: Vec<Event>,
    items: Vec<Item>,
    request: Option<Request>,
    response: Option<Value>,
}

/// Reads directory trees back into collection documents
#[derive(Debug, Default)]
pub struct Importer {
    store: ConfigStore,
}

impl Importer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the document stored under `root`.
    pub fn import(&self, root: &Path) -> Result<CollectionDocument> {
        assert_directory_exists(root)?;
        let tree = TreeNode::scan(root)?;
        let document = self.document(&tree)?;

        let (folders, requests) = document.counts();
        tracing::info!(root = %root.display(), folders, requests, "imported collection");
        Ok(document)
    }

    fn document(&self, tree: &TreeNode) -> Result<CollectionDocument> {
        let mut document = CollectionDocument::new(tree.name.clone());

        for child in tree.children.iter().filter(|c| c.kind == NodeKind::File) {
            match CollectionFile::from_file_name(&child.name) {
                Some(CollectionFile::Info) => {
                    document.info = self.hoisted::<Info>(child, CollectionFile::Info)?;
                }
                Some(CollectionFile::Auth) => {
                    document.auth = Some(self.hoisted(child, CollectionFile::Auth)?);
                }
                Some(CollectionFile::Variable) => {
                    document.variable = Some(self.hoisted(child, CollectionFile::Variable)?);
                }
                _ => {}
            }
        }

        let contents = self.directory(tree)?;
        if contents.request.is_some() || contents.response.is_some() {
            tracing::warn!(path = %tree.path.display(), "ignoring request files at collection root");
        }
        document.event = contents.events;
        document.item = contents.items;
        Ok(document)
    }

    /// Parse a root sidecar and take its single top-level key.
    fn hoisted<T: DeserializeOwned>(&self, node: &TreeNode, file: CollectionFile) -> Result<T> {
        let mut sidecar: serde_json::Map<String, Value> = self.load(&node.path)?;
        let key = file.root_key().unwrap_or_default();
        let value = sidecar
            .remove(key)
            .ok_or_else(|| Error::corrupt(&node.path, format!("missing top-level key `{key}`")))?;

        serde_json::from_value(value).map_err(|e| Error::corrupt(&node.path, e))
    }

    fn item(&self, node: &TreeNode) -> Result<Item> {
        let contents = self.directory(node)?;

        if let Some(request) = contents.request {
            if !contents.items.is_empty() {
                tracing::warn!(path = %node.path.display(), "ignoring sub-directories of a request");
            }
            return Ok(Item::Request(RequestItem {
                name: node.name.clone(),
                request,
                response: contents.response,
                event: contents.events,
            }));
        }

        if contents.response.is_some() {
            tracing::warn!(path = %node.path.display(), "ignoring response.json without request.json");
        }
        Ok(Item::Folder(Folder {
            name: node.name.clone(),
            description: contents.description,
            event: contents.events,
            item: contents.items,
        }))
    }

    fn directory(&self, node: &TreeNode) -> Result<DirectoryContents> {
        let mut contents = DirectoryContents::default();
        let mut children: Vec<&TreeNode> = node.children.iter().collect();
        let mut order = Vec::new();

        if let Some(meta) = DirectoryMeta::load(&node.path)? {
            sort_by_order(&mut children, &meta.children_order, |c| c.name.as_str());
            contents.description = meta.description;
            order = meta.children_order;
        }

        for child in children {
            if child.kind == NodeKind::Directory {
                // Hidden directories (`.git`, editor state) are items only when listed
                if child.name.starts_with('.') && !order.contains(&child.name) {
                    tracing::debug!(path = %child.path.display(), "ignoring hidden directory");
                    continue;
                }
                contents.items.push(self.item(child)?);
                continue;
            }

            match CollectionFile::from_file_name(&child.name) {
                Some(CollectionFile::Request) => {
                    let value: Value = self.load(&child.path)?;
                    contents.request = Some(body::request_from_disk(&child.path, value)?);
                }
                Some(CollectionFile::Response) => {
                    contents.response = Some(self.load(&child.path)?);
                }
                // Root sidecars are hoisted by `document`; anywhere else they are noise
                Some(_) => {}
                None => match event::parse_event_file_name(&child.name) {
                    Some(listen) => contents.events.push(event::read_event(&child.path, listen)?),
                    None => {
                        tracing::debug!(path = %child.path.display(), "ignoring unrecognised file");
                    }
                },
            }
        }

        if !contents.events.is_empty() {
            event::order_events(&node.path, &mut contents.events)?;
        }

        Ok(contents)
    }

    fn load<T: DeserializeOwned>(&self, path: &Path) -> Result<T> {
        self.store
            .load(path)
            .map_err(|e| Error::from(e.into_metadata_corrupt()))
    }
}

/// Rebuild the collection document stored under `root`.
pub fn import(root: &Path) -> Result<CollectionDocument> {
    Importer::new().import(root)
}
