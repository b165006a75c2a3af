//! [`TestTree`] helper for export/import scenarios.

use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory with helper methods for building and asserting on
/// collection trees.
///
/// # Example
///
/// ```rust,no_run
/// use coltree_test_utils::tree::TestTree;
///
/// let tree = TestTree::new();
/// tree.collection_dir("Suite", &["Auth"]);
/// tree.assert_file_exists("Suite/.meta.json");
/// ```
pub struct TestTree {
    temp_dir: TempDir,
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}

impl TestTree {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Resolve `rel` against the root.
    pub fn path(&self, rel: &str) -> PathBuf {
        self.root().join(rel)
    }

    /// Create `rel` as a collection directory whose `.meta.json` lists
    /// `children`. The children themselves are not created.
    pub fn collection_dir(&self, rel: &str, children: &[&str]) -> PathBuf {
        let dir = self.path(rel);
        fs::create_dir_all(&dir).unwrap();
        let meta = serde_json::json!({ "childrenOrder": children });
        fs::write(
            dir.join(".meta.json"),
            serde_json::to_string_pretty(&meta).unwrap(),
        )
        .unwrap();
        dir
    }

    /// Write `content` to `rel`, creating parent directories.
    pub fn write(&self, rel: &str, content: &str) {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    /// Read `rel` as text.
    ///
    /// # Panics
    /// Panics with the path if the file cannot be read.
    pub fn read(&self, rel: &str) -> String {
        let path = self.path(rel);
        fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {e}", path.display()))
    }

    /// Read `rel` as JSON.
    ///
    /// # Panics
    /// Panics with the path if the file is unreadable or not JSON.
    pub fn read_json(&self, rel: &str) -> Value {
        let content = self.read(rel);
        serde_json::from_str(&content)
            .unwrap_or_else(|e| panic!("{rel} is not valid JSON: {e}\n{content}"))
    }

    /// `childrenOrder` of the `.meta.json` inside `rel`.
    pub fn children_order(&self, rel: &str) -> Vec<String> {
        let meta = self.read_json(&format!("{rel}/.meta.json"));
        meta["childrenOrder"]
            .as_array()
            .unwrap_or_else(|| panic!("{rel}/.meta.json has no childrenOrder"))
            .iter()
            .map(|v| v.as_str().unwrap().to_string())
            .collect()
    }

    /// Sorted names of the entries directly inside `rel`.
    pub fn entries(&self, rel: &str) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.path(rel))
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    /// Assert that `rel` exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, rel: &str) {
        let full_path = self.path(rel);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `rel` does **not** exist.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path exists.
    pub fn assert_file_not_exists(&self, rel: &str) {
        let full_path = self.path(rel);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }
}
