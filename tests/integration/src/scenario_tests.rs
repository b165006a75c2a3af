//! Scenario tests for the on-disk contract
//!
//! Each test pins one observable property of an exported tree that other
//! tools (and reviewers reading diffs) rely on.

use coltree_core::{CollectionDocument, Error, ExportOptions, Item, export, import};
use coltree_fs::{make_temp_directory, make_temp_directory_in};
use coltree_test_utils::fixtures;
use coltree_test_utils::tree::TestTree;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::fs;

fn export_fixture(tree: &TestTree, fixture: serde_json::Value) -> std::path::PathBuf {
    let document = CollectionDocument::try_from(fixture).unwrap();
    export(&document, tree.root(), ExportOptions::default())
        .unwrap()
        .root
}

#[test]
fn test_login_request_scenario() {
    let tree = TestTree::new();
    let root = export_fixture(&tree, fixtures::login_request());

    assert_eq!(tree.read_json("Suite/.meta.json"), json!({"childrenOrder": ["Login"]}));
    let on_disk = tree.read_json("Suite/Login/request.json");
    assert_eq!(on_disk["body"]["raw_json_formatted"], json!({"u": 1}));
    assert!(on_disk["body"].get("raw").is_none());

    let document = import(&root).unwrap();
    let Item::Request(login) = &document.item[0] else {
        panic!("Login should import as a request");
    };
    let raw = login.request.body.as_ref().and_then(|b| b.raw.as_deref());
    assert_eq!(raw, Some("{\"u\":1}"));
    assert_eq!(
        serde_json::to_value(&document).unwrap(),
        fixtures::login_request()
    );
}

#[test]
fn test_listing_order_never_leaks_into_document() {
    let tree = TestTree::new();
    let root = export_fixture(&tree, fixtures::full_collection());

    // Rewrite the root order by hand: import must follow it
    let mut meta = tree.read_json("Store API/.meta.json");
    meta["childrenOrder"] = json!(["Empty", "Orders", "Health"]);
    tree.write("Store API/.meta.json", &meta.to_string());

    let document = import(&root).unwrap();
    let names: Vec<&str> = document.item.iter().map(Item::name).collect();
    assert_eq!(names, vec!["Empty", "Orders", "Health"]);
}

#[test]
fn test_half_written_tree_is_not_reused() {
    let tree = TestTree::new();
    tree.collection_dir("Suite", &[]);

    let document = CollectionDocument::try_from(fixtures::login_request()).unwrap();
    let result = export(&document, tree.root(), ExportOptions::default());

    assert!(matches!(
        result,
        Err(Error::Fs(coltree_fs::Error::DirectoryAlreadyExists { .. }))
    ));
    assert_eq!(tree.entries("Suite"), vec![".meta.json"]);
}

#[test]
fn test_temp_directories_are_unique_and_owned() {
    let first = make_temp_directory().unwrap();
    let second = make_temp_directory().unwrap();
    assert_ne!(first.path(), second.path());

    let nested = make_temp_directory_in(first.path()).unwrap();
    let nested_path = nested.path().to_path_buf();
    assert!(nested_path.starts_with(first.path()));

    drop(nested);
    assert!(!nested_path.exists());
    assert!(fs::read_dir(first.path()).unwrap().next().is_none());
}

#[test]
fn test_every_exported_sidecar_is_pretty_json() {
    let tree = TestTree::new();
    export_fixture(&tree, fixtures::full_collection());

    for file in [
        "Store API/.meta.json",
        "Store API/.info.json",
        "Store API/.auth.json",
        "Store API/.variable.json",
        "Store API/.event.meta.json",
        "Store API/Orders/Create order/request.json",
    ] {
        let content = tree.read(file);
        assert!(content.ends_with("}\n"), "{file} should end with a newline");
        assert!(content.contains("\n  \""), "{file} should be indented");
    }
}
