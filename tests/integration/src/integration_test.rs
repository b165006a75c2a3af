//! End-to-end integration test for the whole codec
//!
//! This test exercises the complete flow: collection file -> export ->
//! structural edits -> import -> collection file.

use coltree_core::{
    CollectionDocument, ExportOptions, Item, create_folder, export, import, remove_folder,
};
use coltree_fs::make_temp_directory;
use coltree_test_utils::fixtures;
use pretty_assertions::assert_eq;
use std::fs;

#[test]
fn test_collection_file_survives_tree_edits() {
    let workspace = make_temp_directory().unwrap();
    let source = workspace.path().join("store.json");
    fs::write(&source, fixtures::full_collection().to_string()).unwrap();

    // 1. Load and export
    let document = CollectionDocument::load(&source).unwrap();
    let trees = workspace.path().join("trees");
    let report = export(&document, &trees, ExportOptions::default()).unwrap();
    assert_eq!(report.root, trees.join("Store API"));
    assert_eq!((report.folders, report.requests), (2, 3));

    // 2. Add a folder and take it away again
    create_folder(&report.root.join("Orders").join("Refunds")).unwrap();
    let edited = import(&report.root).unwrap();
    let Item::Folder(orders) = &edited.item[0] else {
        panic!("Orders should be a folder");
    };
    assert_eq!(orders.item.last().map(Item::name), Some("Refunds"));

    remove_folder(&report.root.join("Orders").join("Refunds")).unwrap();

    // 3. Import and write back out
    let restored = import(&report.root).unwrap();
    assert_eq!(restored, document);

    let target = workspace.path().join("restored.json");
    restored.save(&target).unwrap();
    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&target).unwrap()).unwrap();
    assert_eq!(written, fixtures::full_collection());
}

#[test]
fn test_removing_top_level_folder_drops_it_from_document() {
    let workspace = make_temp_directory().unwrap();
    let document = CollectionDocument::try_from(fixtures::full_collection()).unwrap();
    let report = export(&document, workspace.path(), ExportOptions::default()).unwrap();

    remove_folder(&report.root.join("Empty")).unwrap();
    let restored = import(&report.root).unwrap();

    let names: Vec<&str> = restored.item.iter().map(Item::name).collect();
    assert_eq!(names, vec!["Orders", "Health"]);

    let mut expected = document.clone();
    expected.item.retain(|item| item.name() != "Empty");
    assert_eq!(restored, expected);
}
