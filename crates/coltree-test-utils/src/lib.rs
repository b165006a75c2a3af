//! Shared test utilities for the coltree workspace.
//!
//! Standard fixtures and a temp-tree helper used by the crate test suites
//! and the workspace integration tests. Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`fixtures`]: collection documents as JSON values
//! - [`tree`]: [`tree::TestTree`] temporary directory with tree assertions

pub mod fixtures;
pub mod tree;
