//! Shared test utilities for integration tests.
//!
//! Provides helpers for locating fixtures and preparing temporary inputs
//! used across multiple test files.

#![allow(dead_code)]

use anyhow::Result;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Returns path to a file under `tests/fixtures`.
pub fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Writes file into temporary directory and returns its path.
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn write_file(dir: &TempDir, name: &str, content: &str) -> Result<PathBuf> {
    let path = dir.path().join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, content)?;
    Ok(path)
}
