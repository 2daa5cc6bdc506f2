//! Shared test utilities for integration tests.
//!
//! Provides helpers for temporary stores and markdown documents used
//! across multiple test files.

#![allow(dead_code)]

use anyhow::Result;
use lexdesk::{AuthContext, FileStore};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Sample brief exercising every block kind.
pub const SAMPLE_BRIEF: &str = "# Motion to Dismiss\n\
\n\
The **plaintiff** fails to state a claim under *Rule 12(b)(6)*.\n\
\n\
## Grounds\n\
\n\
- Lack of `standing`\n\
- Statute of limitations\n\
1. Failure to exhaust\n\
\n\
```\n\
28 U.S.C. § 1331\n\
```\n";

/// Creates temporary directory with a store path inside it.
///
/// The store file itself is not created until first write.
///
/// # Returns
///
/// Temporary directory guard and path of the store file
///
/// # Errors
///
/// Returns error if directory creation fails
pub fn create_store_dir() -> Result<(TempDir, PathBuf)> {
    let dir = TempDir::new()?;
    let path = dir.path().join("store.json");
    Ok((dir, path))
}

/// Opens a fresh auth context over the file store at path.
///
/// # Errors
///
/// Returns error if the store cannot be opened or read
pub fn open_auth(path: &Path) -> Result<AuthContext<FileStore>> {
    let store = FileStore::open(path)?;
    Ok(AuthContext::load(store)?)
}

/// Writes file, creating parent directories as needed.
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn write_file(root: &Path, path: &str, content: &str) -> Result<PathBuf> {
    let file_path = root.join(path);
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&file_path, content)?;
    Ok(file_path)
}
