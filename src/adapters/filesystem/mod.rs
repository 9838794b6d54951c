//! Filesystem adapter for the `ConfigStore` port.

mod config_store;

use std::path::PathBuf;

/// Filesystem-backed store rooted at a deployment directory.
///
/// Relative paths resolve against the root; absolute paths are used as
/// given, so the one-shot generator can write anywhere the operator points it.
#[derive(Debug, Clone)]
pub struct FilesystemStore {
    root: PathBuf,
}

impl FilesystemStore {
    /// Create a store rooted at the given directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}
