//! Storage for artifacts and the composed manifest.
//!
//! Paths are relative to the deployment root unless absolute. The store
//! owns no module semantics; existence of an artifact is the only state
//! signal the wizard reads from it.

use std::path::PathBuf;

use crate::domain::AppError;

/// Port for the file operations the wizard performs.
pub trait ConfigStore {
    /// Check whether a file exists.
    fn file_exists(&self, path: &str) -> bool;

    /// Read a file as UTF-8 text.
    fn read_file(&self, path: &str) -> Result<String, AppError>;

    /// Create or truncate `path` and write `content`.
    ///
    /// Parent directories are not created; a missing parent is an error.
    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError>;

    /// Append `content` to `path`, creating the file if it does not exist.
    fn append_file(&self, path: &str, content: &str) -> Result<(), AppError>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &str) -> Result<(), AppError>;

    /// Resolve a path for display.
    fn resolve_path(&self, path: &str) -> PathBuf;
}
