use std::fs;
use std::io;
use std::path::PathBuf;

use crate::domain::AppError;
use crate::ports::AssetSource;

/// Templates and compose fragments read from a directory on disk.
///
/// Uses the same relative layout as the embedded set
/// (`templates/<module>.env.tmpl`, `compose/<module>.yml`).
#[derive(Debug, Clone)]
pub struct DirectoryAssets {
    root: PathBuf,
}

impl DirectoryAssets {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

impl AssetSource for DirectoryAssets {
    fn read_asset(&self, path: &str) -> Result<String, AppError> {
        let full_path = self.root.join(path);
        fs::read_to_string(&full_path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => AppError::AssetNotFound(full_path.display().to_string()),
            _ => AppError::resource(full_path.display().to_string(), err),
        })
    }
}
