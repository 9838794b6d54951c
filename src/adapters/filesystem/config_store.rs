//! `ConfigStore` implementation for `FilesystemStore`.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::ConfigStore;

use super::FilesystemStore;

impl ConfigStore for FilesystemStore {
    fn file_exists(&self, path: &str) -> bool {
        self.resolve_path(path).exists()
    }

    fn read_file(&self, path: &str) -> Result<String, AppError> {
        let full_path = self.resolve_path(path);
        fs::read_to_string(&full_path).map_err(|err| resource_error(&full_path, err))
    }

    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError> {
        let full_path = self.resolve_path(path);
        fs::write(&full_path, content).map_err(|err| resource_error(&full_path, err))
    }

    fn append_file(&self, path: &str, content: &str) -> Result<(), AppError> {
        let full_path = self.resolve_path(path);
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&full_path)
            .map_err(|err| resource_error(&full_path, err))?;
        file.write_all(content.as_bytes()).map_err(|err| resource_error(&full_path, err))
    }

    fn create_dir_all(&self, path: &str) -> Result<(), AppError> {
        let full_path = self.resolve_path(path);
        fs::create_dir_all(&full_path).map_err(|err| resource_error(&full_path, err))
    }

    fn resolve_path(&self, path: &str) -> PathBuf {
        let p = Path::new(path);
        if p.is_absolute() { p.to_path_buf() } else { self.root.join(p) }
    }
}

fn resource_error(path: &Path, err: std::io::Error) -> AppError {
    AppError::resource(path.display().to_string(), err)
}
