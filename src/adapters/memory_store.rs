use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Component, Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::AppError;
use crate::ports::ConfigStore;

/// In-memory `ConfigStore` for tests.
///
/// Mirrors the filesystem contract: writes fail when the parent directory
/// was never created.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    // Arc<Mutex> so clones observe the same files
    state: Arc<Mutex<MemoryState>>,
}

#[derive(Debug, Default)]
struct MemoryState {
    files: BTreeMap<PathBuf, String>,
    dirs: BTreeSet<PathBuf>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file, creating its parent directories.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        {
            let mut state = self.lock();
            let path = normalize(path);
            if let Some(parent) = path.parent() {
                insert_dirs(&mut state.dirs, parent);
            }
            state.files.insert(path, content.to_string());
        }
        self
    }

    /// Snapshot of every stored file path.
    pub fn paths(&self) -> Vec<String> {
        self.lock().files.keys().map(|p| p.display().to_string()).collect()
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn ensure_parent(state: &MemoryState, path: &Path) -> Result<(), AppError> {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !state.dirs.contains(parent) => {
                Err(AppError::resource(
                    path.display().to_string(),
                    io::Error::new(io::ErrorKind::NotFound, "parent directory does not exist"),
                ))
            }
            _ => Ok(()),
        }
    }
}

impl ConfigStore for MemoryStore {
    fn file_exists(&self, path: &str) -> bool {
        let path = normalize(path);
        let state = self.lock();
        state.files.contains_key(&path) || state.dirs.contains(&path)
    }

    fn read_file(&self, path: &str) -> Result<String, AppError> {
        let path = normalize(path);
        self.lock().files.get(&path).cloned().ok_or_else(|| {
            AppError::resource(
                path.display().to_string(),
                io::Error::new(io::ErrorKind::NotFound, "file not found"),
            )
        })
    }

    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError> {
        let path = normalize(path);
        let mut state = self.lock();
        Self::ensure_parent(&state, &path)?;
        state.files.insert(path, content.to_string());
        Ok(())
    }

    fn append_file(&self, path: &str, content: &str) -> Result<(), AppError> {
        let path = normalize(path);
        let mut state = self.lock();
        Self::ensure_parent(&state, &path)?;
        state.files.entry(path).or_default().push_str(content);
        Ok(())
    }

    fn create_dir_all(&self, path: &str) -> Result<(), AppError> {
        let path = normalize(path);
        insert_dirs(&mut self.lock().dirs, &path);
        Ok(())
    }

    fn resolve_path(&self, path: &str) -> PathBuf {
        normalize(path)
    }
}

fn normalize(path: &str) -> PathBuf {
    Path::new(path).components().filter(|c| !matches!(c, Component::CurDir)).collect()
}

fn insert_dirs(dirs: &mut BTreeSet<PathBuf>, path: &Path) {
    for ancestor in path.ancestors() {
        if ancestor.as_os_str().is_empty() {
            break;
        }
        dirs.insert(ancestor.to_path_buf());
    }
}
