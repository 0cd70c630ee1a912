use super::{DataStore, StoreResult};
use crate::error::StorageError;
use crate::model::Document;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Default data file, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "data/library.json";

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Point a store at `path` without touching the disk.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Point a store at `path` and bootstrap it.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let mut store = Self::new(path);
        store.ensure_initialized()?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parent_dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    fn ensure_dir(&self, dir: &Path) -> StoreResult<()> {
        if !dir.exists() {
            fs::create_dir_all(dir).map_err(|e| StorageError::io(dir, e))?;
        }
        Ok(())
    }

    fn tmp_path(&self, dir: &Path) -> PathBuf {
        let stem = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "library".to_string());
        dir.join(format!(".{}-{}.tmp", stem, Uuid::new_v4()))
    }
}

impl DataStore for FileStore {
    fn ensure_initialized(&mut self) -> StoreResult<()> {
        self.ensure_dir(&self.parent_dir())?;
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "creating empty data file");
            self.save(&Document::default())?;
        }
        Ok(())
    }

    fn load(&self) -> StoreResult<Document> {
        let content =
            fs::read_to_string(&self.path).map_err(|e| StorageError::io(&self.path, e))?;
        let doc: Document =
            serde_json::from_str(&content).map_err(|e| StorageError::corrupt(&self.path, e))?;
        tracing::debug!(
            path = %self.path.display(),
            books = doc.books.len(),
            members = doc.members.len(),
            loans = doc.loans.len(),
            "loaded document"
        );
        Ok(doc)
    }

    fn save(&mut self, doc: &Document) -> StoreResult<()> {
        let dir = self.parent_dir();
        self.ensure_dir(&dir)?;

        let content =
            serde_json::to_string_pretty(doc).map_err(|e| StorageError::corrupt(&self.path, e))?;

        // Write next to the target, then swap it in
        let tmp_file = self.tmp_path(&dir);
        if let Err(e) = fs::write(&tmp_file, content) {
            let _ = fs::remove_file(&tmp_file);
            return Err(StorageError::io(&tmp_file, e));
        }
        if let Err(e) = fs::rename(&tmp_file, &self.path) {
            let _ = fs::remove_file(&tmp_file);
            return Err(StorageError::io(&self.path, e));
        }

        tracing::debug!(path = %self.path.display(), "saved document");
        Ok(())
    }
}
