use crate::{
    error::{PlacebookError, Result},
    validation,
};
use std::cell::RefCell;
use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Named string blobs, in the spirit of a browser's local storage.
pub trait BlobStore {
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the whole blob stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

/// One `<key>.json` file per blob inside a data directory.
#[derive(Debug, Clone)]
pub struct FileBlobStore {
    dir: PathBuf,
}

impl FileBlobStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        validation::validate_key(key)?;
        Ok(self.dir.join(format!("{}.json", key)))
    }

    /// Write to a temp file in the target directory, then rename over the target
    fn atomic_write(&self, target_path: &Path, content: &str) -> Result<()> {
        let target_dir = target_path.parent().ok_or_else(|| {
            PlacebookError::Storage("Target path has no parent directory".to_string())
        })?;

        let mut temp_file = NamedTempFile::new_in(target_dir)
            .map_err(|e| PlacebookError::Storage(format!("Failed to create temp file: {}", e)))?;

        temp_file
            .write_all(content.as_bytes())
            .map_err(|e| PlacebookError::Storage(format!("Failed to write temp file: {}", e)))?;

        temp_file
            .as_file()
            .sync_all()
            .map_err(|e| PlacebookError::Storage(format!("Failed to sync temp file: {}", e)))?;

        temp_file
            .persist(target_path)
            .map_err(|e| PlacebookError::Storage(format!("Failed to persist temp file: {}", e)))?;

        Ok(())
    }
}

impl BlobStore for FileBlobStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(std::fs::read_to_string(&path)?))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        std::fs::create_dir_all(&self.dir)?;
        self.atomic_write(&path, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        if path.exists() {
            std::fs::remove_file(&path)?;
        }
        Ok(())
    }
}

/// Process-local blobs, used by tests and previews.
#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    blobs: RefCell<HashMap<String, String>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `value` under `key`.
    pub fn with_blob(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .blobs
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }
}

impl BlobStore for MemoryBlobStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.blobs.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.blobs
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.blobs.borrow_mut().remove(key);
        Ok(())
    }
}

impl<B: BlobStore + ?Sized> BlobStore for &B {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}
