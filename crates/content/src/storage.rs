//! Key-value persistence behind the content store
//!
//! The store saves its whole document under one key after every mutation.
//! [`FileStorage`] keeps each key in `<dir>/<key>.json`; [`MemoryStorage`]
//! is used by tests and by one-shot commands that must not touch disk.

use solar_core::{AdminError, AdminResult};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

// ============================================================================
// StorageBackend Trait
// ============================================================================

/// A string key-value store
pub trait StorageBackend: Send + Sync {
    /// Read a value; `Ok(None)` when the key was never written
    fn get(&self, key: &str) -> AdminResult<Option<String>>;

    /// Write a value, replacing any previous one
    fn set(&self, key: &str, value: &str) -> AdminResult<()>;
}

// ============================================================================
// FileStorage
// ============================================================================

/// One JSON file per key inside a directory
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path a key is stored at
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    fn ensure_dir(&self) -> AdminResult<()> {
        if !self.dir.exists() {
            std::fs::create_dir_all(&self.dir).map_err(|e| AdminError::DirectoryCreate {
                path: self.dir.clone(),
                message: e.to_string(),
            })?;
        }
        Ok(())
    }
}

impl StorageBackend for FileStorage {
    fn get(&self, key: &str) -> AdminResult<Option<String>> {
        let path = self.path_for(key);
        match std::fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AdminError::FileRead {
                path,
                message: e.to_string(),
            }),
        }
    }

    fn set(&self, key: &str, value: &str) -> AdminResult<()> {
        self.ensure_dir()?;
        let path = self.path_for(key);

        // Write beside the target and rename so a crash never leaves half a document
        let tmp = self.dir.join(format!(".{}.json.tmp", key));
        std::fs::write(&tmp, value).map_err(|e| AdminError::FileWrite {
            path: tmp.clone(),
            message: e.to_string(),
        })?;
        std::fs::rename(&tmp, &path).map_err(|e| AdminError::FileWrite {
            path: path.clone(),
            message: e.to_string(),
        })?;

        tracing::trace!(key, path = %path.display(), bytes = value.len(), "storage key written");
        Ok(())
    }
}

// ============================================================================
// MemoryStorage
// ============================================================================

/// In-process storage, lost on drop
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> AdminResult<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| AdminError::internal("memory storage lock poisoned"))
    }
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> AdminResult<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> AdminResult<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<S: StorageBackend + ?Sized> StorageBackend for std::sync::Arc<S> {
    fn get(&self, key: &str) -> AdminResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> AdminResult<()> {
        (**self).set(key, value)
    }
}
