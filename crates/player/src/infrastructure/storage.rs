//! File-backed draft storage
//!
//! Stores key-value pairs in one JSON file, by default at:
//! - Linux: ~/.config/codex/chargen/storage.json
//! - macOS: ~/Library/Application Support/io.codex.chargen/storage.json
//! - Windows: C:\Users\<User>\AppData\Roaming\codex\chargen\storage.json

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use crate::ports::outbound::{StorageError, StoragePort};

#[derive(Clone)]
pub struct FileStorage {
    /// Path to the storage file
    storage_path: PathBuf,
    /// In-memory copy of the file
    cache: Arc<RwLock<HashMap<String, String>>>,
}

impl FileStorage {
    /// Open the store at `storage_path`, loading whatever it already holds.
    ///
    /// An unreadable or unparseable file starts the store empty.
    pub fn open(storage_path: impl Into<PathBuf>) -> Self {
        let storage_path = storage_path.into();

        let cache = if storage_path.exists() {
            match fs::read_to_string(&storage_path) {
                Ok(data) => match serde_json::from_str::<HashMap<String, String>>(&data) {
                    Ok(map) => map,
                    Err(e) => {
                        tracing::warn!("Failed to parse storage file: {}", e);
                        HashMap::new()
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read storage file: {}", e);
                    HashMap::new()
                }
            }
        } else {
            HashMap::new()
        };

        tracing::debug!("Draft storage initialized at: {:?}", storage_path);

        Self {
            storage_path,
            cache: Arc::new(RwLock::new(cache)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.storage_path
    }

    /// Write the cache to disk
    fn persist(&self, cache: &HashMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.storage_path.parent() {
            fs::create_dir_all(parent).map_err(|e| StorageError::Io(e.to_string()))?;
        }
        let data = serde_json::to_string_pretty(cache)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        fs::write(&self.storage_path, data).map_err(|e| StorageError::Io(e.to_string()))
    }
}

impl StoragePort for FileStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        let guard = self
            .cache
            .read()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        Ok(guard.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut guard = self
            .cache
            .write()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        // The cache only changes once the file does
        let mut next = guard.clone();
        next.insert(key.to_string(), value.to_string());
        self.persist(&next)?;
        *guard = next;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut guard = self
            .cache
            .write()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        if !guard.contains_key(key) {
            return Ok(());
        }
        let mut next = guard.clone();
        next.remove(key);
        self.persist(&next)?;
        *guard = next;
        Ok(())
    }
}
