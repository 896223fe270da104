//! Durable key-value storage for the theme choice
//!
//! Mirrors the browser's local storage: string keys, string values, and the
//! possibility that the store is missing, full, or turned off.

use crate::ThemeError;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

/// Key-value store used to persist the theme flag
pub trait ThemeStorage: Send + Sync {
    fn load(&self, key: &str) -> Result<Option<String>, ThemeError>;
    fn store(&self, key: &str, value: &str) -> Result<(), ThemeError>;
    fn remove(&self, key: &str) -> Result<(), ThemeError>;
}

impl<T: ThemeStorage + ?Sized> ThemeStorage for Arc<T> {
    fn load(&self, key: &str) -> Result<Option<String>, ThemeError> {
        (**self).load(key)
    }

    fn store(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        (**self).store(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), ThemeError> {
        (**self).remove(key)
    }
}

/// Process-local storage; nothing survives a restart
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ThemeStorage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>, ThemeError> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn store(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), ThemeError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.remove(key);
        Ok(())
    }
}

/// JSON object file holding string entries
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, ThemeError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    /// Entries to build a write on. A corrupt file is discarded so the
    /// write replaces it.
    fn read_for_write(&self) -> Result<BTreeMap<String, String>, ThemeError> {
        match self.read_all() {
            Err(ThemeError::Serialize(err)) => {
                tracing::warn!(
                    path = %self.path.display(),
                    "discarding unreadable storage file: {err}"
                );
                Ok(BTreeMap::new())
            }
            other => other,
        }
    }

    fn write_all(&self, entries: &BTreeMap<String, String>) -> Result<(), ThemeError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

impl ThemeStorage for FileStorage {
    fn load(&self, key: &str) -> Result<Option<String>, ThemeError> {
        Ok(self.read_all()?.remove(key))
    }

    fn store(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        let mut entries = self.read_for_write()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_all(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), ThemeError> {
        let mut entries = self.read_for_write()?;
        if entries.remove(key).is_some() {
            self.write_all(&entries)?;
        }
        Ok(())
    }
}

/// Storage that is turned off; every access fails
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledStorage;

impl ThemeStorage for DisabledStorage {
    fn load(&self, _key: &str) -> Result<Option<String>, ThemeError> {
        Err(ThemeError::Unavailable)
    }

    fn store(&self, _key: &str, _value: &str) -> Result<(), ThemeError> {
        Err(ThemeError::Unavailable)
    }

    fn remove(&self, _key: &str) -> Result<(), ThemeError> {
        Err(ThemeError::Unavailable)
    }
}
