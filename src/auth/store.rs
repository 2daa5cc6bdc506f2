//! Key-value string storage port.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::error::StoreError;

/// Minimal string store, shaped like browser local storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;

    /// Writes several keys as one change.
    ///
    /// The default writes keys one at a time; stores that can fail part way
    /// should override it so either all entries land or none do.
    fn set_all(&mut self, entries: &[(&str, &str)]) -> Result<(), StoreError> {
        for (key, value) in entries {
            self.set(key, value)?;
        }
        Ok(())
    }

    /// Removes several keys as one change. Same contract as [`Self::set_all`].
    fn remove_all(&mut self, keys: &[&str]) -> Result<(), StoreError> {
        for key in keys {
            self.remove(key)?;
        }
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }

    fn set_all(&mut self, entries: &[(&str, &str)]) -> Result<(), StoreError> {
        (**self).set_all(entries)
    }

    fn remove_all(&mut self, keys: &[&str]) -> Result<(), StoreError> {
        (**self).remove_all(keys)
    }
}

/// In-process store. Contents are lost when dropped.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Store persisted as a flat JSON object in a single file.
///
/// The whole file is rewritten on every change. A missing file is an empty
/// store; it is created on first write. A change whose write fails is rolled
/// back, so memory never runs ahead of the file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Opens store at path, reading existing entries if the file exists.
    ///
    /// # Errors
    ///
    /// Returns error if the file exists but cannot be read or parsed
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let entries = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            if raw.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&raw)?
            }
        } else {
            BTreeMap::new()
        };
        log::debug!("Opened store {} with {} keys", path.display(), entries.len());
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Applies `change` and rewrites the file when it reports a modification.
    fn update(
        &mut self,
        change: impl FnOnce(&mut BTreeMap<String, String>) -> bool,
    ) -> Result<(), StoreError> {
        let previous = self.entries.clone();
        if !change(&mut self.entries) {
            return Ok(());
        }
        if let Err(e) = self.flush() {
            log::warn!("Store write to {} failed: {}", self.path.display(), e);
            self.entries = previous;
            return Err(e);
        }
        Ok(())
    }

    fn flush(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&self.entries)?)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.set_all(&[(key, value)])
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.remove_all(&[key])
    }

    fn set_all(&mut self, entries: &[(&str, &str)]) -> Result<(), StoreError> {
        self.update(|map| {
            for (key, value) in entries {
                map.insert(key.to_string(), value.to_string());
            }
            !entries.is_empty()
        })
    }

    fn remove_all(&mut self, keys: &[&str]) -> Result<(), StoreError> {
        self.update(|map| {
            keys.iter()
                .fold(false, |changed, key| map.remove(*key).is_some() || changed)
        })
    }
}
