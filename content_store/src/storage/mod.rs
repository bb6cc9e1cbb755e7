//! The key-value medium under the store.
//!
//! Values are JSON strings keyed by fixed names, the same contract a browser's local
//! storage offers. Implementations are synchronous and unsynchronized.

mod file;

pub use file::*;

use std::collections::BTreeMap;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("data file is not a JSON object of strings: {0}")]
    Corrupt(serde_json::Error),
}

/// A synchronous string key-value medium.
pub trait Storage {
    /// Get the raw value under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: String) -> Result<(), StorageError>;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;

    fn contains(&self, key: &str) -> Result<bool, StorageError> {
        Ok(self.get(key)?.is_some())
    }
}

impl<S: Storage + ?Sized> Storage for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }

    fn contains(&self, key: &str) -> Result<bool, StorageError> {
        (**self).contains(key)
    }
}

/// Storage that lives only as long as the value does.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: BTreeMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }

    fn contains(&self, key: &str) -> Result<bool, StorageError> {
        Ok(self.entries.contains_key(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage() {
        let mut storage = MemoryStorage::new();
        assert!(storage.is_empty());

        storage.set("a", "1".to_string()).unwrap();
        storage.set("a", "2".to_string()).unwrap();
        assert_eq!(storage.get("a").unwrap().as_deref(), Some("2"));
        assert!(storage.contains("a").unwrap());
        assert_eq!(storage.len(), 1);

        storage.remove("a").unwrap();
        storage.remove("a").unwrap(); // Absent key
        assert!(storage.get("a").unwrap().is_none());
    }

    #[test]
    fn test_boxed_storage() {
        let mut storage: Box<dyn Storage> = Box::new(MemoryStorage::new());
        storage.set("k", "v".to_string()).unwrap();
        assert!(storage.contains("k").unwrap());
    }
}
