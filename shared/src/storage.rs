use std::collections::HashMap;

use crate::error::StorageError;

/// Narrow key/value seam the progress store persists through.
pub trait StorageBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

impl<B: StorageBackend + ?Sized> StorageBackend for Box<B> {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).write(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
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
}

impl StorageBackend for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_overwrite_and_remove() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.read("stats").unwrap(), None);

        storage.write("stats", "1").unwrap();
        storage.write("stats", "2").unwrap();
        assert_eq!(storage.read("stats").unwrap().as_deref(), Some("2"));
        assert_eq!(storage.len(), 1);

        storage.remove("stats").unwrap();
        storage.remove("missing").unwrap();
        assert!(storage.is_empty());
    }

    #[test]
    fn test_boxed_backend_delegates() {
        let mut boxed: Box<dyn StorageBackend> = Box::new(MemoryStorage::new());
        boxed.write("history", "[]").unwrap();
        assert_eq!(boxed.read("history").unwrap().as_deref(), Some("[]"));
    }
}
