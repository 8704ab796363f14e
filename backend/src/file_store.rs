use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use shared::error::StorageError;
use shared::storage::StorageBackend;

/// Key/value storage kept in a single JSON object on disk.
///
/// Reads are served from memory; every write rewrites the file through a
/// temporary sibling and a rename so a crash never leaves a half-written file.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStorage {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref().to_path_buf();
        let entries = match fs::read_to_string(&path) {
            Ok(contents) if contents.trim().is_empty() => BTreeMap::new(),
            Ok(contents) => serde_json::from_str(&contents)?,
            Err(e) if e.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(StorageError::Unavailable(format!("{}: {}", path.display(), e))),
        };
        tracing::debug!("opened progress file {} ({} keys)", path.display(), entries.len());
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(&self.entries)?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| unavailable(parent, e))?;
        }
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|e| unavailable(&tmp, e))?;
        fs::rename(&tmp, &self.path).map_err(|e| unavailable(&self.path, e))?;
        Ok(())
    }
}

fn unavailable(path: &Path, err: std::io::Error) -> StorageError {
    StorageError::Unavailable(format!("{}: {}", path.display(), err))
}

impl StorageBackend for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::clock::FixedClock;
    use shared::progress::ProgressStore;
    use shared::SpinResult;

    #[test]
    fn test_missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::open(dir.path().join("progress.json")).unwrap();
        assert_eq!(storage.read("anything").unwrap(), None);
    }

    #[test]
    fn test_writes_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("progress.json");
        let mut storage = FileStorage::open(&path).unwrap();
        storage.write("a", "1").unwrap();
        storage.write("b", "[2]").unwrap();
        storage.remove("a").unwrap();

        let reopened = FileStorage::open(&path).unwrap();
        assert_eq!(reopened.read("a").unwrap(), None);
        assert_eq!(reopened.read("b").unwrap().as_deref(), Some("[2]"));
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_corrupt_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("progress.json");
        fs::write(&path, "not json").unwrap();
        assert!(matches!(FileStorage::open(&path), Err(StorageError::Corrupt(_))));
    }

    #[test]
    fn test_progress_store_round_trip_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("progress.json");
        {
            let mut store = ProgressStore::open(FileStorage::open(&path).unwrap());
            for i in 0..12 {
                store.record_spin(&SpinResult {
                    winner_index: 1,
                    winner_label: format!("spin {}", i),
                    total_rotation_degrees: 1500.0,
                    completed_at: i,
                });
            }
        }
        let store = ProgressStore::with_definitions(
            FileStorage::open(&path).unwrap(),
            shared::achievements::DEFAULT_ACHIEVEMENTS.clone(),
            FixedClock::new(0),
        );
        assert_eq!(store.stats().total_spins, 12);
        assert_eq!(store.history_len(), 10);
        assert_eq!(store.history().next().unwrap().winner_label, "spin 11");
        assert!(store.is_unlocked("getting_started"));
    }
}
