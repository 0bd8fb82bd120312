//! File-backed durable store.
//!
//! One file per key under a host-chosen directory: the desktop stand-in
//! for a browser's origin-scoped key-value storage. Values are written
//! whole on every set, matching the overwrite semantics of the fixed-key
//! graph save.

use arbor_core::error::StorageError;
use arbor_core::persist::LocalStore;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    /// Open a store rooted at `root`, creating the directory if needed.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| StorageError(e.to_string()))?;
        log::info!("durable store opened at {}", root.display());
        Ok(Self { root })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl LocalStore for DirStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StorageError(err.to_string())),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::write(self.path_for(key), value).map_err(|e| StorageError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arbor_core::persist::GRAPH_STORAGE_KEY;

    #[test]
    fn unwritten_key_reads_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = DirStore::open(dir.path()).unwrap();
        assert_eq!(store.get(GRAPH_STORAGE_KEY).unwrap(), None);
    }

    #[test]
    fn values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut store = DirStore::open(dir.path()).unwrap();
            store.set(GRAPH_STORAGE_KEY, "{\"nodes\":[]}").unwrap();
        }

        let reopened = DirStore::open(dir.path()).unwrap();
        assert_eq!(
            reopened.get(GRAPH_STORAGE_KEY).unwrap().as_deref(),
            Some("{\"nodes\":[]}")
        );
    }

    #[test]
    fn set_overwrites_prior_value() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = DirStore::open(dir.path()).unwrap();
        store.set(GRAPH_STORAGE_KEY, "first").unwrap();
        store.set(GRAPH_STORAGE_KEY, "second").unwrap();
        assert_eq!(
            store.get(GRAPH_STORAGE_KEY).unwrap().as_deref(),
            Some("second")
        );
    }
}
