//! On-disk backend: one file per key inside a single directory.
//!
//! Writes go through a temp file + rename so a crash mid-write never leaves
//! a half-written value under the real key.

use crate::kv::KeyValueStore;
use crate::StoreError;
use std::fs;
use std::path::{Path, PathBuf};

/// A directory-backed [`KeyValueStore`].
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open (creating if needed) a store rooted at `root`.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        // Keys are fixed dotted names ("vigil.trust_profile"); anything that
        // could escape the root directory is rejected outright.
        if key.is_empty() || key.contains(['/', '\\']) || key.contains("..") {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(key))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        // Suffix rather than with_extension: keys contain dots.
        let tmp = self.root.join(format!("{key}.tmp"));
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn list_keys(&self) -> Result<Vec<String>, StoreError> {
        let mut keys = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                if !name.ends_with(".tmp") {
                    keys.push(name.to_string());
                }
            }
        }
        keys.sort();
        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, FileStore) {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = FileStore::open(dir.path()).expect("open store");
        (dir, store)
    }

    #[test]
    fn get_absent_is_none() {
        let (_dir, store) = temp_store();
        assert!(store.get("vigil.missing").unwrap().is_none());
    }

    #[test]
    fn set_then_get_roundtrip() {
        let (_dir, store) = temp_store();
        store.set("vigil.device_id", "abc123").unwrap();
        assert_eq!(store.get("vigil.device_id").unwrap().as_deref(), Some("abc123"));
    }

    #[test]
    fn set_overwrites() {
        let (_dir, store) = temp_store();
        store.set("vigil.k", "one").unwrap();
        store.set("vigil.k", "two").unwrap();
        assert_eq!(store.get("vigil.k").unwrap().as_deref(), Some("two"));
    }

    #[test]
    fn remove_absent_is_ok() {
        let (_dir, store) = temp_store();
        store.remove("vigil.never_set").unwrap();
    }

    #[test]
    fn list_and_remove_many() {
        let (_dir, store) = temp_store();
        store.set("vigil.a", "1").unwrap();
        store.set("vigil.b", "2").unwrap();
        store.set("vigil.c", "3").unwrap();
        let keys = store.list_keys().unwrap();
        assert_eq!(keys, vec!["vigil.a", "vigil.b", "vigil.c"]);
        store.remove_many(&keys).unwrap();
        assert!(store.list_keys().unwrap().is_empty());
    }

    #[test]
    fn traversal_keys_rejected() {
        let (_dir, store) = temp_store();
        assert!(store.set("../escape", "x").is_err());
        assert!(store.get("a/b").is_err());
    }

    #[test]
    fn survives_reopen() {
        let dir = tempfile::tempdir().expect("temp dir");
        {
            let store = FileStore::open(dir.path()).unwrap();
            store.set("vigil.device_id", "persisted").unwrap();
        }
        let store = FileStore::open(dir.path()).unwrap();
        assert_eq!(store.get("vigil.device_id").unwrap().as_deref(), Some("persisted"));
    }
}
