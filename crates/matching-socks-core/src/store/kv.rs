//! File-backed key-value store.
//!
//! A persistent mapping from string keys to string values, held in memory
//! as a `BTreeMap` and mirrored to a single JSON file. Structured records
//! go through the JSON helpers; plain counters and URIs are stored as-is.
//!
//! Reads never fail: a missing, unreadable, or corrupt store file loads
//! as an empty map (logged at warn), and a stored value that no longer
//! parses is treated as absent. Writes update the in-memory map first and
//! then rewrite the file, so on a write error memory is ahead of disk
//! until the next successful write.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StoreError;

const STORE_FILE: &str = "store.json";

/// Durable string-to-string store scoped to this installation.
#[derive(Debug)]
pub struct KvStore {
    path: PathBuf,
    map: BTreeMap<String, String>,
}

impl KvStore {
    /// Open the store at the default location (`<data_dir>/store.json`).
    pub fn open_default() -> Result<Self, StoreError> {
        Ok(Self::open(super::data_dir()?.join(STORE_FILE)))
    }

    /// Open the store backed by the given file, loading whatever is there.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let map = match std::fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(map) => map,
                Err(e) => {
                    log::warn!("store file {} is corrupt, starting empty: {e}", path.display());
                    BTreeMap::new()
                }
            },
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    log::warn!("store file {} is unreadable, starting empty: {e}", path.display());
                }
                BTreeMap::new()
            }
        };
        Self { path, map }
    }

    /// The backing file path.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Look up a value. Absence is the caller's cue to use a default.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.map.get(key).map(String::as_str)
    }

    /// Whether a key is present at all.
    pub fn contains(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    /// Store a value and persist.
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> Result<(), StoreError> {
        self.map.insert(key.to_string(), value.into());
        self.write_fs()
    }

    /// Remove a key and persist. Removing an absent key still rewrites.
    pub fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.map.remove(key);
        self.write_fs()
    }

    /// Store several values with a single file write.
    ///
    /// This is what makes multi-key updates (the streak triple) atomic at
    /// the file level.
    pub fn set_many<K, V>(&mut self, pairs: impl IntoIterator<Item = (K, V)>) -> Result<(), StoreError>
    where
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in pairs {
            self.map.insert(key.into(), value.into());
        }
        self.write_fs()
    }

    /// Remove several keys with a single file write.
    pub fn remove_many<'a>(&mut self, keys: impl IntoIterator<Item = &'a str>) -> Result<(), StoreError> {
        for key in keys {
            self.map.remove(key);
        }
        self.write_fs()
    }

    /// Deserialize a stored JSON value.
    ///
    /// A value that fails to parse is treated as absent, not as an error;
    /// callers fall back to their default.
    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.map.get(key)?;
        match serde_json::from_str(raw) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("stored value for '{key}' does not parse, using default: {e}");
                None
            }
        }
    }

    /// Serialize a value to JSON, store it, and persist.
    pub fn set_json<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value).map_err(|e| StoreError::Serialize {
            key: key.to_string(),
            source: e,
        })?;
        self.set(key, raw)
    }

    fn write_fs(&self) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(&self.map).map_err(|e| StoreError::Serialize {
            key: STORE_FILE.to_string(),
            source: e,
        })?;
        std::fs::write(&self.path, content).map_err(|e| StoreError::WriteFailed {
            path: self.path.clone(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Friend;

    fn temp_store() -> (tempfile::TempDir, KvStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = KvStore::open(dir.path().join("store.json"));
        (dir, store)
    }

    #[test]
    fn get_on_empty_store_is_absent() {
        let (_dir, store) = temp_store();
        assert_eq!(store.get("friends"), None);
    }

    #[test]
    fn set_then_reopen_reads_back() {
        let (dir, mut store) = temp_store();
        store.set("group_picture", "file:///group.png").unwrap();

        let reopened = KvStore::open(dir.path().join("store.json"));
        assert_eq!(reopened.get("group_picture"), Some("file:///group.png"));
    }

    #[test]
    fn remove_deletes_the_key() {
        let (_dir, mut store) = temp_store();
        store.set("is_first_time", "false").unwrap();
        store.remove("is_first_time").unwrap();
        assert!(!store.contains("is_first_time"));
    }

    #[test]
    fn set_many_persists_all_keys_in_one_write() {
        let (dir, mut store) = temp_store();
        store
            .set_many([
                ("streakDays", "3"),
                ("lastShareDate", "2024-01-01"),
                ("consecutiveMissedDays", "0"),
            ])
            .unwrap();

        let reopened = KvStore::open(dir.path().join("store.json"));
        assert_eq!(reopened.get("streakDays"), Some("3"));
        assert_eq!(reopened.get("lastShareDate"), Some("2024-01-01"));
        assert_eq!(reopened.get("consecutiveMissedDays"), Some("0"));
    }

    #[test]
    fn corrupt_store_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = KvStore::open(&path);
        assert_eq!(store.get("friends"), None);
    }

    #[test]
    fn unreadable_store_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        // A directory at the store path makes the read fail without
        // depending on file permissions.
        let path = dir.path().join("store.json");
        std::fs::create_dir_all(&path).unwrap();

        let store = KvStore::open(&path);
        assert_eq!(store.get("friends"), None);
    }

    #[test]
    fn corrupt_value_reads_as_absent() {
        let (_dir, mut store) = temp_store();
        store.set("friends", "][ definitely not json").unwrap();
        let friends: Option<Vec<Friend>> = store.get_json("friends");
        assert!(friends.is_none());
    }

    #[test]
    fn json_roundtrip_preserves_order() {
        let (_dir, mut store) = temp_store();
        let friends = vec![
            Friend {
                id: "1".into(),
                name: "Ada".into(),
                color: None,
                profile_picture: None,
            },
            Friend {
                id: "2".into(),
                name: "Sam".into(),
                color: None,
                profile_picture: None,
            },
        ];
        store.set_json("friends", &friends).unwrap();
        let loaded: Vec<Friend> = store.get_json("friends").unwrap();
        assert_eq!(loaded, friends);
    }

    #[test]
    fn write_failure_is_reported_and_memory_keeps_the_value() {
        let dir = tempfile::tempdir().unwrap();
        // Point the store at a path whose parent does not exist.
        let mut store = KvStore::open(dir.path().join("missing").join("store.json"));
        let result = store.set("streakDays", "1");
        assert!(result.is_err());
        // Optimistic in-memory update survives the failed write.
        assert_eq!(store.get("streakDays"), Some("1"));
    }
}
