//! JSON key/value persistence, the durable-local-storage analog.
//!
//! One `state.json` document under the data directory holds a string-keyed
//! map of JSON values. Reads never fail: a missing key or a malformed entry
//! falls back to the caller's default and is overwritten by the next write.
//! Writes are synchronous -- every `set` flushes the whole document.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StoreError;

/// Well-known store keys, matching the wire names the dashboard always used.
pub mod keys {
    pub const TASKS: &str = "tasks";
    pub const THEME: &str = "theme";
    pub const CURRENT_USER: &str = "currentUser";
    pub const WATER_STATS: &str = "waterStats";
}

/// Persistent key/value store backed by a single JSON file.
#[derive(Debug)]
pub struct Store {
    path: PathBuf,
    entries: BTreeMap<String, serde_json::Value>,
}

impl Store {
    /// Open the store at the default location under [`super::data_dir`].
    pub fn open() -> Result<Self, std::io::Error> {
        Ok(Self::at(super::data_dir()?.join("state.json")))
    }

    /// Open a store at an explicit path. Missing or unreadable files start
    /// empty; a corrupt document is dropped wholesale (next write replaces it).
    pub fn at(path: PathBuf) -> Self {
        let entries = match std::fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(map) => map,
                Err(e) => {
                    log::warn!("store at {} is corrupt, starting empty: {e}", path.display());
                    BTreeMap::new()
                }
            },
            Err(_) => BTreeMap::new(),
        };
        Self { path, entries }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Read and decode a value. `None` when the key is absent or the stored
    /// entry does not decode as `T` -- never an error.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.entries.get(key)?;
        match serde_json::from_value(raw.clone()) {
            Ok(v) => Some(v),
            Err(e) => {
                log::warn!("ignoring malformed store entry '{key}': {e}");
                None
            }
        }
    }

    /// Read a value, falling back to `default` when absent or malformed.
    pub fn get_or<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        self.get(key).unwrap_or(default)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Encode and write a value, flushing the document synchronously.
    pub fn set<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), StoreError> {
        let encoded = serde_json::to_value(value).map_err(|e| StoreError::EncodeFailed {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        self.entries.insert(key.to_string(), encoded);
        self.flush()
    }

    /// Delete a key. Removing an absent key still flushes and succeeds.
    pub fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        self.flush()
    }

    fn flush(&self) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| StoreError::EncodeFailed {
                key: String::new(),
                message: e.to_string(),
            })?;
        std::fs::write(&self.path, content).map_err(|source| StoreError::WriteFailed {
            path: self.path.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    fn temp_store() -> (tempfile::TempDir, Store) {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::at(dir.path().join("state.json"));
        (dir, store)
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Sample {
        n: u32,
        s: String,
    }

    #[test]
    fn set_then_get_roundtrips() {
        let (_dir, mut store) = temp_store();
        let v = Sample {
            n: 7,
            s: "water".into(),
        };
        store.set("sample", &v).unwrap();
        assert_eq!(store.get::<Sample>("sample"), Some(v));
    }

    #[test]
    fn roundtrip_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        let mut store = Store::at(path.clone());
        store.set("theme", &"dark").unwrap();

        let reopened = Store::at(path);
        assert_eq!(reopened.get::<String>("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn missing_key_yields_default() {
        let (_dir, store) = temp_store();
        assert_eq!(store.get_or("absent", 42u32), 42);
        assert!(store.get::<String>("absent").is_none());
    }

    #[test]
    fn malformed_entry_is_defaulted_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, r#"{"waterStats": "not an object"}"#).unwrap();

        let store = Store::at(path);
        #[derive(Debug, PartialEq, Deserialize)]
        struct W {
            glasses: u32,
        }
        assert!(store.get::<W>("waterStats").is_none());
        assert_eq!(store.get_or("waterStats", W { glasses: 0 }), W { glasses: 0 });
    }

    #[test]
    fn corrupt_document_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, "{{{ not json").unwrap();

        let mut store = Store::at(path.clone());
        assert!(!store.contains("tasks"));

        // Next write replaces the corrupt document.
        store.set("tasks", &vec!["a"]).unwrap();
        let reopened = Store::at(path);
        assert_eq!(reopened.get::<Vec<String>>("tasks").unwrap(), vec!["a"]);
    }

    #[test]
    fn remove_deletes_key() {
        let (_dir, mut store) = temp_store();
        store.set("currentUser", &"x").unwrap();
        store.remove("currentUser").unwrap();
        assert!(!store.contains("currentUser"));
        // Removing again is a no-op.
        store.remove("currentUser").unwrap();
    }
}
