//! # JSON File Store
//!
//! The production backend: the whole namespace lives in one JSON object
//! file, rewritten atomically on every mutation.
//!
//! ## Why a Snapshot File?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Atomic Snapshot Writes                               │
//! │                                                                         │
//! │  ❌ WRONG: one file per key, written independently                     │
//! │     business_setup.json  ← write succeeds                              │
//! │     secret_password.json ← write fails (disk full)                     │
//! │     → setup half-persisted, login impossible                           │
//! │                                                                         │
//! │  ✅ CORRECT: one snapshot, temp file + rename                          │
//! │     billbook.json.tmp ← full namespace serialized                      │
//! │     rename(tmp, billbook.json) ← atomic on POSIX and NTFS              │
//! │     → either the whole mutation lands or the old snapshot survives     │
//! │                                                                         │
//! │  This is what makes `set_many` (and the global wipe) all-or-nothing.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The collections are small (a shop catalog and its bills), so rewriting
//! the snapshot on each mutation costs microseconds and buys crash safety.

use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::{StoreError, StoreResult};
use crate::store::Store;

/// Suffix of the scratch file written before the atomic rename.
const TMP_SUFFIX: &str = "tmp";

/// File-backed store holding the whole namespace as one JSON object.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, Value>,
}

impl JsonFileStore {
    /// Opens (or creates) the store at `path`.
    ///
    /// ## Behavior
    /// - Missing file → empty namespace (first run)
    /// - Present file → parsed as a JSON object; anything else is
    ///   [`StoreError::Corrupt`] rather than silent data loss
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();

        let entries = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            match serde_json::from_str::<Value>(&raw)? {
                Value::Object(map) => map.into_iter().collect(),
                other => {
                    warn!(path = %path.display(), "store file is not a JSON object");
                    return Err(StoreError::Corrupt {
                        reason: format!("expected a JSON object, found {}", json_kind(&other)),
                    });
                }
            }
        } else {
            BTreeMap::new()
        };

        debug!(path = %path.display(), keys = entries.len(), "opened store file");
        Ok(JsonFileStore { path, entries })
    }

    /// Path of the snapshot file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes `entries` to disk via temp file + rename.
    ///
    /// Called with the CANDIDATE state; `self.entries` is only replaced
    /// after the snapshot is durably on disk, so a failed write leaves
    /// both the file and the in-memory view at the previous state.
    fn persist(&self, entries: &BTreeMap<String, Value>) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let map: serde_json::Map<String, Value> = entries
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        let payload = serde_json::to_vec_pretty(&Value::Object(map))?;

        let tmp_path = self.path.with_extension(TMP_SUFFIX);
        fs::write(&tmp_path, payload)?;
        fs::rename(&tmp_path, &self.path)?;

        debug!(path = %self.path.display(), keys = entries.len(), "persisted store snapshot");
        Ok(())
    }

    /// Applies a mutation to a candidate copy, persists it, then commits.
    fn mutate<F>(&mut self, apply: F) -> StoreResult<()>
    where
        F: FnOnce(&mut BTreeMap<String, Value>),
    {
        let mut candidate = self.entries.clone();
        apply(&mut candidate);
        self.persist(&candidate)?;
        self.entries = candidate;
        Ok(())
    }
}

impl Store for JsonFileStore {
    fn get(&self, key: &str) -> StoreResult<Option<Value>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: Value) -> StoreResult<()> {
        self.mutate(|entries| {
            entries.insert(key.to_string(), value);
        })
    }

    fn set_many(&mut self, batch: Vec<(String, Value)>) -> StoreResult<()> {
        self.mutate(|entries| {
            for (key, value) in batch {
                entries.insert(key, value);
            }
        })
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        self.mutate(|entries| {
            entries.remove(key);
        })
    }

    fn clear(&mut self) -> StoreResult<()> {
        self.mutate(|entries| entries.clear())
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{BUSINESS_KEY, HISTORY_KEY};
    use serde_json::json;

    fn temp_store_path(dir: &tempfile::TempDir) -> PathBuf {
        dir.path().join("billbook.json")
    }

    #[test]
    fn test_open_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(temp_store_path(&dir)).unwrap();
        assert!(store.get(BUSINESS_KEY).unwrap().is_none());
    }

    #[test]
    fn test_reopen_preserves_documents() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_store_path(&dir);

        let doc = json!({"businessName": "Sharma Stores", "address": "MG Road"});
        {
            let mut store = JsonFileStore::open(&path).unwrap();
            store.set(BUSINESS_KEY, doc.clone()).unwrap();
        }

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.get(BUSINESS_KEY).unwrap(), Some(doc));
    }

    #[test]
    fn test_set_many_lands_together() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_store_path(&dir);

        let mut store = JsonFileStore::open(&path).unwrap();
        store
            .set_many(vec![
                (BUSINESS_KEY.to_string(), json!({"businessName": "X"})),
                (HISTORY_KEY.to_string(), json!([])),
            ])
            .unwrap();

        let reopened = JsonFileStore::open(&path).unwrap();
        assert!(reopened.get(BUSINESS_KEY).unwrap().is_some());
        assert!(reopened.get(HISTORY_KEY).unwrap().is_some());
    }

    #[test]
    fn test_corrupt_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_store_path(&dir);
        fs::write(&path, "[1, 2, 3]").unwrap();

        match JsonFileStore::open(&path) {
            Err(StoreError::Corrupt { reason }) => {
                assert!(reason.contains("array"));
            }
            other => panic!("expected Corrupt, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_clear_empties_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_store_path(&dir);

        let mut store = JsonFileStore::open(&path).unwrap();
        store.set(BUSINESS_KEY, json!({})).unwrap();
        store.clear().unwrap();

        let reopened = JsonFileStore::open(&path).unwrap();
        assert!(reopened.get(BUSINESS_KEY).unwrap().is_none());
    }
}
