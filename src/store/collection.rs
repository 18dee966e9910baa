//! # Player Collection
//!
//! A document collection of loosely-typed player records with optional
//! JSON-file persistence. Records are `serde_json::Value` objects; the
//! store imposes no schema, no required fields, and no uniqueness
//! constraint on `name`.

use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use serde_json::Value;
use uuid::Uuid;

use super::errors::{StorageError, StorageResult};

/// Sort direction for `find_sorted`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// The player record collection
///
/// Holds all records in memory behind a `RwLock`; when opened with a data
/// path, every mutation is written through to disk before it returns.
pub struct PlayerStore {
    /// Data file, if persistence is enabled
    data_path: Option<PathBuf>,

    /// Records in insertion order
    records: RwLock<Vec<Value>>,
}

impl PlayerStore {
    /// Open a persistent store backed by a JSON data file
    ///
    /// Loads existing records if the file is present, otherwise starts
    /// empty. Parent directories are created as needed.
    pub fn open(path: impl Into<PathBuf>) -> StorageResult<Self> {
        let path = path.into();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let records = if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_json::from_str(&content)?
        } else {
            Vec::new()
        };

        Ok(Self {
            data_path: Some(path),
            records: RwLock::new(records),
        })
    }

    /// Open a store with no persistence (used by tests)
    pub fn in_memory() -> Self {
        Self {
            data_path: None,
            records: RwLock::new(Vec::new()),
        }
    }

    /// Insert a new record with whatever fields it carries
    ///
    /// Object records without an `id` get a generated one; fields left out
    /// of the request stay absent, never defaulted. Returns the stored
    /// record.
    pub fn insert(&self, mut doc: Value) -> StorageResult<Value> {
        if let Some(obj) = doc.as_object_mut() {
            if !obj.contains_key("id") {
                obj.insert("id".to_string(), Value::String(Uuid::new_v4().to_string()));
            }
        }

        let mut records = self.records.write().map_err(|_| StorageError::LockPoisoned)?;
        records.push(doc.clone());
        self.persist(&records)?;

        Ok(doc)
    }

    /// Point lookup by `name`
    ///
    /// Returns the first match in insertion order; names are not unique.
    pub fn find_one_by_name(&self, name: &str) -> StorageResult<Option<Value>> {
        let records = self.records.read().map_err(|_| StorageError::LockPoisoned)?;

        Ok(records
            .iter()
            .find(|r| r.get("name").and_then(Value::as_str) == Some(name))
            .cloned())
    }

    /// Merge `fields` into the first record matching `name`
    ///
    /// Fields not mentioned in `fields` keep their current values. Returns
    /// the modified count: 1 on a match, 0 otherwise. Never creates a
    /// record.
    pub fn update_one(&self, name: &str, fields: &Value) -> StorageResult<u64> {
        let mut records = self.records.write().map_err(|_| StorageError::LockPoisoned)?;

        let record = records
            .iter_mut()
            .find(|r| r.get("name").and_then(Value::as_str) == Some(name));

        let Some(record) = record else {
            return Ok(0);
        };

        if let (Some(record_obj), Some(fields_obj)) = (record.as_object_mut(), fields.as_object()) {
            for (key, value) in fields_obj {
                record_obj.insert(key.clone(), value.clone());
            }
        }

        self.persist(&records)?;
        Ok(1)
    }

    /// Remove the first record matching `name`
    ///
    /// Returns the deleted count: 1 on a match, 0 otherwise.
    pub fn delete_one(&self, name: &str) -> StorageResult<u64> {
        let mut records = self.records.write().map_err(|_| StorageError::LockPoisoned)?;

        let idx = records
            .iter()
            .position(|r| r.get("name").and_then(Value::as_str) == Some(name));

        let Some(idx) = idx else {
            return Ok(0);
        };

        records.remove(idx);
        self.persist(&records)?;
        Ok(1)
    }

    /// Return all records sorted by `field`, truncated to `limit` if given
    ///
    /// The sort is stable, so ties keep insertion order. Records missing
    /// the sort field compare equal to everything and likewise keep their
    /// insertion order.
    pub fn find_sorted(
        &self,
        field: &str,
        direction: SortDirection,
        limit: Option<usize>,
    ) -> StorageResult<Vec<Value>> {
        let records = self.records.read().map_err(|_| StorageError::LockPoisoned)?;

        let mut result: Vec<Value> = records.clone();
        result.sort_by(|a, b| {
            let cmp = compare_field(a, b, field);
            match direction {
                SortDirection::Ascending => cmp,
                SortDirection::Descending => cmp.reverse(),
            }
        });

        if let Some(limit) = limit {
            result.truncate(limit);
        }

        Ok(result)
    }

    /// Number of records currently stored
    pub fn count(&self) -> StorageResult<usize> {
        let records = self.records.read().map_err(|_| StorageError::LockPoisoned)?;
        Ok(records.len())
    }

    /// Write the collection through to the data file, if one is configured
    ///
    /// Writes to a sibling temp file first, then renames over the data
    /// file, so readers never observe a partial write.
    fn persist(&self, records: &[Value]) -> StorageResult<()> {
        let Some(path) = &self.data_path else {
            return Ok(());
        };

        let content = serde_json::to_string_pretty(records)?;
        let tmp_path = tmp_sibling(path);
        fs::write(&tmp_path, content)?;
        fs::rename(&tmp_path, path)?;

        Ok(())
    }
}

/// Compare two records on a single field
///
/// Numbers order by f64 value, strings lexicographically; anything else
/// (including a missing field or mismatched types) compares equal.
fn compare_field(a: &Value, b: &Value, field: &str) -> Ordering {
    match (a.get(field), b.get(field)) {
        (Some(Value::Number(a)), Some(Value::Number(b))) => {
            let a = a.as_f64().unwrap_or(0.0);
            let b = b.as_f64().unwrap_or(0.0);
            a.partial_cmp(&b).unwrap_or(Ordering::Equal)
        }
        (Some(Value::String(a)), Some(Value::String(b))) => a.cmp(b),
        _ => Ordering::Equal,
    }
}

fn tmp_sibling(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_insert_assigns_id() {
        let store = PlayerStore::in_memory();

        let stored = store.insert(json!({"name": "Alice"})).unwrap();
        assert_eq!(stored["name"], "Alice");
        assert!(stored["id"].is_string());
    }

    #[test]
    fn test_insert_preserves_field_set_exactly() {
        let store = PlayerStore::in_memory();

        store.insert(json!({"name": "Alice", "rushingYards": 100})).unwrap();

        let record = store.find_one_by_name("Alice").unwrap().unwrap();
        assert_eq!(record["rushingYards"], 100);
        // Omitted numeric fields stay absent, not zero
        assert!(record.get("touchdownsThrown").is_none());
        assert!(record.get("sacks").is_none());
    }

    #[test]
    fn test_update_merges_partial_fields() {
        let store = PlayerStore::in_memory();
        store
            .insert(json!({"name": "Jane", "position": "Wide Receiver", "catches": 40}))
            .unwrap();

        let modified = store
            .update_one("Jane", &json!({"catches": 50, "touchdownsThrown": 8}))
            .unwrap();
        assert_eq!(modified, 1);

        let record = store.find_one_by_name("Jane").unwrap().unwrap();
        assert_eq!(record["catches"], 50);
        assert_eq!(record["touchdownsThrown"], 8);
        assert_eq!(record["position"], "Wide Receiver");
    }

    #[test]
    fn test_update_missing_record_is_not_an_upsert() {
        let store = PlayerStore::in_memory();

        let modified = store.update_one("Nobody", &json!({"sacks": 3})).unwrap();
        assert_eq!(modified, 0);
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn test_delete_removes_first_match_only() {
        let store = PlayerStore::in_memory();
        store.insert(json!({"name": "Dup", "sacks": 1})).unwrap();
        store.insert(json!({"name": "Dup", "sacks": 2})).unwrap();

        let deleted = store.delete_one("Dup").unwrap();
        assert_eq!(deleted, 1);
        assert_eq!(store.count().unwrap(), 1);

        // The survivor is the later insert
        let record = store.find_one_by_name("Dup").unwrap().unwrap();
        assert_eq!(record["sacks"], 2);
    }

    #[test]
    fn test_delete_missing_record_returns_zero() {
        let store = PlayerStore::in_memory();
        assert_eq!(store.delete_one("Nobody").unwrap(), 0);
    }

    #[test]
    fn test_find_sorted_descending_with_limit() {
        let store = PlayerStore::in_memory();
        store.insert(json!({"name": "P1", "touchdownsThrown": 5})).unwrap();
        store.insert(json!({"name": "P2", "touchdownsThrown": 8})).unwrap();
        store.insert(json!({"name": "P3", "touchdownsThrown": 3})).unwrap();

        let result = store
            .find_sorted("touchdownsThrown", SortDirection::Descending, Some(1))
            .unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0]["name"], "P2");
    }

    #[test]
    fn test_find_sorted_ascending_unbounded() {
        let store = PlayerStore::in_memory();
        store.insert(json!({"name": "A", "rushingYards": 100})).unwrap();
        store.insert(json!({"name": "B", "rushingYards": 50})).unwrap();
        store.insert(json!({"name": "C", "rushingYards": 75})).unwrap();

        let result = store
            .find_sorted("rushingYards", SortDirection::Ascending, None)
            .unwrap();
        let names: Vec<_> = result.iter().map(|r| r["name"].as_str().unwrap()).collect();
        assert_eq!(names, vec!["B", "C", "A"]);
    }

    #[test]
    fn test_find_sorted_missing_field_keeps_insertion_order() {
        let store = PlayerStore::in_memory();
        store.insert(json!({"name": "First"})).unwrap();
        store.insert(json!({"name": "Second"})).unwrap();

        let result = store
            .find_sorted("touchdowns", SortDirection::Descending, Some(1))
            .unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0]["name"], "First");
    }

    #[test]
    fn test_persistence_across_reopen() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("players.json");

        {
            let store = PlayerStore::open(&path).unwrap();
            store.insert(json!({"name": "Alice", "catches": 12})).unwrap();
            store.insert(json!({"name": "Bob"})).unwrap();
            store.delete_one("Bob").unwrap();
        }

        let store = PlayerStore::open(&path).unwrap();
        assert_eq!(store.count().unwrap(), 1);
        let record = store.find_one_by_name("Alice").unwrap().unwrap();
        assert_eq!(record["catches"], 12);
    }

    #[test]
    fn test_open_creates_parent_directories() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested").join("dir").join("players.json");

        let store = PlayerStore::open(&path).unwrap();
        store.insert(json!({"name": "Alice"})).unwrap();
        assert!(path.exists());
    }
}
