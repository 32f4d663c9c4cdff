//! Local key/value storage.
//!
//! Mirrors the shape of browser local storage: string keys mapping to string
//! values. The on-disk variant keeps every entry in one JSON object so other
//! tools (an add-to-cart flow, a test fixture) can write it with plain JSON.

use std::collections::HashMap;
use std::fmt::Debug;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use serde_json::{Map, Value};
use thiserror::Error;

/// Error surfaced when a storage backend cannot be read.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage file is not a JSON object: {0}")]
    Malformed(String),
}

/// Read access to a string key/value store.
pub trait LocalStorage: Send + Sync + Debug {
    /// Returns the value stored under `key`, or `None` when it is absent.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
}

/// Storage backed by a single JSON object on disk.
///
/// The file is re-read on every call; it is owned by other writers and may
/// change at any time. A missing file means every key is absent.
#[derive(Debug, Clone)]
pub struct FileLocalStorage {
    path: PathBuf,
}

impl FileLocalStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<Map<String, Value>, StorageError> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(error) => return Err(error.into()),
        };
        if data.trim().is_empty() {
            return Ok(Map::new());
        }
        match serde_json::from_str::<Value>(&data) {
            Ok(Value::Object(entries)) => Ok(entries),
            Ok(other) => Err(StorageError::Malformed(format!("found {}", json_kind(&other)))),
            Err(error) => Err(StorageError::Malformed(error.to_string())),
        }
    }
}

impl LocalStorage for FileLocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let mut entries = self.read_entries()?;
        // Values are strings in browser storage; hand-edited files may inline
        // the JSON document instead, which reads back as its serialization.
        Ok(entries.remove(key).and_then(|value| match value {
            Value::String(text) => Some(text),
            Value::Null => None,
            other => Some(other.to_string()),
        }))
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

/// In-memory storage, mainly for tests and demos.
#[derive(Debug, Default)]
pub struct MemoryLocalStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryLocalStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_item(&self, key: impl Into<String>, value: impl Into<String>) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.into(), value.into());
    }

    pub fn remove_item(&self, key: &str) {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).remove(key);
    }
}

impl LocalStorage for MemoryLocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.lock().unwrap_or_else(PoisonError::into_inner).get(key).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_reads_as_absent() {
        let dir = tempdir().expect("tempdir");
        let storage = FileLocalStorage::new(dir.path().join("nope.json"));
        assert_eq!(storage.get_item("cart").expect("read"), None);
    }

    #[test]
    fn string_values_are_returned_verbatim() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("storage.json");
        fs::write(&path, r#"{"cart":"{\"pizza\":1}","theme":"dark"}"#).expect("write");

        let storage = FileLocalStorage::new(&path);
        assert_eq!(storage.get_item("cart").expect("read").as_deref(), Some(r#"{"pizza":1}"#));
        assert_eq!(storage.get_item("missing").expect("read"), None);
    }

    #[test]
    fn inlined_documents_read_back_as_json_text() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("storage.json");
        fs::write(&path, r#"{"cart":{"burger":2}}"#).expect("write");

        let storage = FileLocalStorage::new(&path);
        assert_eq!(storage.get_item("cart").expect("read").as_deref(), Some(r#"{"burger":2}"#));
    }

    #[test]
    fn non_object_file_is_malformed() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("storage.json");
        fs::write(&path, "[1,2,3]").expect("write");

        let error = FileLocalStorage::new(&path).get_item("cart").expect_err("malformed");
        assert!(matches!(error, StorageError::Malformed(_)), "{error}");
    }

    #[test]
    fn memory_storage_set_and_remove() {
        let storage = MemoryLocalStorage::new();
        storage.set_item("cart", "{}");
        assert_eq!(storage.get_item("cart").expect("read").as_deref(), Some("{}"));
        storage.remove_item("cart");
        assert_eq!(storage.get_item("cart").expect("read"), None);
    }
}
