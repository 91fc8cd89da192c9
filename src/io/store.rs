use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::io::recovery;
use crate::model::todo::Todo;

/// The fixed storage key: one JSON array of todos.
pub const STORE_FILE: &str = "todos.json";

/// Error type for store writes. Reads never error: missing or
/// unparseable data degrades to an empty list.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not write {path}: {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not serialize todo list: {0}")]
    SerializeError(#[from] serde_json::Error),
}

/// Load the todo list from the data directory.
///
/// A missing file is a fresh start. Content that doesn't parse as the
/// expected shape is appended to the recovery log and discarded; the
/// caller always gets a usable list.
pub fn load_todos(data_dir: &Path) -> Vec<Todo> {
    let path = data_dir.join(STORE_FILE);
    let content = match fs::read_to_string(&path) {
        Ok(c) => c,
        Err(_) => return Vec::new(),
    };
    match serde_json::from_str(&content) {
        Ok(todos) => todos,
        Err(e) => {
            recovery::log_discarded(data_dir, STORE_FILE, &e.to_string(), &content);
            Vec::new()
        }
    }
}

/// Serialize the full list and replace the store file atomically
/// (temp file in the same directory, then rename).
pub fn save_todos(data_dir: &Path, todos: &[Todo]) -> Result<(), StoreError> {
    let path = data_dir.join(STORE_FILE);
    fs::create_dir_all(data_dir).map_err(|e| StoreError::WriteError {
        path: path.clone(),
        source: e,
    })?;

    let json = serde_json::to_string_pretty(todos)?;

    let mut tmp = NamedTempFile::new_in(data_dir).map_err(|e| StoreError::WriteError {
        path: path.clone(),
        source: e,
    })?;
    tmp.write_all(json.as_bytes())
        .and_then(|_| tmp.flush())
        .map_err(|e| StoreError::WriteError {
            path: path.clone(),
            source: e,
        })?;
    tmp.persist(&path).map_err(|e| StoreError::WriteError {
        path,
        source: e.error,
    })?;
    Ok(())
}
