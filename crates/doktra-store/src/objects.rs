//! The document store: JSON documents under a root directory.
//!
//! Keys are `/`-separated strings from [`doktra_core::keys`]; each key
//! maps to one file under the root. Writes go to a temp file in the
//! same directory and are renamed into place, so a document is never
//! observed half-written.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::StoreError;

/// Handle to a store root directory.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    root: PathBuf,
}

impl DocumentStore {
    /// Open a store at `root`, creating the directory if needed.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Open the store in the platform data directory
    /// (e.g. `~/.local/share/doktra`).
    pub fn open_default() -> Result<Self, StoreError> {
        let base = dirs::data_dir().ok_or(StoreError::NoDataDir)?;
        Self::open(base.join("doktra"))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && !key.starts_with('/')
            && key
                .split('/')
                .all(|part| !part.is_empty() && part != "." && part != "..");
        if !valid {
            return Err(StoreError::InvalidKey {
                key: key.to_string(),
            });
        }
        Ok(self.root.join(key))
    }
}

/// Read a document. `NotFound` when the key has never been written.
pub fn get_object(store: &DocumentStore, key: &str) -> Result<Vec<u8>, StoreError> {
    let path = store.path_for(key)?;
    match fs::read(&path) {
        Ok(body) => Ok(body),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(StoreError::NotFound {
            key: key.to_string(),
        }),
        Err(e) => Err(e.into()),
    }
}

/// Write a document, replacing any previous contents.
pub fn put_object(store: &DocumentStore, key: &str, body: &[u8]) -> Result<(), StoreError> {
    let path = store.path_for(key)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    // Write to a temp file then rename for atomicity
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, body)?;
    fs::rename(&tmp, &path)?;

    info!(key, "document saved");
    Ok(())
}

/// Delete a document. Deleting an absent key is not an error.
pub fn delete_object(store: &DocumentStore, key: &str) -> Result<(), StoreError> {
    let path = store.path_for(key)?;
    match fs::remove_file(&path) {
        Ok(()) => {
            info!(key, "document deleted");
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}

/// List document keys under a prefix, sorted.
pub fn list_objects(store: &DocumentStore, prefix: &str) -> Result<Vec<String>, StoreError> {
    let mut keys = Vec::new();
    collect_keys(&store.root, "", &mut keys)?;
    keys.retain(|k| k.starts_with(prefix));
    keys.sort();
    Ok(keys)
}

/// Delete every document under a prefix. Returns the number deleted.
pub fn delete_objects_by_prefix(store: &DocumentStore, prefix: &str) -> Result<usize, StoreError> {
    let keys = list_objects(store, prefix)?;
    let count = keys.len();
    for key in &keys {
        delete_object(store, key)?;
    }
    Ok(count)
}

fn collect_keys(dir: &Path, rel: &str, keys: &mut Vec<String>) -> Result<(), StoreError> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(e.into()),
    };

    for entry in entries {
        let entry = entry?;
        let name = entry.file_name();
        let name = name.to_string_lossy();
        let child = if rel.is_empty() {
            name.to_string()
        } else {
            format!("{rel}/{name}")
        };

        if entry.file_type()?.is_dir() {
            collect_keys(&entry.path(), &child, keys)?;
        } else {
            keys.push(child);
        }
    }
    Ok(())
}
