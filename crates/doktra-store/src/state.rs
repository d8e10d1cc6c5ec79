//! JSON state helpers over the document store.

use serde::{Serialize, de::DeserializeOwned};

use crate::error::StoreError;
use crate::objects::{self, DocumentStore};

/// Load and deserialize a JSON document.
pub fn load_state<T: DeserializeOwned>(store: &DocumentStore, key: &str) -> Result<T, StoreError> {
    let body = objects::get_object(store, key)?;
    Ok(serde_json::from_slice(&body)?)
}

/// Serialize and save a JSON document.
pub fn save_state<T: Serialize>(
    store: &DocumentStore,
    key: &str,
    value: &T,
) -> Result<(), StoreError> {
    let body = serde_json::to_vec_pretty(value)?;
    objects::put_object(store, key, &body)
}
