//! Typed key/value persistence for background preferences.
//!
//! Only the string contract matters to the review core; [`MemoryStore`]
//! backs tests and embedded hosts, [`FileStore`] keeps the map as JSON in the
//! app directory.

mod file_store;

pub use file_store::{FileStore, STORAGE_FILE_NAME};

use std::collections::BTreeMap;
use std::path::PathBuf;

use thiserror::Error;

/// Keys written by the review core.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StorageKey {
    /// Id of the base layer chosen most recently.
    BackgroundLastUsed,
    /// Id of the base layer active before the last choice (quick switch target).
    BackgroundLastUsedToggle,
    /// JSON object mapping favorite source ids to `true`.
    BackgroundFavorites,
    /// Tile template of the custom source.
    BackgroundCustomTemplate,
}

impl StorageKey {
    pub const ALL: [StorageKey; 4] = [
        StorageKey::BackgroundLastUsed,
        StorageKey::BackgroundLastUsedToggle,
        StorageKey::BackgroundFavorites,
        StorageKey::BackgroundCustomTemplate,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StorageKey::BackgroundLastUsed => "background-last-used",
            StorageKey::BackgroundLastUsedToggle => "background-last-used-toggle",
            StorageKey::BackgroundFavorites => "background-favorites",
            StorageKey::BackgroundCustomTemplate => "background-custom-template",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == raw)
    }
}

/// Errors raised by persistent stores.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Failed to read the backing file.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to write the backing file.
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Backing file is not a JSON object of strings.
    #[error("Invalid storage file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// Failed to serialize the map.
    #[error("Failed to serialize storage: {0}")]
    Serialize(serde_json::Error),
    /// Could not resolve the app directory.
    #[error("Storage directory unavailable: {0}")]
    AppDir(#[from] crate::app_dirs::AppDirError),
}

/// String-keyed get/set capability.
pub trait KeyValueStore {
    fn get(&self, key: StorageKey) -> Option<String>;
    fn set(&mut self, key: StorageKey, value: String) -> Result<(), StorageError>;
    fn remove(&mut self, key: StorageKey) -> Result<(), StorageError>;
}

/// Persist a value, logging instead of failing when the backend refuses.
pub(crate) fn set_or_warn(store: &mut dyn KeyValueStore, key: StorageKey, value: String) {
    if let Err(err) = store.set(key, value) {
        tracing::warn!("Failed to persist {}: {err}", key.as_str());
    }
}

/// Remove a value, logging instead of failing when the backend refuses.
pub(crate) fn remove_or_warn(store: &mut dyn KeyValueStore, key: StorageKey) {
    if let Err(err) = store.remove(key) {
        tracing::warn!("Failed to clear {}: {err}", key.as_str());
    }
}

/// Volatile store.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: BTreeMap<StorageKey, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: StorageKey, value: impl Into<String>) -> Self {
        self.values.insert(key, value.into());
        self
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: StorageKey) -> Option<String> {
        self.values.get(&key).cloned()
    }

    fn set(&mut self, key: StorageKey, value: String) -> Result<(), StorageError> {
        self.values.insert(key, value);
        Ok(())
    }

    fn remove(&mut self, key: StorageKey) -> Result<(), StorageError> {
        self.values.remove(&key);
        Ok(())
    }
}
