use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::{KeyValueStore, StorageError, StorageKey};
use crate::app_dirs::{self, AppFile};

/// Default filename for persisted key/value state.
pub const STORAGE_FILE_NAME: &str = AppFile::Storage.file_name();

/// Write-through JSON store.
///
/// The whole map is rewritten on every change; unknown keys found on disk
/// are preserved so newer builds can share the file.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store in the app directory.
    pub fn open_default() -> Result<Self, StorageError> {
        Self::open(app_dirs::app_file(AppFile::Storage)?)
    }

    /// Open a store at `path`, starting empty when the file does not exist.
    pub fn open(path: PathBuf) -> Result<Self, StorageError> {
        let values = if path.exists() {
            read_map(&path)?
        } else {
            BTreeMap::new()
        };
        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| StorageError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let data = serde_json::to_string_pretty(&self.values).map_err(StorageError::Serialize)?;
        std::fs::write(&self.path, data).map_err(|source| StorageError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: StorageKey) -> Option<String> {
        self.values.get(key.as_str()).cloned()
    }

    fn set(&mut self, key: StorageKey, value: String) -> Result<(), StorageError> {
        if self.values.get(key.as_str()) == Some(&value) {
            return Ok(());
        }
        self.values.insert(key.as_str().to_string(), value);
        self.flush()
    }

    fn remove(&mut self, key: StorageKey) -> Result<(), StorageError> {
        if self.values.remove(key.as_str()).is_none() {
            return Ok(());
        }
        self.flush()
    }
}

fn read_map(path: &Path) -> Result<BTreeMap<String, String>, StorageError> {
    let bytes = std::fs::read(path).map_err(|source| StorageError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(BTreeMap::new());
    }
    serde_json::from_slice(&bytes).map_err(|source| StorageError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
