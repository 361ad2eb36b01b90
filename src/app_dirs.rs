//! Where mapreview keeps its files.
//!
//! Settings, background preferences and logs sit below one `.mapreview`
//! folder. Its parent is the OS config directory unless
//! `MAPREVIEW_CONFIG_HOME` names another one.

use std::path::{Path, PathBuf};

use directories::BaseDirs;
use thiserror::Error;

pub const APP_DIR_NAME: &str = ".mapreview";
/// Environment variable that replaces the OS config root.
pub const CONFIG_HOME_ENV: &str = "MAPREVIEW_CONFIG_HOME";
const LOGS_DIR_NAME: &str = "logs";

#[derive(Debug, Error)]
pub enum AppDirError {
    #[error("No suitable base config directory available for application files")]
    NoBaseDir,
    #[error("Failed to create application directory at {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Files stored directly in the app directory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppFile {
    /// TOML review settings.
    Config,
    /// JSON key/value background preferences.
    Storage,
}

impl AppFile {
    pub const fn file_name(self) -> &'static str {
        match self {
            AppFile::Config => "config.toml",
            AppFile::Storage => "storage.json",
        }
    }
}

/// Resolved app directory. The root exists once this is built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppDirs {
    root: PathBuf,
}

impl AppDirs {
    /// Resolve from `MAPREVIEW_CONFIG_HOME`, falling back to the OS config dir.
    pub fn resolve() -> Result<Self, AppDirError> {
        let base = std::env::var_os(CONFIG_HOME_ENV)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .or_else(|| BaseDirs::new().map(|dirs| dirs.config_dir().to_path_buf()))
            .ok_or(AppDirError::NoBaseDir)?;
        Self::under(&base)
    }

    /// Lay the app directory out below `base`.
    pub fn under(base: &Path) -> Result<Self, AppDirError> {
        let root = base.join(APP_DIR_NAME);
        create_dir(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn file(&self, file: AppFile) -> PathBuf {
        self.root.join(file.file_name())
    }

    /// Log directory, created on demand.
    pub fn logs(&self) -> Result<PathBuf, AppDirError> {
        let path = self.root.join(LOGS_DIR_NAME);
        create_dir(&path)?;
        Ok(path)
    }
}

/// Path of `file` in the resolved app directory.
pub fn app_file(file: AppFile) -> Result<PathBuf, AppDirError> {
    Ok(AppDirs::resolve()?.file(file))
}

pub fn logs_dir() -> Result<PathBuf, AppDirError> {
    AppDirs::resolve()?.logs()
}

fn create_dir(path: &Path) -> Result<(), AppDirError> {
    std::fs::create_dir_all(path).map_err(|source| AppDirError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}
