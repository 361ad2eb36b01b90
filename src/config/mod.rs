//! Review settings stored as TOML in the app directory.

mod defaults;
mod types;

pub use types::{
    BackgroundSettings, ConfigError, HistorySettings, LayerSettings, QuotaSettings,
    ReviewSettings,
};

use std::path::{Path, PathBuf};

use crate::app_dirs::{self, AppFile};

/// Default filename used to store review settings.
pub const CONFIG_FILE_NAME: &str = AppFile::Config.file_name();

/// Resolve the settings file path, ensuring the parent directory exists.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    app_dirs::app_file(AppFile::Config).map_err(map_app_dir_error)
}

/// Load settings from the app directory, returning defaults if missing.
pub fn load_or_default() -> Result<ReviewSettings, ConfigError> {
    load_from(&config_path()?)
}

/// Load settings from `path`; a missing file yields defaults.
pub fn load_from(path: &Path) -> Result<ReviewSettings, ConfigError> {
    if !path.exists() {
        return Ok(ReviewSettings::default());
    }
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str::<ReviewSettings>(&text)
        .map_err(|source| ConfigError::ParseToml {
            path: path.to_path_buf(),
            source,
        })
        .map(ReviewSettings::normalized)
}

/// Persist settings to the app directory.
pub fn save(settings: &ReviewSettings) -> Result<(), ConfigError> {
    save_to_path(settings, &config_path()?)
}

/// Save settings to a specific path, creating parent directories as needed.
pub fn save_to_path(settings: &ReviewSettings, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| ConfigError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let data = toml::to_string_pretty(settings).map_err(|source| ConfigError::SerializeToml {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, data).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn map_app_dir_error(error: app_dirs::AppDirError) -> ConfigError {
    match error {
        app_dirs::AppDirError::NoBaseDir => ConfigError::NoConfigDir,
        app_dirs::AppDirError::CreateDir { path, source } => {
            ConfigError::CreateDir { path, source }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let settings = load_from(&dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(settings, ReviewSettings::default());
        assert_eq!(settings.review.accept_limit, 50);
        assert_eq!(settings.review.notice_ms, 4_000);
        assert_eq!(settings.background.refresh_debounce_ms, 1_000);
    }

    #[test]
    fn partial_file_fills_defaults_and_clamps() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(
            &path,
            "[review]\naccept_limit = 0\n\n[layers]\nroads_enabled = false\nbuilding_providers = [\"\"]\nrefresh_debounce_ms = 1\n",
        )
        .unwrap();
        let settings = load_from(&path).unwrap();
        assert_eq!(settings.review.accept_limit, 1);
        assert!(!settings.layers.roads_enabled);
        assert!(settings.layers.buildings_enabled);
        assert_eq!(settings.layers.building_providers, vec!["Facebook", "Microsoft"]);
        assert_eq!(settings.layers.refresh_debounce_ms, 50);
    }

    #[test]
    fn save_then_load_preserves_values() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE_NAME);
        let mut settings = ReviewSettings::default();
        settings.review.accept_limit = 75;
        settings.history.undo_limit = 20;
        save_to_path(&settings, &path).unwrap();
        assert_eq!(load_from(&path).unwrap(), settings);
    }

    #[test]
    fn invalid_toml_reports_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[review\n").unwrap();
        match load_from(&path) {
            Err(ConfigError::ParseToml { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected parse error, got {other:?}"),
        }
    }
}
