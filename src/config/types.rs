use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::defaults::{
    clamp_accept_limit, clamp_debounce_ms, clamp_undo_limit, default_accept_limit,
    default_background_debounce_ms, default_building_providers, default_layer_debounce_ms,
    default_notice_ms, default_true, default_undo_limit,
};

/// Settings persisted in `config.toml`.
///
/// Config keys (TOML): `review`, `background`, `layers`, `history`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ReviewSettings {
    #[serde(default)]
    pub review: QuotaSettings,
    #[serde(default)]
    pub background: BackgroundSettings,
    #[serde(default)]
    pub layers: LayerSettings,
    #[serde(default)]
    pub history: HistorySettings,
}

impl ReviewSettings {
    pub(crate) fn normalized(mut self) -> Self {
        self.review.accept_limit = clamp_accept_limit(self.review.accept_limit);
        self.background.refresh_debounce_ms =
            clamp_debounce_ms(self.background.refresh_debounce_ms);
        self.layers.refresh_debounce_ms = clamp_debounce_ms(self.layers.refresh_debounce_ms);
        self.history.undo_limit = clamp_undo_limit(self.history.undo_limit);
        self.layers.building_providers.retain(|name| !name.trim().is_empty());
        self.layers.building_providers.dedup();
        if self.layers.building_providers.is_empty() {
            self.layers.building_providers = default_building_providers();
        }
        self
    }
}

/// Accept quota and notice timing.
///
/// Config keys: `accept_limit`, `notice_ms`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuotaSettings {
    /// Accepted candidates allowed per session outside task mode.
    #[serde(default = "default_accept_limit")]
    pub accept_limit: usize,
    /// How long transient notices stay visible.
    #[serde(default = "default_notice_ms")]
    pub notice_ms: u64,
}

impl QuotaSettings {
    pub fn notice_duration(&self) -> Duration {
        Duration::from_millis(self.notice_ms)
    }
}

impl Default for QuotaSettings {
    fn default() -> Self {
        Self {
            accept_limit: default_accept_limit(),
            notice_ms: default_notice_ms(),
        }
    }
}

/// Config keys: `refresh_debounce_ms`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BackgroundSettings {
    /// Window used to coalesce viewport-driven list refreshes.
    #[serde(default = "default_background_debounce_ms")]
    pub refresh_debounce_ms: u64,
}

impl Default for BackgroundSettings {
    fn default() -> Self {
        Self {
            refresh_debounce_ms: default_background_debounce_ms(),
        }
    }
}

/// Initial suggestion layer state.
///
/// Config keys: `show_all`, `roads_enabled`, `buildings_enabled`,
/// `building_providers`, `refresh_debounce_ms`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LayerSettings {
    #[serde(default = "default_true")]
    pub show_all: bool,
    #[serde(default = "default_true")]
    pub roads_enabled: bool,
    #[serde(default = "default_true")]
    pub buildings_enabled: bool,
    /// Provider names offered for buildings, first is the default.
    #[serde(default = "default_building_providers")]
    pub building_providers: Vec<String>,
    #[serde(default = "default_layer_debounce_ms")]
    pub refresh_debounce_ms: u64,
}

impl Default for LayerSettings {
    fn default() -> Self {
        Self {
            show_all: true,
            roads_enabled: true,
            buildings_enabled: true,
            building_providers: default_building_providers(),
            refresh_debounce_ms: default_layer_debounce_ms(),
        }
    }
}

/// Config keys: `undo_limit`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistorySettings {
    #[serde(default = "default_undo_limit")]
    pub undo_limit: usize,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self {
            undo_limit: default_undo_limit(),
        }
    }
}

/// Errors that may occur while loading or saving settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to create the config directory.
    #[error("Unable to create config directory {path}: {source}")]
    CreateDir {
        /// Directory path that failed to create.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
    /// Failed to read a config file.
    #[error("Failed to read {path}: {source}")]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
    /// Failed to write a config file.
    #[error("Failed to write {path}: {source}")]
    Write {
        /// Path that failed to write.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
    /// Failed to parse TOML config.
    #[error("Invalid config at {path}: {source}")]
    ParseToml {
        /// TOML file path.
        path: PathBuf,
        /// TOML parse error.
        source: toml::de::Error,
    },
    /// Failed to serialize config to TOML.
    #[error("Failed to serialize config to TOML at {path}: {source}")]
    SerializeToml {
        /// TOML file path.
        path: PathBuf,
        /// TOML serialization error.
        source: toml::ser::Error,
    },
    /// No usable config directory found.
    #[error("No suitable config directory found")]
    NoConfigDir,
}
