//! Application settings stored as JSON in the platform config directory.

use scrawl_core::config::{BoardConfig, ConfigError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors reading or writing the settings file.
#[derive(Debug, Error)]
pub enum AppConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] ConfigError),
}

/// Window and board settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub board: BoardConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Scrawl".to_string(),
            width: 1280,
            height: 800,
            board: BoardConfig::default(),
        }
    }
}

impl AppConfig {
    /// `<config_dir>/scrawl/config.json`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("scrawl").join("config.json"))
    }

    /// Load from the default location.
    ///
    /// A missing file gives the defaults. An unreadable or invalid one is
    /// logged and also gives the defaults.
    pub fn load() -> Self {
        let Some(path) = Self::default_path() else {
            log::info!("No config directory, using default settings");
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(config) => {
                log::info!("Loaded settings from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("Ignoring settings in {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Read and validate a settings file.
    pub fn load_from(path: &Path) -> Result<Self, AppConfigError> {
        let text = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.board.validate()?;
        Ok(config)
    }

    /// Write as pretty JSON, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), AppConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}
