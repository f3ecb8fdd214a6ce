//! Configuration manager for loading and saving timer settings
//!
//! Settings live in `<user config dir>/Tickdown/config.json` and are written
//! atomically (temp file + rename) to prevent corruption.

use crate::config::models::TimerConfig;
use crate::error::{Result, StringError, TickdownError};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Configuration manager
pub struct ConfigManager;

impl ConfigManager {
    /// Directory holding the settings file (and the log files)
    pub fn app_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("Tickdown")
    }

    /// Get the path to the settings file
    pub fn config_path() -> PathBuf {
        Self::app_dir().join("config.json")
    }

    /// Load settings from disk
    ///
    /// If the settings file doesn't exist or is corrupt, returns default settings.
    pub fn load() -> Result<TimerConfig> {
        Self::load_from(&Self::config_path())
    }

    /// Load settings from an explicit path
    pub fn load_from(path: &Path) -> Result<TimerConfig> {
        if !path.exists() {
            info!("Settings file not found, using defaults");
            return Ok(TimerConfig::default());
        }

        let json = std::fs::read_to_string(path)?;

        match serde_json::from_str(&json) {
            Ok(config) => {
                info!("Settings loaded successfully");
                Ok(config)
            }
            Err(e) => {
                warn!("Failed to parse settings file, using defaults: {}", e);
                Ok(TimerConfig::default())
            }
        }
    }

    /// Save settings to disk with atomic write
    pub fn save(config: &TimerConfig) -> Result<()> {
        Self::save_to(&Self::config_path(), config)
    }

    /// Save settings to an explicit path with atomic write
    ///
    /// Uses a temporary file and rename to ensure the settings file is never
    /// left half-written.
    pub fn save_to(path: &Path, config: &TimerConfig) -> Result<()> {
        let dir = path
            .parent()
            .ok_or_else(|| TickdownError::ConfigError(StringError::new("Invalid settings path")))?;
        std::fs::create_dir_all(dir)?;

        let temp_path = path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(config)?;
        std::fs::write(&temp_path, json)?;
        std::fs::rename(temp_path, path)?;

        info!("Settings saved successfully");
        Ok(())
    }
}
