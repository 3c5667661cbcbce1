//! Settings file discovery and loading.

use crate::config::ViewerConfig;
use crate::error::{ConfigError, SettingsResult};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "ifckit";
const CONFIG_FILE: &str = "config.toml";

/// Resolves and loads the viewer configuration
pub struct SettingsManager;

impl SettingsManager {
    /// Platform configuration directory for IfcKit
    pub fn config_dir() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| {
                ConfigError::UnsupportedPlatform(std::env::consts::OS.to_string()).into()
            })
    }

    /// Default configuration file path
    pub fn config_file_path() -> SettingsResult<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Load the configuration from `path`, or defaults when the file does not exist
    pub fn load_from(path: &Path) -> SettingsResult<ViewerConfig> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(ViewerConfig::default());
        }
        let config = ViewerConfig::load_from_file(path)?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load the configuration from the default location
    pub fn load() -> SettingsResult<ViewerConfig> {
        match Self::config_file_path() {
            Ok(path) => Self::load_from(&path),
            Err(e) => {
                tracing::warn!("Config directory unavailable ({}), using defaults", e);
                Ok(ViewerConfig::default())
            }
        }
    }
}
