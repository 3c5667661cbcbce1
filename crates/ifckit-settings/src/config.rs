//! Viewer configuration
//!
//! Configuration is organized into sections:
//! - Scene aids (background, axes, grid)
//! - Loader options handed to the engine
//! - Notification timing
//!
//! Files may be JSON or TOML; missing keys fall back to defaults.

use crate::error::{ConfigError, SettingsResult};
use ifckit_core::Rgb;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Scene aids configured when the engine is created
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneSettings {
    /// Viewer background color
    pub background_color: Rgb,
    /// Draw the world axes
    pub show_axes: bool,
    /// Draw the ground grid
    pub show_grid: bool,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            background_color: Rgb::WHITE,
            show_axes: true,
            show_grid: true,
        }
    }
}

/// Options the engine applies while parsing and building models
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderSettings {
    /// Move model coordinates so the model sits at the world origin
    pub coordinate_to_origin: bool,
    /// Use the engine's fast (less exact) boolean geometry
    pub fast_booleans: bool,
    /// Ask the engine to compute a drop shadow for each model
    pub compute_shadow: bool,
}

impl Default for LoaderSettings {
    fn default() -> Self {
        Self {
            coordinate_to_origin: true,
            fast_booleans: false,
            compute_shadow: true,
        }
    }
}

/// Notification timing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationSettings {
    /// How long a load notification stays visible, in milliseconds
    pub auto_dismiss_ms: u64,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            auto_dismiss_ms: 6000,
        }
    }
}

/// Complete viewer configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ViewerConfig {
    /// Scene aids
    pub scene: SceneSettings,
    /// Loader options
    pub loader: LoaderSettings,
    /// Notification timing
    pub notifications: NotificationSettings,
}

enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> SettingsResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(ConfigError::UnsupportedFormat(other.unwrap_or("").to_string()).into()),
    }
}

impl ViewerConfig {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.notifications.auto_dismiss_ms == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "notifications.auto_dismiss_ms".to_string(),
                value: "0".to_string(),
            });
        }
        Ok(())
    }
}
