//! IfcKit Settings Crate
//!
//! Handles viewer configuration: scene aids, loader options, and
//! notification timing, read from TOML or JSON files.

pub mod config;
pub mod error;
pub mod manager;

pub use config::{LoaderSettings, NotificationSettings, SceneSettings, ViewerConfig};
pub use error::{ConfigError, SettingsError, SettingsResult};
pub use manager::SettingsManager;
