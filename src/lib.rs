//! # IfcKit
//!
//! Session layer of an IFC building-model viewer:
//! - Engine initialization on a host surface, deferred until it mounts
//! - Model loading with a loading indicator and one notification per load
//! - Clipping, visibility and selection toggles confirmed against the engine
//! - Per-category element filters
//!
//! ## Architecture
//!
//! IfcKit is organized as a workspace with multiple crates:
//!
//! 1. **ifckit-core** - Element categories, colors, errors, event bus
//! 2. **ifckit-settings** - Viewer configuration files
//! 3. **ifckit-viewer** - Session controller, toggles, filters, notifications
//! 4. **ifckit** - Command-line viewer that integrates all crates

pub mod report;

pub use report::{load_headless, LoadReport};

pub use ifckit_core::{
    AppEvent, ElementCategory, EngineError, EventBus, EventFilter, Rgb, Severity, ToggleKind,
    ViewerError,
};

pub use ifckit_settings::{SettingsManager, ViewerConfig};

pub use ifckit_viewer::{
    AppSnapshot, CategoryFilterSet, HeadlessEngine, HeadlessFactory, HeadlessSurface,
    InitOutcome, LoadOutcome, LoadStatus, ModelFile, ModelSummary, Notification, SessionOptions,
    UiAction, ViewerApp, IFC_EXTENSIONS,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Pretty console output on stderr
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // stdout carries the model report
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
