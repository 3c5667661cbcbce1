//! Viewer engine interface
//!
//! The 3-D engine (geometry, shadows, clipping math, picking) lives outside
//! this crate. The session talks to it only through [`ViewerEngine`], and
//! obtains one through an [`EngineFactory`] once a [`HostSurface`] exists.

use async_trait::async_trait;
use ifckit_core::{EngineError, Rgb};
use std::path::{Path, PathBuf};

/// File extensions the file picker accepts
pub const IFC_EXTENSIONS: &[&str] = &["ifc"];

/// Engine-assigned model identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModelId(pub u32);

impl std::fmt::Display for ModelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Handle returned by a successful model build
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelHandle {
    /// Id of the built model
    pub id: ModelId,
}

/// A model file chosen by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelFile {
    path: PathBuf,
    name: String,
}

impl ModelFile {
    /// Reference a file on disk
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { path, name }
    }

    /// Path of the file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Display name (file name without directories)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the extension is one the picker accepts
    pub fn has_ifc_extension(&self) -> bool {
        self.path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| IFC_EXTENSIONS.iter().any(|e| e.eq_ignore_ascii_case(ext)))
    }
}

/// Loader options applied once at initialization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineOptions {
    /// Translate model coordinates to the world origin
    pub coordinate_to_origin: bool,
    /// Use fast boolean geometry operations
    pub fast_booleans: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            coordinate_to_origin: true,
            fast_booleans: false,
        }
    }
}

/// The UI region an engine renders into
///
/// Borrowed only for the duration of engine creation; the session never
/// keeps a reference to it.
pub trait HostSurface {
    /// Human-readable label for logs
    fn label(&self) -> &str;

    /// Whether the surface is mounted and can host an engine
    fn is_mounted(&self) -> bool;
}

/// Live handle to the external 3-D engine
///
/// Methods take `&self`: engine handles carry their own interior state, and
/// the session runs on a single thread, hence the non-`Send` futures.
#[async_trait(?Send)]
pub trait ViewerEngine {
    /// Add world axes to the scene
    fn add_axes(&self);

    /// Add the ground grid to the scene
    fn add_grid(&self);

    /// Apply loader options
    fn configure(&self, options: EngineOptions);

    /// Parse and build a model
    async fn load_model(
        &self,
        file: &ModelFile,
        compute_shadow: bool,
    ) -> Result<ModelHandle, EngineError>;

    /// Render the drop shadow of a built model
    async fn render_shadow(&self, model: ModelId);

    /// Flip clipping-plane mode; the engine may refuse silently
    fn toggle_clipping_planes(&self);

    /// Whether clipping-plane mode is active
    fn is_clipping_active(&self) -> bool;

    /// Whether the engine currently holds a selection
    fn is_selection_active(&self) -> bool;
}

/// Constructs engines on hosting surfaces
pub trait EngineFactory {
    /// Engine type produced
    type Engine: ViewerEngine;

    /// Create an engine rendering into `surface` with the given background
    fn create(
        &self,
        surface: &dyn HostSurface,
        background: Rgb,
    ) -> Result<Self::Engine, EngineError>;
}
