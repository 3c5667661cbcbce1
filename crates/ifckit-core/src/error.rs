//! Error handling for IfcKit
//!
//! Provides the error types used across the viewer session:
//! - Viewer errors (session preconditions, load failures, filter input)
//! - Engine errors (failures reported by the external 3-D engine)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Engine error type
///
/// Represents failures reported by the viewer engine itself. The message is
/// the engine's own text and is meant for logs, not for the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The hosting surface could not take an engine
    #[error("Surface unavailable: {reason}")]
    SurfaceUnavailable {
        /// Why the surface refused the engine.
        reason: String,
    },

    /// The model file could not be read
    #[error("Failed to read model file {path}: {reason}")]
    Read {
        /// Path of the model file.
        path: String,
        /// Underlying I/O failure.
        reason: String,
    },

    /// The model content could not be parsed or built
    #[error("{message}")]
    Parse {
        /// The engine's parse/build message.
        message: String,
    },
}

impl EngineError {
    /// Create a parse error from a message
    pub fn parse(message: impl Into<String>) -> Self {
        EngineError::Parse {
            message: message.into(),
        }
    }
}

/// Main error type for the viewer session
///
/// `NotInitialized` and `LoadInProgress` are precondition violations the
/// session absorbs silently; they are still typed so callers and logs can
/// tell them apart. `InvalidCategory` is the only kind returned to callers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViewerError {
    /// An operation needing the engine ran before the session was initialized
    #[error("Viewer session not initialized")]
    NotInitialized,

    /// A load was requested while another load is in flight
    #[error("A model load is already in progress")]
    LoadInProgress,

    /// The engine failed to parse or build the model
    #[error("Model load failed: {message}")]
    LoadFailure {
        /// The captured engine message.
        message: String,
    },

    /// An unrecognized element category name reached the filter set
    #[error("Unknown element category: {name}")]
    InvalidCategory {
        /// The rejected name.
        name: String,
    },
}

impl ViewerError {
    /// Check if this error is absorbed by the session rather than surfaced
    pub fn is_silent(&self) -> bool {
        matches!(self, ViewerError::NotInitialized | ViewerError::LoadInProgress)
    }
}

impl From<EngineError> for ViewerError {
    fn from(err: EngineError) -> Self {
        ViewerError::LoadFailure {
            message: err.to_string(),
        }
    }
}

/// Result type using ViewerError
pub type Result<T> = std::result::Result<T, ViewerError>;
