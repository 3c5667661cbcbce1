//! Domain data shared by the viewer crates.

mod category;
mod color;

pub use category::ElementCategory;
pub use color::{ParseColorError, Rgb};

use serde::{Deserialize, Serialize};

/// The three user-facing feature toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToggleKind {
    /// Clipping-plane mode
    Clipping,
    /// Visibility-by-object mode
    Visibility,
    /// Selection mode
    Selection,
}

impl ToggleKind {
    /// Every toggle
    pub const ALL: [ToggleKind; 3] = [
        ToggleKind::Clipping,
        ToggleKind::Visibility,
        ToggleKind::Selection,
    ];
}

impl std::fmt::Display for ToggleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ToggleKind::Clipping => write!(f, "Clipping Planes"),
            ToggleKind::Visibility => write!(f, "Visibility by object"),
            ToggleKind::Selection => write!(f, "Selection"),
        }
    }
}

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// A load finished successfully
    Success,
    /// A load failed
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Success => write!(f, "success"),
            Severity::Error => write!(f, "error"),
        }
    }
}
