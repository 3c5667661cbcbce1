//! Building element categories
//!
//! The fixed set of IFC element classes the viewer can filter on.

use crate::error::ViewerError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Element category used to gate which model elements are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ElementCategory {
    /// Standard-case walls
    WallStandardCase,
    /// Floor, roof and landing slabs
    Slab,
    /// Doors
    Door,
    /// Windows
    Window,
    /// Furniture and fixtures
    FurnishingElement,
    /// Structural members (beams, mullions, ...)
    Member,
    /// Plates (panels, glazing)
    Plate,
}

impl ElementCategory {
    /// Number of categories
    pub const COUNT: usize = 7;

    /// Every category, in declaration order
    pub const ALL: [ElementCategory; Self::COUNT] = [
        ElementCategory::WallStandardCase,
        ElementCategory::Slab,
        ElementCategory::Door,
        ElementCategory::Window,
        ElementCategory::FurnishingElement,
        ElementCategory::Member,
        ElementCategory::Plate,
    ];

    /// Position of this category in [`ElementCategory::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    /// IFC entity name as it appears in a STEP file
    pub fn ifc_name(self) -> &'static str {
        match self {
            Self::WallStandardCase => "IFCWALLSTANDARDCASE",
            Self::Slab => "IFCSLAB",
            Self::Door => "IFCDOOR",
            Self::Window => "IFCWINDOW",
            Self::FurnishingElement => "IFCFURNISHINGELEMENT",
            Self::Member => "IFCMEMBER",
            Self::Plate => "IFCPLATE",
        }
    }

    /// Numeric IFC type code the engine filters by
    pub fn type_code(self) -> u32 {
        match self {
            Self::WallStandardCase => 3512223829,
            Self::Slab => 1529196076,
            Self::Door => 395920057,
            Self::Window => 3304561284,
            Self::FurnishingElement => 263784265,
            Self::Member => 1073191201,
            Self::Plate => 3171933400,
        }
    }

    /// Look up a category by its exact upper-case IFC entity name
    pub fn from_ifc_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.ifc_name() == name)
    }
}

impl std::fmt::Display for ElementCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WallStandardCase => write!(f, "WallStandardCase"),
            Self::Slab => write!(f, "Slab"),
            Self::Door => write!(f, "Door"),
            Self::Window => write!(f, "Window"),
            Self::FurnishingElement => write!(f, "FurnishingElement"),
            Self::Member => write!(f, "Member"),
            Self::Plate => write!(f, "Plate"),
        }
    }
}

/// Accepts the display name (`Slab`) or the IFC name (`IFCSLAB`), ignoring case
impl FromStr for ElementCategory {
    type Err = ViewerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| {
                c.ifc_name().eq_ignore_ascii_case(name) || c.to_string().eq_ignore_ascii_case(name)
            })
            .ok_or_else(|| ViewerError::InvalidCategory {
                name: s.to_string(),
            })
    }
}
