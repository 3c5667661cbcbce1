//! Element category inclusion filter
//!
//! A fixed-size mapping over every [`ElementCategory`]. The set is `Copy`,
//! so a snapshot handed to the engine can never change under it.

use ifckit_core::{ElementCategory, Result};

/// Which element categories the engine should draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CategoryFilterSet {
    included: [bool; ElementCategory::COUNT],
}

impl CategoryFilterSet {
    /// All categories excluded
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entry for `category`
    pub fn set_included(&mut self, category: ElementCategory, included: bool) {
        self.included[category.index()] = included;
    }

    /// Replace the entry for the category named `name`
    ///
    /// Fails with `InvalidCategory` when the name is not recognized; the set
    /// is left untouched in that case.
    pub fn set_included_by_name(&mut self, name: &str, included: bool) -> Result<ElementCategory> {
        let category: ElementCategory = name.parse()?;
        self.set_included(category, included);
        Ok(category)
    }

    /// Whether `category` is included
    pub fn is_included(&self, category: ElementCategory) -> bool {
        self.included[category.index()]
    }

    /// Every category with its flag, in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (ElementCategory, bool)> + '_ {
        ElementCategory::ALL
            .into_iter()
            .map(move |category| (category, self.is_included(category)))
    }

    /// Included categories
    pub fn included(&self) -> Vec<ElementCategory> {
        self.iter()
            .filter_map(|(category, included)| included.then_some(category))
            .collect()
    }

    /// IFC type codes of the included categories, for engine-side filtering
    pub fn included_type_codes(&self) -> Vec<u32> {
        self.included().into_iter().map(ElementCategory::type_code).collect()
    }
}
