//! Priority assignment - which category each priority level claims.

use serde::{Deserialize, Serialize};

use crate::types::{Category, PriorityLevel};

/// A bijection-in-progress from priority levels to categories.
///
/// Each level maps to at most one category and each category is claimed by
/// at most one level. Assigning a category to a level overwrites whatever
/// the level held and releases the category from any other level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityAssignment {
    #[serde(default)]
    primary: Option<Category>,
    #[serde(default)]
    secondary: Option<Category>,
    #[serde(default)]
    tertiary: Option<Category>,
}

impl PriorityAssignment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign (or with `None`, clear) the category for a level.
    ///
    /// Returns the category the level held before.
    pub fn assign(&mut self, level: PriorityLevel, category: Option<Category>) -> Option<Category> {
        if let Some(category) = category {
            for other in PriorityLevel::ALL {
                if other != level && self.get(other) == Some(category) {
                    *self.slot_mut(other) = None;
                }
            }
        }
        std::mem::replace(self.slot_mut(level), category)
    }

    pub fn get(&self, level: PriorityLevel) -> Option<Category> {
        match level {
            PriorityLevel::Primary => self.primary,
            PriorityLevel::Secondary => self.secondary,
            PriorityLevel::Tertiary => self.tertiary,
        }
    }

    /// Level claiming a category, if any.
    pub fn level_of(&self, category: Category) -> Option<PriorityLevel> {
        PriorityLevel::ALL
            .into_iter()
            .find(|level| self.get(*level) == Some(category))
    }

    /// True once all three levels are assigned.
    pub fn is_complete(&self) -> bool {
        PriorityLevel::ALL
            .into_iter()
            .all(|level| self.get(level).is_some())
    }

    /// Categories selectable for `level`: its current one plus any unclaimed.
    pub fn available_categories(&self, level: PriorityLevel) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|category| match self.level_of(*category) {
                None => true,
                Some(owner) => owner == level,
            })
            .collect()
    }

    fn slot_mut(&mut self, level: PriorityLevel) -> &mut Option<Category> {
        match level {
            PriorityLevel::Primary => &mut self.primary,
            PriorityLevel::Secondary => &mut self.secondary,
            PriorityLevel::Tertiary => &mut self.tertiary,
        }
    }
}

/// Attribute and skill priorities for one build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Priorities {
    #[serde(default)]
    pub attributes: PriorityAssignment,
    #[serde(default)]
    pub skills: PriorityAssignment,
}

impl Priorities {
    pub fn is_complete(&self) -> bool {
        self.attributes.is_complete() && self.skills.is_complete()
    }
}
