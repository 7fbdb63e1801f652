//! Completion Tracker - per-step progress projected from a validation result.

use std::fmt;

use crate::types::Category;
use crate::validation::{BudgetGroup, ConfigGap, ValidationResult};
use crate::value_objects::CharacterBio;

/// Wizard steps in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WizardStep {
    Identity,
    Attributes,
    Skills,
    Disciplines,
    Advantages,
    Flaws,
    Submit,
}

impl WizardStep {
    pub const ALL: [WizardStep; 7] = [
        Self::Identity,
        Self::Attributes,
        Self::Skills,
        Self::Disciplines,
        Self::Advantages,
        Self::Flaws,
        Self::Submit,
    ];

    pub fn index(&self) -> usize {
        match self {
            Self::Identity => 0,
            Self::Attributes => 1,
            Self::Skills => 2,
            Self::Disciplines => 3,
            Self::Advantages => 4,
            Self::Flaws => 5,
            Self::Submit => 6,
        }
    }

    /// Step at `index`, or `None` when out of range.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Identity => "Identity",
            Self::Attributes => "Attributes",
            Self::Skills => "Skills",
            Self::Disciplines => "Disciplines",
            Self::Advantages => "Advantages",
            Self::Flaws => "Flaws",
            Self::Submit => "Submit",
        }
    }

    pub fn numeral(&self) -> &'static str {
        match self {
            Self::Identity => "I",
            Self::Attributes => "II",
            Self::Skills => "III",
            Self::Disciplines => "IV",
            Self::Advantages => "V",
            Self::Flaws => "VI",
            Self::Submit => "VII",
        }
    }

    /// Following step; stays on the last one.
    pub fn next(&self) -> Self {
        Self::from_index(self.index() + 1).unwrap_or(Self::Submit)
    }

    /// Preceding step; stays on the first one.
    pub fn prev(&self) -> Self {
        self.index()
            .checked_sub(1)
            .and_then(Self::from_index)
            .unwrap_or(Self::Identity)
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.numeral(), self.label())
    }
}

/// Pure projection of [`ValidationResult`] onto wizard steps.
pub struct CompletionTracker;

impl CompletionTracker {
    /// Whether the step at `index` is complete. Out-of-range indices are not.
    pub fn is_step_complete(index: usize, result: &ValidationResult, bio: &CharacterBio) -> bool {
        WizardStep::from_index(index).is_some_and(|step| Self::step_complete(step, result, bio))
    }

    pub fn step_complete(step: WizardStep, result: &ValidationResult, bio: &CharacterBio) -> bool {
        match step {
            WizardStep::Identity => bio.required_filled() && !result.has_gap(ConfigGap::Clan),
            WizardStep::Attributes => {
                !result.has_gap(ConfigGap::AttributePriorities)
                    && Category::ALL
                        .into_iter()
                        .all(|c| result.is_satisfied(BudgetGroup::Attributes(c)))
            }
            WizardStep::Skills => {
                !result.has_gap(ConfigGap::SkillPriorities)
                    && Category::ALL
                        .into_iter()
                        .all(|c| result.is_satisfied(BudgetGroup::Skills(c)))
            }
            WizardStep::Disciplines => result.is_satisfied(BudgetGroup::Disciplines),
            WizardStep::Advantages => result.is_satisfied(BudgetGroup::Advantages),
            WizardStep::Flaws => result.is_satisfied(BudgetGroup::Flaws),
            WizardStep::Submit => WizardStep::ALL[..WizardStep::Submit.index()]
                .iter()
                .all(|prior| Self::step_complete(*prior, result, bio)),
        }
    }

    /// Completion flag for every step, in order.
    pub fn progress(result: &ValidationResult, bio: &CharacterBio) -> Vec<(WizardStep, bool)> {
        WizardStep::ALL
            .into_iter()
            .map(|step| (step, Self::step_complete(step, result, bio)))
            .collect()
    }
}
