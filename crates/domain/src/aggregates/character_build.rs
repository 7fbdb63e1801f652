//! CharacterBuild aggregate - everything the wizard edits for one character.
//!
//! Owns the ledger, both priority assignments and the bio. Validation is
//! always derived from the current state; the aggregate never stores a
//! result that could go stale.

use crate::aggregates::ledger::{Qualifier, TraitLedger};
use crate::error::DomainError;
use crate::events::RatingChange;
use crate::types::{Category, PriorityLevel, TraitKind};
use crate::validation::{BudgetValidator, CompletionTracker, ValidationResult, WizardStep};
use crate::value_objects::{BioField, CharacterBio, Clan, PoolResolver, Priorities};

/// Which priority table an assignment targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityTable {
    Attributes,
    Skills,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterBuild {
    ledger: TraitLedger,
    priorities: Priorities,
    bio: CharacterBio,
}

impl CharacterBuild {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(ledger: TraitLedger, priorities: Priorities, bio: CharacterBio) -> Self {
        Self {
            ledger,
            priorities,
            bio,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn ledger(&self) -> &TraitLedger {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut TraitLedger {
        &mut self.ledger
    }

    pub fn priorities(&self) -> &Priorities {
        &self.priorities
    }

    pub fn bio(&self) -> &CharacterBio {
        &self.bio
    }

    pub fn clan(&self) -> Option<&'static Clan> {
        self.bio.selected_clan()
    }

    pub fn pools(&self) -> PoolResolver<'_> {
        PoolResolver::new(&self.priorities)
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    pub fn toggle_trait(
        &mut self,
        kind: TraitKind,
        name: &str,
        clicked: u8,
    ) -> Result<RatingChange, DomainError> {
        self.ledger.toggle_trait(kind, name, clicked)
    }

    pub fn set_trait(
        &mut self,
        kind: TraitKind,
        name: &str,
        value: u8,
    ) -> Result<RatingChange, DomainError> {
        self.ledger.set_trait(kind, name, value)
    }

    pub fn set_qualifier(
        &mut self,
        kind: TraitKind,
        name: &str,
        qualifier: Qualifier,
        text: &str,
    ) -> Result<(), DomainError> {
        self.ledger.set_qualifier(kind, name, qualifier, text)
    }

    /// Assign a category to a priority level. Returns what the level held before.
    pub fn assign_priority(
        &mut self,
        table: PriorityTable,
        level: PriorityLevel,
        category: Option<Category>,
    ) -> Option<Category> {
        let assignment = match table {
            PriorityTable::Attributes => &mut self.priorities.attributes,
            PriorityTable::Skills => &mut self.priorities.skills,
        };
        assignment.assign(level, category)
    }

    pub fn set_bio(&mut self, field: BioField, value: impl Into<String>) {
        self.bio.set(field, value);
    }

    // =========================================================================
    // Derived state
    // =========================================================================

    pub fn validate(&self) -> ValidationResult {
        BudgetValidator::validate(&self.ledger, &self.priorities, self.clan())
    }

    pub fn is_step_complete(&self, index: usize) -> bool {
        CompletionTracker::is_step_complete(index, &self.validate(), &self.bio)
    }

    pub fn progress(&self) -> Vec<(WizardStep, bool)> {
        CompletionTracker::progress(&self.validate(), &self.bio)
    }

    pub fn into_parts(self) -> (TraitLedger, Priorities, CharacterBio) {
        (self.ledger, self.priorities, self.bio)
    }
}
