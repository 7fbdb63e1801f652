//! Codex domain - the point-budget rules of vampire character creation.
//!
//! Pure and synchronous. No I/O lives here: the player crate feeds UI events
//! in and renders whatever [`validation::ValidationResult`] comes back.

pub mod aggregates;
pub mod draft;
pub mod error;
pub mod events;
pub mod ids;
pub mod ruleset;
pub mod types;
pub mod validation;
pub mod value_objects;

pub use aggregates::{CharacterBuild, MeritEntry, PriorityTable, Qualifier, TraitLedger};
pub use draft::{DraftKey, DraftSnapshot, DRAFT_TTL_MINUTES};
pub use error::DomainError;
pub use events::RatingChange;
pub use ids::CharacterId;
pub use types::{Category, PriorityLevel, RatingBounds, TraitKind};
pub use validation::{
    BudgetGroup, BudgetValidator, CompletionTracker, ConfigGap, GroupStatus, Target,
    ValidationResult, Violation, WizardStep,
};
pub use value_objects::{
    pool_label, BioField, CharacterBio, Clan, PoolResolver, PoolTable, Priorities,
    PriorityAssignment,
};
