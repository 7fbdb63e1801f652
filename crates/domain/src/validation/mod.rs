//! Validation - budget checks and the per-step projection of their results.
//!
//! Budget violations are data, not errors. A build that breaks every pool is
//! still a perfectly good `ValidationResult`.

mod budget;
mod completion;

pub use budget::{
    BudgetGroup, BudgetValidator, ConfigGap, GroupStatus, Target, ValidationResult, Violation,
};
pub use completion::{CompletionTracker, WizardStep};
