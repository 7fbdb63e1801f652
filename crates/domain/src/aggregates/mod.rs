//! Aggregate roots - domain objects that own their related data
//!
//! Each aggregate:
//! - Owns all its constituent parts (enforced by Rust ownership)
//! - Exposes behavior through methods, not public fields
//! - Returns domain events from mutations

pub mod character_build;
pub mod ledger;

pub use character_build::{CharacterBuild, PriorityTable};
pub use ledger::{MeritEntry, Qualifier, TraitLedger};
