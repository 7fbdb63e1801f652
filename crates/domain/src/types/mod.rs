//! # Codex Vocabulary Types
//!
//! Shared vocabulary that forms the innermost layer of the crate. These types
//! are used by the ledger, the validator and the wire contracts in
//! `codex-shared`, so they are the stable contract between them.
//!
//! ## Design Principles
//!
//! 1. **Pure data types** - No I/O, no async, no side effects
//! 2. **Stable API** - Changes here affect both domain and protocol
//! 3. **Serializable** - All types derive Serialize/Deserialize

mod category;
pub use category::{Category, PriorityLevel};

mod trait_kind;
pub use trait_kind::{RatingBounds, TraitKind};
