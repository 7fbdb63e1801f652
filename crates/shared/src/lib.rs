//! Codex Shared - wire contracts between the wizard and the approval service
//!
//! This crate contains the types exchanged with the service:
//! - Trait catalog descriptors
//! - The submission payload and its formatter
//! - The edit-for-resubmission response and its loose application to a build
//! - Endpoint paths
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde, serde_json and tracing on top of the domain
//! 2. **Forgiving reads** - remote data may be older or newer than the ruleset

pub mod api;
pub mod catalog;
pub mod edit;
pub mod submission;

pub use catalog::{CatalogCategory, TraitCatalog, TraitCatalogResponse, TraitDescriptor};
pub use edit::{AppliedCharacter, EditCharacterResponse, RejectionFeedback, StoredCharacter};
pub use submission::{
    CharacterData, ErrorBody, MeritPayload, SubmissionFormatter, SubmissionRequest, SubmitAck,
};
