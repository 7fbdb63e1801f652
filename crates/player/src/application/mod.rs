//! Application layer - Use cases and orchestration

pub mod drafts;
pub mod error;
pub mod review;
pub mod session;

pub use drafts::DraftService;
pub use error::SessionError;
pub use review::{pips, ReviewSection, ReviewSummary};
pub use session::WizardSession;
