//! Application-level errors for the wizard session.

use thiserror::Error;

use codex_domain::DomainError;

use crate::ports::outbound::ApiError;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Submit attempted while the build breaks the budget rules
    #[error("Build is not valid: {}", reasons.join("; "))]
    Blocked { reasons: Vec<String> },

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl SessionError {
    pub fn is_blocked(&self) -> bool {
        matches!(self, Self::Blocked { .. })
    }
}
