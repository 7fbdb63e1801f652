//! Approval API Port - the remote service that reviews submitted characters.

use async_trait::async_trait;
use thiserror::Error;

use codex_domain::CharacterId;
use codex_shared::{
    CatalogCategory, EditCharacterResponse, SubmissionRequest, SubmitAck, TraitCatalogResponse,
};

/// Failure talking to the approval service.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never got a response (connection refused, timeout, ...)
    #[error("Request failed: {0}")]
    Request(String),

    /// The service answered with an error status
    #[error("Service rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// The service answered but the body could not be decoded
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    /// Message to show the user: the service's own text for rejections,
    /// `fallback` otherwise.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Rejected { message, .. } if !message.trim().is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApprovalApiPort: Send + Sync {
    /// `GET /api/traits/?category=...`
    async fn fetch_catalog(
        &self,
        category: CatalogCategory,
    ) -> Result<TraitCatalogResponse, ApiError>;

    /// `GET /api/traits/character/{id}/for-edit/`
    async fn fetch_for_edit(&self, id: CharacterId) -> Result<EditCharacterResponse, ApiError>;

    /// Create (no id) or resubmit (id) a character.
    async fn submit(
        &self,
        editing: Option<CharacterId>,
        request: &SubmissionRequest,
    ) -> Result<SubmitAck, ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_text_is_surfaced_verbatim() {
        let err = ApiError::Rejected {
            status: 400,
            message: "Clan is required".to_string(),
        };
        assert_eq!(err.user_message("Failed to submit character"), "Clan is required");
    }

    #[test]
    fn other_failures_use_the_fallback() {
        let blank = ApiError::Rejected {
            status: 500,
            message: "  ".to_string(),
        };
        assert_eq!(blank.user_message("Failed"), "Failed");
        assert_eq!(ApiError::Request("refused".into()).user_message("Failed"), "Failed");
    }
}
