//! Approval service client over HTTP (reqwest).

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

use codex_domain::CharacterId;
use codex_shared::api;
use codex_shared::{
    CatalogCategory, EditCharacterResponse, ErrorBody, SubmissionRequest, SubmitAck,
    TraitCatalogResponse,
};

use crate::infrastructure::config::PlayerConfig;
use crate::ports::outbound::{ApiError, ApprovalApiPort};

const CSRF_HEADER: &str = "X-CSRFToken";

#[derive(Clone)]
pub struct HttpApprovalClient {
    client: Client,
    base_url: String,
    csrf_token: Option<String>,
}

impl HttpApprovalClient {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            csrf_token: None,
        }
    }

    pub fn from_config(config: &PlayerConfig) -> Self {
        let mut client = Self::new(&config.api_url, config.request_timeout);
        client.csrf_token = config.csrf_token.clone();
        client
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn with_csrf(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.csrf_token {
            Some(token) => request.header(CSRF_HEADER, token),
            None => request,
        }
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        if !response.status().is_success() {
            return Err(rejection(response).await);
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }
}

/// Turn an error response into `ApiError::Rejected`, preferring the
/// service's `{"error": ...}` text over the raw body.
async fn rejection(response: Response) -> ApiError {
    let status = response.status().as_u16();
    let text = match response.text().await {
        Ok(text) => text,
        Err(e) => return ApiError::Request(e.to_string()),
    };
    let message = serde_json::from_str::<ErrorBody>(&text)
        .ok()
        .and_then(|body| body.message().map(str::to_string))
        .unwrap_or_else(|| text.trim().to_string());
    ApiError::Rejected { status, message }
}

#[async_trait]
impl ApprovalApiPort for HttpApprovalClient {
    async fn fetch_catalog(
        &self,
        category: CatalogCategory,
    ) -> Result<TraitCatalogResponse, ApiError> {
        tracing::debug!(category = %category, "Fetching trait catalog");
        self.send(self.client.get(self.url(&api::catalog_path(category))))
            .await
    }

    async fn fetch_for_edit(&self, id: CharacterId) -> Result<EditCharacterResponse, ApiError> {
        self.send(self.client.get(self.url(&api::for_edit_path(id))))
            .await
    }

    async fn submit(
        &self,
        editing: Option<CharacterId>,
        request: &SubmissionRequest,
    ) -> Result<SubmitAck, ApiError> {
        let url = self.url(&api::submit_path(editing));
        tracing::debug!(url = %url, "Submitting character");
        let builder = self.with_csrf(self.client.post(url).json(request));
        self.send(builder).await
    }
}
