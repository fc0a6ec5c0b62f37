//! HTTP transport to the ContentAI backend.

use std::time::Duration;

use contentai_core::config::ClientConfig;
use contentai_core::{ContentAiError, Result};
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;

use crate::request::ApiRequest;
use crate::response::ApiResponse;

/// Thin wrapper over `reqwest::Client` bound to one backend.
///
/// It knows nothing about sessions: the caller passes the token to attach,
/// and any status comes back as an `ApiResponse`. Only transport failures
/// are errors here.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(
            config.base_url(),
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issues `request`, adding `Authorization: Bearer <token>` when a token is given.
    pub async fn send(&self, request: &ApiRequest, token: Option<&str>) -> Result<ApiResponse> {
        let url = format!("{}{}", self.base_url, request.path);

        let mut builder = self
            .client
            .request(request.method.clone(), &url)
            .header(CONTENT_TYPE, "application/json")
            .timeout(self.timeout);

        if let Some(token) = token {
            builder = builder.header("Authorization", format!("Bearer {}", token));
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            tracing::warn!(method = %request.method, path = %request.path, "request failed: {}", e);
            ContentAiError::network(e.to_string())
        })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ContentAiError::network(format!("failed to read response body: {}", e)))?;

        tracing::debug!(method = %request.method, path = %request.path, status, "response received");
        Ok(ApiResponse::new(status, body))
    }
}
