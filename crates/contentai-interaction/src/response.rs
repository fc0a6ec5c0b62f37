//! Raw backend response and its classification.

use contentai_core::{ContentAiError, Result};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::dto::ErrorBody;

/// Status and body of a completed call.
///
/// Authorization failures never reach this type through
/// `SessionManager::authenticated_request`; they are turned into
/// `SessionExpired` first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decodes the body as `T`, regardless of status.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_str(&self.body).map_err(|e| {
            ContentAiError::decode(format!("unexpected response body (status {}): {}", self.status, e))
        })
    }

    /// Best-effort parse of an `{error, requires_auth}` body.
    pub fn error_body(&self) -> ErrorBody {
        serde_json::from_str(&self.body).unwrap_or_default()
    }

    /// Classifies a non-success response.
    ///
    /// A `requires_auth` flag means the anonymous quota is exhausted, which is
    /// distinct from a rejected credential. Anything else is a backend error
    /// carrying the body's message, or the status reason if there is none.
    pub fn to_error(&self) -> ContentAiError {
        let body = self.error_body();
        if body.requires_auth {
            let message = body.message().unwrap_or("Login required to continue");
            return ContentAiError::auth_required(message);
        }

        let message = match body.message() {
            Some(message) => message.to_string(),
            None => StatusCode::from_u16(self.status)
                .ok()
                .and_then(|s| s.canonical_reason())
                .unwrap_or("Request failed")
                .to_string(),
        };
        ContentAiError::backend(self.status, message)
    }

    /// Decodes a success body as `T`, or classifies the failure.
    pub fn into_result<T: DeserializeOwned>(self) -> Result<T> {
        if self.is_success() {
            self.json()
        } else {
            Err(self.to_error())
        }
    }
}
