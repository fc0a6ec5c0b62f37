//! Outgoing request description.

use contentai_core::session::AuthScope;
use contentai_core::Result;
use reqwest::Method;
use serde::Serialize;

/// A backend call, independent of the credential that will be attached.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path relative to the API base URL, starting with `/`.
    pub path: String,
    pub body: Option<serde_json::Value>,
    pub scope: AuthScope,
}

impl ApiRequest {
    fn new(method: Method, path: impl Into<String>, body: Option<serde_json::Value>) -> Self {
        Self {
            method,
            path: path.into(),
            body,
            scope: AuthScope::Standard,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path, None)
    }

    pub fn post<B: Serialize>(path: impl Into<String>, body: &B) -> Result<Self> {
        Ok(Self::new(Method::POST, path, Some(serde_json::to_value(body)?)))
    }

    pub fn put<B: Serialize>(path: impl Into<String>, body: &B) -> Result<Self> {
        Ok(Self::new(Method::PUT, path, Some(serde_json::to_value(body)?)))
    }

    /// Sets which statuses count as an authorization failure for this call.
    pub fn with_scope(mut self, scope: AuthScope) -> Self {
        self.scope = scope;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders_default_to_standard_scope() {
        let request = ApiRequest::get("/api/auth/me");
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.scope, AuthScope::Standard);
        assert!(request.body.is_none());

        let request = ApiRequest::put("/admin/user/3", &serde_json::json!({"is_premium": true}))
            .unwrap()
            .with_scope(AuthScope::Admin);
        assert_eq!(request.method, Method::PUT);
        assert_eq!(request.scope, AuthScope::Admin);
        assert_eq!(request.body.unwrap()["is_premium"], true);
    }
}
