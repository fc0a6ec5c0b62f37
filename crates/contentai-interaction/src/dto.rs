//! Wire shapes of backend responses.
//!
//! Each endpoint gets an explicit type; anything that doesn't match is a
//! `Decode` error at the boundary.

use contentai_core::generation::Idea;
use contentai_core::user::User;
use serde::Deserialize;

/// `POST /api/auth/login` and `POST /api/auth/register`.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub user: User,
}

/// `GET /api/auth/me`.
#[derive(Debug, Clone, Deserialize)]
pub struct MeResponse {
    pub user: User,
}

/// Error body returned with non-success statuses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    /// Set when an anonymous caller exhausted the free usage quota.
    #[serde(default)]
    pub requires_auth: bool,
}

impl ErrorBody {
    /// The human readable message, `error` first.
    pub fn message(&self) -> Option<&str> {
        self.error
            .as_deref()
            .or(self.message.as_deref())
            .filter(|m| !m.trim().is_empty())
    }
}

/// `POST /api/generate-ideas`.
#[derive(Debug, Clone, Deserialize)]
pub struct IdeasResponse {
    pub ideas: Vec<Idea>,
}

/// `POST /api/generate-script`.
#[derive(Debug, Clone, Deserialize)]
pub struct ScriptResponse {
    pub script: String,
}

/// `GET /admin/users`.
#[derive(Debug, Clone, Deserialize)]
pub struct UsersResponse {
    pub users: Vec<User>,
}

/// `PUT /admin/user/{id}` acknowledgement.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUserResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}
