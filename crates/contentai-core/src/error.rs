//! Error types for the ContentAI client.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the entire ContentAI client.
///
/// Variants separate locally detected problems (validation), authorization
/// outcomes that change session state, backend-reported failures and
/// transport failures, so callers can react to each one differently.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ContentAiError {
    /// A required field was empty or otherwise invalid. No request was made.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Registration confirmation did not match the password. No request was made.
    #[error("Passwords do not match")]
    PasswordMismatch,

    /// The backend rejected the credential; the session has been cleared.
    #[error("Session expired (status {status})")]
    SessionExpired { status: u16 },

    /// The backend requires a login to continue (anonymous usage limit reached).
    #[error("Login required: {message}")]
    AuthRequired { message: String },

    /// The backend answered with an error status and message.
    #[error("Backend error ({status}): {message}")]
    Backend { status: u16, message: String },

    /// The request could not complete (connection refused, timeout, ...).
    #[error("Network error: {0}")]
    Network(String),

    /// The response body did not have the expected shape.
    #[error("Decode error: {0}")]
    Decode(String),

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error of persisted data
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ContentAiError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a Backend error
    pub fn backend(status: u16, message: impl Into<String>) -> Self {
        Self::Backend {
            status,
            message: message.into(),
        }
    }

    /// Creates an AuthRequired error
    pub fn auth_required(message: impl Into<String>) -> Self {
        Self::AuthRequired {
            message: message.into(),
        }
    }

    /// Creates a Network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a Decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this error was detected locally before any request.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::PasswordMismatch)
    }

    /// Check if this error cleared the session.
    pub fn is_session_expired(&self) -> bool {
        matches!(self, Self::SessionExpired { .. })
    }

    /// Check if the backend asked the caller to log in.
    pub fn is_auth_required(&self) -> bool {
        matches!(self, Self::AuthRequired { .. })
    }

    /// Check if this is a transport failure.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }

    /// Check if this is a serialization error
    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }

    /// Returns the HTTP status carried by the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::SessionExpired { status } | Self::Backend { status, .. } => Some(*status),
            _ => None,
        }
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for ContentAiError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for ContentAiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for ContentAiError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, ContentAiError>`.
pub type Result<T> = std::result::Result<T, ContentAiError>;
