//! Login and registration forms.
//!
//! Validation here runs before any request is issued.

use serde::Serialize;

use crate::error::{ContentAiError, Result};

/// Credentials sent to the login endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

impl LoginCredentials {
    /// Builds credentials, trimming the email.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into().trim().to_string(),
            password: password.into(),
        }
    }

    /// Checks that both fields are non-empty.
    pub fn validate(&self) -> Result<()> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(ContentAiError::validation("Email and password are required"));
        }
        Ok(())
    }
}

/// Registration form.
///
/// `confirm_password` is optional; when present it must equal `password`.
/// It is never sent to the backend.
#[derive(Debug, Clone, Serialize)]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub name: String,
    #[serde(skip)]
    pub confirm_password: Option<String>,
}

impl Registration {
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into().trim().to_string(),
            password: password.into(),
            name: name.into().trim().to_string(),
            confirm_password: None,
        }
    }

    /// Adds a password confirmation to check before submitting.
    pub fn with_confirmation(mut self, confirm_password: impl Into<String>) -> Self {
        self.confirm_password = Some(confirm_password.into());
        self
    }

    /// Checks required fields, then the confirmation.
    pub fn validate(&self) -> Result<()> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(ContentAiError::validation("Email and password are required"));
        }
        if self.name.is_empty() {
            return Err(ContentAiError::validation("Name is required"));
        }
        if let Some(confirm) = &self.confirm_password
            && confirm != &self.password
        {
            return Err(ContentAiError::PasswordMismatch);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_requires_both_fields() {
        assert!(LoginCredentials::new("  ", "pw").validate().is_err());
        assert!(LoginCredentials::new("a@b.com", "").validate().is_err());
        assert!(LoginCredentials::new(" a@b.com ", "pw").validate().is_ok());
        assert_eq!(LoginCredentials::new(" a@b.com ", "pw").email, "a@b.com");
    }

    #[test]
    fn test_registration_mismatch_is_distinguishable() {
        let form = Registration::new("a@b.com", "pw1", "Ana").with_confirmation("pw2");
        assert_eq!(form.validate(), Err(ContentAiError::PasswordMismatch));
    }

    #[test]
    fn test_registration_without_confirmation_is_valid() {
        let form = Registration::new("a@b.com", "pw", "Ana");
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_registration_requires_name() {
        let form = Registration::new("a@b.com", "pw", " ");
        assert!(matches!(form.validate(), Err(ContentAiError::Validation(_))));
    }

    #[test]
    fn test_confirmation_is_not_serialized() {
        let form = Registration::new("a@b.com", "pw", "Ana").with_confirmation("pw");
        let json = serde_json::to_value(&form).unwrap();
        assert!(json.get("confirm_password").is_none());
        assert_eq!(json["name"], "Ana");
    }
}
