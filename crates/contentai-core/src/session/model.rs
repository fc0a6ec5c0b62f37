//! Session state model.

use crate::user::User;

/// The client's belief about its current authentication state.
///
/// A user record only exists alongside the token it was validated with,
/// so the "user without token" state cannot be represented.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    /// No credential held.
    #[default]
    Anonymous,
    /// A persisted token was read at startup and has not been validated yet.
    Restored { token: String },
    /// The token was accepted by the backend, which returned this user.
    Authenticated { token: String, user: User },
}

impl Session {
    /// Returns the bearer token, if any.
    pub fn token(&self) -> Option<&str> {
        match self {
            Session::Anonymous => None,
            Session::Restored { token } | Session::Authenticated { token, .. } => Some(token),
        }
    }

    /// Returns the validated user, if any.
    pub fn current_user(&self) -> Option<&User> {
        match self {
            Session::Authenticated { user, .. } => Some(user),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated { .. })
    }

    pub fn is_anonymous(&self) -> bool {
        matches!(self, Session::Anonymous)
    }

    pub fn is_admin(&self) -> bool {
        self.current_user().is_some_and(|user| user.is_admin)
    }

    pub fn is_premium(&self) -> bool {
        self.current_user().is_some_and(|user| user.is_premium)
    }
}
