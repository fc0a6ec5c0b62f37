//! Authorization scope of a request.

/// Decides which response statuses mean "this credential is no good".
///
/// Regular endpoints only treat 401 that way. Admin endpoints also treat
/// 403, since a non-admin token there is as useless as an expired one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthScope {
    #[default]
    Standard,
    Admin,
}

impl AuthScope {
    /// Returns true if `status` must clear the session.
    pub fn is_authorization_failure(self, status: u16) -> bool {
        match self {
            AuthScope::Standard => status == 401,
            AuthScope::Admin => status == 401 || status == 403,
        }
    }
}
