//! Admin endpoints.
//!
//! Every call is issued with `AuthScope::Admin`, so a 401 or a 403 clears
//! the session.

use std::sync::Arc;

use contentai_core::admin::{DashboardStats, UserUpdate};
use contentai_core::session::AuthScope;
use contentai_core::user::User;
use contentai_core::{ContentAiError, Result};

use crate::dto::{UpdateUserResponse, UsersResponse};
use crate::request::ApiRequest;
use crate::session_manager::SessionManager;

pub const USERS_PATH: &str = "/admin/users";
pub const DASHBOARD_PATH: &str = "/api/admin/dashboard";

#[derive(Clone)]
pub struct AdminApi {
    session: Arc<SessionManager>,
}

impl AdminApi {
    pub fn new(session: Arc<SessionManager>) -> Self {
        Self { session }
    }

    pub async fn list_users(&self) -> Result<Vec<User>> {
        let response = self
            .session
            .authenticated_request(ApiRequest::get(USERS_PATH).with_scope(AuthScope::Admin))
            .await?;
        let users: UsersResponse = response.into_result()?;
        Ok(users.users)
    }

    pub async fn dashboard(&self) -> Result<DashboardStats> {
        let response = self
            .session
            .authenticated_request(ApiRequest::get(DASHBOARD_PATH).with_scope(AuthScope::Admin))
            .await?;
        response.into_result()
    }

    /// Applies `update` to user `user_id`.
    ///
    /// Returns the updated record when the backend echoes one.
    pub async fn update_user(&self, user_id: i64, update: &UserUpdate) -> Result<Option<User>> {
        if update.is_empty() {
            return Err(ContentAiError::validation("Nothing to update"));
        }

        let request = ApiRequest::put(format!("/admin/user/{}", user_id), update)?
            .with_scope(AuthScope::Admin);
        let ack: UpdateUserResponse = self
            .session
            .authenticated_request(request)
            .await?
            .into_result()?;

        tracing::info!(user_id, "user updated");
        Ok(ack.user)
    }

    /// True iff a token is held, the identity check on `/api/auth/me`
    /// succeeds, and the user list answers 200.
    ///
    /// The identity check refreshes the current user. A 401 there, or a
    /// 401/403 on the user list, clears the session.
    pub async fn verify_access(&self) -> bool {
        if self.session.token().is_none() {
            return false;
        }

        if let Err(e) = self.session.refresh_user().await {
            tracing::debug!("admin identity check failed: {}", e);
            return false;
        }

        match self
            .session
            .authenticated_request(ApiRequest::get(USERS_PATH).with_scope(AuthScope::Admin))
            .await
        {
            Ok(response) => response.status == 200,
            Err(e) => {
                tracing::debug!("admin access check failed: {}", e);
                false
            }
        }
    }
}
