//! Session manager: token lifecycle and authenticated dispatch.

use std::sync::Arc;

use contentai_core::session::{LoginCredentials, Registration, Session, TokenStore};
use contentai_core::user::User;
use contentai_core::{ContentAiError, Result};
use tokio::sync::watch;

use crate::client::ApiClient;
use crate::dto::{AuthResponse, MeResponse};
use crate::request::ApiRequest;
use crate::response::ApiResponse;

pub const LOGIN_PATH: &str = "/api/auth/login";
pub const REGISTER_PATH: &str = "/api/auth/register";
pub const ME_PATH: &str = "/api/auth/me";

/// Single authority for "is the user authenticated".
///
/// State lives in a `watch` channel so every transition is one atomic
/// replacement (token and user change together) and observers can
/// `subscribe()` to changes. The persisted token is written before the
/// in-memory state changes on login, and cleared before it on logout.
///
/// # Example
///
/// ```ignore
/// let manager = SessionManager::new(client, Arc::new(InMemoryTokenStore::new()));
/// manager.initialize().await;
/// let user = manager.login(&LoginCredentials::new("a@b.com", "pw")).await?;
/// ```
pub struct SessionManager {
    client: ApiClient,
    token_store: Arc<dyn TokenStore>,
    state: watch::Sender<Session>,
}

impl SessionManager {
    pub fn new(client: ApiClient, token_store: Arc<dyn TokenStore>) -> Self {
        let (state, _) = watch::channel(Session::Anonymous);
        Self {
            client,
            token_store,
            state,
        }
    }

    /// Snapshot of the current session.
    pub fn session(&self) -> Session {
        self.state.borrow().clone()
    }

    pub fn token(&self) -> Option<String> {
        self.state.borrow().token().map(str::to_string)
    }

    pub fn current_user(&self) -> Option<User> {
        self.state.borrow().current_user().cloned()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated()
    }

    /// Receives every session transition.
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.state.subscribe()
    }

    /// Restores the persisted session, if any, and validates it.
    ///
    /// Any failure to validate (rejected status, transport error, malformed
    /// body) clears the session and the persisted token.
    pub async fn initialize(&self) -> Session {
        let token = match self.token_store.load_token() {
            Ok(Some(token)) => token,
            Ok(None) => {
                tracing::debug!("no persisted session");
                return self.session();
            }
            Err(e) => {
                tracing::warn!("persisted session unreadable: {}", e);
                self.logout();
                return self.session();
            }
        };

        self.state.send_replace(Session::Restored {
            token: token.clone(),
        });

        let validated = self
            .client
            .send(&ApiRequest::get(ME_PATH), Some(&token))
            .await
            .and_then(|response| response.into_result::<MeResponse>());

        match validated {
            Ok(me) => {
                tracing::info!(user_id = me.user.id, "persisted session restored");
                self.replace_user(&token, me.user);
            }
            Err(e) => {
                tracing::warn!("persisted session rejected: {}", e);
                self.clear_if_current(&token);
            }
        }

        self.session()
    }

    /// Logs in and establishes the session.
    ///
    /// On failure the session is left untouched and the backend message is
    /// returned.
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<User> {
        credentials.validate()?;

        let request = ApiRequest::post(LOGIN_PATH, credentials)?;
        let auth: AuthResponse = self.client.send(&request, None).await?.into_result()?;

        tracing::info!(user_id = auth.user.id, "logged in");
        Ok(self.establish(auth))
    }

    /// Registers a new account and establishes the session.
    ///
    /// A mismatched confirmation fails with `PasswordMismatch` before any
    /// request is made.
    pub async fn register(&self, registration: &Registration) -> Result<User> {
        registration.validate()?;

        let request = ApiRequest::post(REGISTER_PATH, registration)?;
        let auth: AuthResponse = self.client.send(&request, None).await?.into_result()?;

        tracing::info!(user_id = auth.user.id, "registered");
        Ok(self.establish(auth))
    }

    /// Clears the session and the persisted token.
    ///
    /// Always succeeds; clearing an anonymous session changes nothing and
    /// does not notify subscribers.
    pub fn logout(&self) {
        let cleared = self.state.send_if_modified(|session| {
            self.clear_persisted_token();
            if session.is_anonymous() {
                false
            } else {
                *session = Session::Anonymous;
                true
            }
        });

        if cleared {
            tracing::info!("session cleared");
        }
    }

    /// Sends `request` with the bearer token when one is held.
    ///
    /// If the status is an authorization failure for the request's scope,
    /// the session is cleared before returning `SessionExpired`. Every other
    /// status is returned as is and leaves the session alone, as do
    /// transport errors.
    pub async fn authenticated_request(&self, request: ApiRequest) -> Result<ApiResponse> {
        let token = self.token();
        let response = self.client.send(&request, token.as_deref()).await?;

        if request.scope.is_authorization_failure(response.status) {
            tracing::warn!(
                status = response.status,
                path = %request.path,
                "credential rejected, forcing logout"
            );
            self.logout();
            return Err(ContentAiError::SessionExpired {
                status: response.status,
            });
        }

        Ok(response)
    }

    /// Re-reads the current user from the backend and updates the session.
    pub async fn refresh_user(&self) -> Result<User> {
        let token = self
            .token()
            .ok_or_else(|| ContentAiError::auth_required("Not logged in"))?;

        let me: MeResponse = self
            .authenticated_request(ApiRequest::get(ME_PATH))
            .await?
            .into_result()?;

        self.replace_user(&token, me.user.clone());
        Ok(me.user)
    }

    // Token store writes happen while the state is held, so a persisted
    // token and the in-memory session are always changed together.
    fn establish(&self, auth: AuthResponse) -> User {
        let user = auth.user.clone();
        self.state.send_modify(|session| {
            if let Err(e) = self.token_store.save_token(&auth.access_token) {
                tracing::warn!("failed to persist token, session will not survive restart: {}", e);
            }
            *session = Session::Authenticated {
                token: auth.access_token,
                user: auth.user,
            };
        });
        user
    }

    /// Clears the session only if it still holds `token`.
    ///
    /// A rejection of a token that was replaced while its request was in
    /// flight (a login finishing during `initialize`) leaves the newer
    /// session and its persisted token alone.
    fn clear_if_current(&self, token: &str) {
        let cleared = self.state.send_if_modified(|session| {
            if session.token() != Some(token) {
                return false;
            }
            self.clear_persisted_token();
            *session = Session::Anonymous;
            true
        });

        if cleared {
            tracing::info!("session cleared");
        } else {
            tracing::debug!("stale session rejection ignored");
        }
    }

    fn clear_persisted_token(&self) {
        if let Err(e) = self.token_store.clear_token() {
            tracing::warn!("failed to clear persisted token: {}", e);
        }
    }

    /// Attaches `user` only if the session still holds `token`.
    fn replace_user(&self, token: &str, user: User) {
        self.state.send_if_modified(|session| {
            if session.token() != Some(token) {
                return false;
            }
            *session = Session::Authenticated {
                token: token.to_string(),
                user,
            };
            true
        });
    }
}
