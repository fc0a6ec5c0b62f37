//! Explicit command objects and their dispatch.
//!
//! Front ends build a `Command`, hand it to the `Dispatcher` and render the
//! `CommandOutcome`. Nothing here knows about terminals or widgets.

use std::sync::Arc;

use contentai_core::admin::{DashboardStats, UserFilter, UserUpdate};
use contentai_core::generation::{Idea, IdeasRequest, ScriptRequest};
use contentai_core::history::{HistoryEntry, HistoryKind, HistoryLedger};
use contentai_core::session::{LoginCredentials, Registration};
use contentai_core::user::User;
use contentai_core::{ContentAiError, Result};
use contentai_interaction::{AdminApi, SessionManager};

use crate::generation_service::{GenerationOutcome, GenerationService};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Login {
        email: String,
        password: String,
    },
    Register {
        email: String,
        password: String,
        name: String,
        confirm_password: Option<String>,
    },
    Logout,
    WhoAmI,
    GenerateIdeas {
        niche: String,
        audience: String,
        /// Falls back to the configured default.
        count: Option<u32>,
    },
    GenerateScript {
        idea: String,
    },
    History {
        kind: Option<HistoryKind>,
        limit: Option<usize>,
    },
    AdminUsers {
        filter: UserFilter,
    },
    AdminDashboard,
    AdminSetPremium {
        user_id: i64,
        premium: bool,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    LoggedIn(User),
    Registered(User),
    LoggedOut,
    CurrentUser(Option<User>),
    Ideas(GenerationOutcome<Vec<Idea>>),
    Script(GenerationOutcome<String>),
    History(Vec<HistoryEntry>),
    Users(Vec<User>),
    Dashboard(DashboardStats),
    UserUpdated { user_id: i64, user: Option<User> },
}

pub struct Dispatcher {
    session: Arc<SessionManager>,
    generation: GenerationService,
    admin: AdminApi,
    ledger: Arc<HistoryLedger>,
    default_idea_count: u32,
}

impl Dispatcher {
    pub fn new(
        session: Arc<SessionManager>,
        generation: GenerationService,
        admin: AdminApi,
        ledger: Arc<HistoryLedger>,
        default_idea_count: u32,
    ) -> Self {
        Self {
            session,
            generation,
            admin,
            ledger,
            default_idea_count,
        }
    }

    pub fn session(&self) -> &Arc<SessionManager> {
        &self.session
    }

    pub async fn dispatch(&self, command: Command) -> Result<CommandOutcome> {
        match command {
            Command::Login { email, password } => {
                let user = self
                    .session
                    .login(&LoginCredentials::new(email, password))
                    .await?;
                Ok(CommandOutcome::LoggedIn(user))
            }
            Command::Register {
                email,
                password,
                name,
                confirm_password,
            } => {
                let mut registration = Registration::new(email, password, name);
                if let Some(confirm) = confirm_password {
                    registration = registration.with_confirmation(confirm);
                }
                let user = self.session.register(&registration).await?;
                Ok(CommandOutcome::Registered(user))
            }
            Command::Logout => {
                self.session.logout();
                Ok(CommandOutcome::LoggedOut)
            }
            Command::WhoAmI => Ok(CommandOutcome::CurrentUser(self.session.current_user())),
            Command::GenerateIdeas {
                niche,
                audience,
                count,
            } => {
                let request =
                    IdeasRequest::new(niche, audience, count.unwrap_or(self.default_idea_count));
                let outcome = self.generation.generate_ideas(request).await?;
                Ok(CommandOutcome::Ideas(outcome))
            }
            Command::GenerateScript { idea } => {
                let outcome = self.generation.generate_script(ScriptRequest::new(idea)).await?;
                Ok(CommandOutcome::Script(outcome))
            }
            Command::History { kind, limit } => {
                Ok(CommandOutcome::History(self.ledger.read_filtered(kind, limit)))
            }
            Command::AdminUsers { filter } => {
                self.require_session()?;
                let users = self.admin.list_users().await?;
                Ok(CommandOutcome::Users(filter.apply(users)))
            }
            Command::AdminDashboard => {
                self.require_session()?;
                Ok(CommandOutcome::Dashboard(self.admin.dashboard().await?))
            }
            Command::AdminSetPremium { user_id, premium } => {
                self.require_session()?;
                let user = self
                    .admin
                    .update_user(user_id, &UserUpdate::premium(premium))
                    .await?;
                Ok(CommandOutcome::UserUpdated { user_id, user })
            }
        }
    }

    /// Admin calls without a token would only earn a 401.
    fn require_session(&self) -> Result<()> {
        if self.session.token().is_none() {
            return Err(ContentAiError::auth_required("Admin login required"));
        }
        Ok(())
    }
}
