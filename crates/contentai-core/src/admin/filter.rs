//! Client-side user list filtering.

use strum::{Display, EnumString};

use crate::user::User;

/// Which plan to keep when filtering users.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum PlanFilter {
    #[default]
    All,
    Premium,
    Free,
}

/// Filter applied to the admin user list before display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFilter {
    /// Case-insensitive substring matched against email and name.
    pub query: Option<String>,
    pub plan: PlanFilter,
    pub admins_only: bool,
}

impl UserFilter {
    pub fn matches(&self, user: &User) -> bool {
        let plan_ok = match self.plan {
            PlanFilter::All => true,
            PlanFilter::Premium => user.is_premium,
            PlanFilter::Free => !user.is_premium,
        };
        if !plan_ok || (self.admins_only && !user.is_admin) {
            return false;
        }

        match self.query.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(query) => {
                let needle = query.to_lowercase();
                user.email.to_lowercase().contains(&needle)
                    || user
                        .name
                        .as_deref()
                        .is_some_and(|name| name.to_lowercase().contains(&needle))
            }
        }
    }

    /// Keeps the matching users, preserving order.
    pub fn apply(&self, users: Vec<User>) -> Vec<User> {
        users.into_iter().filter(|user| self.matches(user)).collect()
    }
}
