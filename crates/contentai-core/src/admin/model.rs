//! Admin dashboard models.

use serde::{Deserialize, Serialize};

/// Aggregate statistics shown on the admin dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub users: UserCounts,
    pub statistics: GenerationCounts,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCounts {
    pub total: u64,
    #[serde(default)]
    pub premium: u64,
}

impl UserCounts {
    pub fn free(&self) -> u64 {
        self.total.saturating_sub(self.premium)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationCounts {
    #[serde(default)]
    pub total_ideas_generated: u64,
    #[serde(default)]
    pub total_scripts_generated: u64,
    #[serde(default)]
    pub total_feedbacks: u64,
}

/// Partial update of a user record. Unset fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_premium: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_admin: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl UserUpdate {
    pub fn premium(is_premium: bool) -> Self {
        Self {
            is_premium: Some(is_premium),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.is_premium.is_none() && self.is_admin.is_none() && self.name.is_none()
    }
}
