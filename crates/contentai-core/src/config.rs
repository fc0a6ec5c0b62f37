//! Client configuration model.

use serde::{Deserialize, Serialize};

use crate::history::DEFAULT_HISTORY_CAPACITY;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_IDEA_COUNT: u32 = 5;

/// Root of `config.toml`.
///
/// Every field is optional in the file; missing ones take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the backend, without trailing slash.
    pub api_base_url: String,
    /// Per-request timeout.
    pub request_timeout_secs: u64,
    /// Maximum number of history entries retained. Values above 50 are
    /// clamped to 50.
    pub history_capacity: usize,
    /// Idea count used when the caller does not pick one.
    pub default_idea_count: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            default_idea_count: DEFAULT_IDEA_COUNT,
        }
    }
}

impl ClientConfig {
    /// Base URL with any trailing slashes removed.
    pub fn base_url(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }
}
