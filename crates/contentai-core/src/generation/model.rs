//! Generation domain models.

use serde::{Deserialize, Serialize};

use crate::error::{ContentAiError, Result};

/// A single generated content idea.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Idea {
    pub title: String,
    pub description: String,
    /// Space separated hashtags, e.g. `#gatos #viral`.
    #[serde(default)]
    pub hashtags: String,
}

/// Request body for the ideas endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdeasRequest {
    pub niche: String,
    pub audience: String,
    pub count: u32,
}

impl IdeasRequest {
    pub fn new(niche: impl Into<String>, audience: impl Into<String>, count: u32) -> Self {
        Self {
            niche: niche.into().trim().to_string(),
            audience: audience.into().trim().to_string(),
            count,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.niche.is_empty() || self.audience.is_empty() {
            return Err(ContentAiError::validation("Niche and audience are required"));
        }
        if self.count == 0 {
            return Err(ContentAiError::validation("Idea count must be at least 1"));
        }
        Ok(())
    }
}

/// Request body for the script endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScriptRequest {
    pub idea: String,
}

impl ScriptRequest {
    pub fn new(idea: impl Into<String>) -> Self {
        Self {
            idea: idea.into().trim().to_string(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.idea.is_empty() {
            return Err(ContentAiError::validation("An idea is required"));
        }
        Ok(())
    }
}
