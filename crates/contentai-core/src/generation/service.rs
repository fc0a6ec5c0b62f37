//! Content generator trait.

use super::model::{Idea, IdeasRequest, ScriptRequest};
use crate::error::Result;

/// Source of generated content.
///
/// The HTTP client implements this against the backend; use cases depend
/// only on the trait.
#[async_trait::async_trait]
pub trait ContentGenerator: Send + Sync {
    /// Generates `request.count` ideas for a niche and audience.
    ///
    /// # Errors
    ///
    /// - `Validation`: empty niche/audience or zero count (no request made)
    /// - `AuthRequired`: anonymous usage limit reached
    /// - `SessionExpired`: the credential was rejected
    /// - `Backend` / `Network` / `Decode`: the call failed
    async fn generate_ideas(&self, request: &IdeasRequest) -> Result<Vec<Idea>>;

    /// Generates a video script for an idea.
    async fn generate_script(&self, request: &ScriptRequest) -> Result<String>;
}
