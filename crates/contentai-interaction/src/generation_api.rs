//! HTTP implementation of the content generator.

use std::sync::Arc;

use async_trait::async_trait;
use contentai_core::Result;
use contentai_core::generation::{ContentGenerator, Idea, IdeasRequest, ScriptRequest};

use crate::dto::{IdeasResponse, ScriptResponse};
use crate::request::ApiRequest;
use crate::session_manager::SessionManager;

pub const IDEAS_PATH: &str = "/api/generate-ideas";
pub const SCRIPT_PATH: &str = "/api/generate-script";

/// Calls the generation endpoints through the session manager, so the
/// bearer token is attached only when a session exists.
#[derive(Clone)]
pub struct GenerationApi {
    session: Arc<SessionManager>,
}

impl GenerationApi {
    pub fn new(session: Arc<SessionManager>) -> Self {
        Self { session }
    }
}

#[async_trait]
impl ContentGenerator for GenerationApi {
    async fn generate_ideas(&self, request: &IdeasRequest) -> Result<Vec<Idea>> {
        request.validate()?;

        let response = self
            .session
            .authenticated_request(ApiRequest::post(IDEAS_PATH, request)?)
            .await?;
        let ideas: IdeasResponse = response.into_result()?;

        tracing::debug!(count = ideas.ideas.len(), niche = %request.niche, "ideas generated");
        Ok(ideas.ideas)
    }

    async fn generate_script(&self, request: &ScriptRequest) -> Result<String> {
        request.validate()?;

        let response = self
            .session
            .authenticated_request(ApiRequest::post(SCRIPT_PATH, request)?)
            .await?;
        let script: ScriptResponse = response.into_result()?;
        Ok(script.script)
    }
}
