//! Generation use case: call the generator, record history, degrade gracefully.

use std::sync::Arc;

use contentai_core::generation::{ContentGenerator, Idea, IdeasRequest, ScriptRequest};
use contentai_core::history::{HistoryLedger, HistoryPayload};
use contentai_core::{ContentAiError, Result};

use crate::fallback::{fallback_ideas, fallback_script};

/// What a generation attempt produced.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationOutcome<T> {
    /// Real content from the backend, already recorded in history.
    Generated(T),
    /// The anonymous quota is exhausted; the caller should prompt for login.
    LoginRequired { message: String },
    /// Locally generated placeholder content. Never recorded in history.
    Fallback { content: T, reason: ContentAiError },
}

impl<T> GenerationOutcome<T> {
    pub fn content(&self) -> Option<&T> {
        match self {
            GenerationOutcome::Generated(content) | GenerationOutcome::Fallback { content, .. } => {
                Some(content)
            }
            GenerationOutcome::LoginRequired { .. } => None,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, GenerationOutcome::Fallback { .. })
    }
}

pub struct GenerationService {
    generator: Arc<dyn ContentGenerator>,
    ledger: Arc<HistoryLedger>,
}

impl GenerationService {
    pub fn new(generator: Arc<dyn ContentGenerator>, ledger: Arc<HistoryLedger>) -> Self {
        Self { generator, ledger }
    }

    /// Generates ideas and records them.
    ///
    /// Only validation errors are returned as `Err`.
    pub async fn generate_ideas(&self, request: IdeasRequest) -> Result<GenerationOutcome<Vec<Idea>>> {
        request.validate()?;

        match self.generator.generate_ideas(&request).await {
            Ok(ideas) => {
                self.record(HistoryPayload::Ideas {
                    niche: request.niche.clone(),
                    audience: request.audience.clone(),
                    ideas: ideas.clone(),
                });
                Ok(GenerationOutcome::Generated(ideas))
            }
            Err(e) => Self::degrade(e, || fallback_ideas(&request)),
        }
    }

    /// Generates a script and records it.
    pub async fn generate_script(&self, request: ScriptRequest) -> Result<GenerationOutcome<String>> {
        request.validate()?;

        match self.generator.generate_script(&request).await {
            Ok(script) => {
                self.record(HistoryPayload::Script {
                    idea: request.idea.clone(),
                    script: script.clone(),
                });
                Ok(GenerationOutcome::Generated(script))
            }
            Err(e) => Self::degrade(e, || fallback_script(&request.idea)),
        }
    }

    fn record(&self, payload: HistoryPayload) {
        // content is still returned when the ledger can't be written
        if let Err(e) = self.ledger.append(payload) {
            tracing::warn!("failed to record history entry: {}", e);
        }
    }

    fn degrade<T>(error: ContentAiError, placeholder: impl FnOnce() -> T) -> Result<GenerationOutcome<T>> {
        match error {
            e if e.is_validation() => Err(e),
            ContentAiError::AuthRequired { message } => {
                tracing::info!("anonymous limit reached, login required");
                Ok(GenerationOutcome::LoginRequired { message })
            }
            reason => {
                tracing::warn!("generation failed, using placeholder content: {}", reason);
                Ok(GenerationOutcome::Fallback {
                    content: placeholder(),
                    reason,
                })
            }
        }
    }
}
