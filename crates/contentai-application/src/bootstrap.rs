//! Wiring of the file-backed client.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use contentai_core::config::ClientConfig;
use contentai_core::history::{HistoryLedger, HistoryRepository};
use contentai_core::session::TokenStore;
use contentai_infrastructure::{ConfigService, FileHistoryRepository, FileTokenStore};
use contentai_interaction::{AdminApi, ApiClient, GenerationApi, SessionManager};

use crate::dispatcher::Dispatcher;
use crate::generation_service::GenerationService;

/// Builds a dispatcher over the on-disk token, history and config.
///
/// `base_path` replaces the platform config directory. `api_url` wins over
/// both the config file and `CONTENTAI_API_URL`.
///
/// The session is not restored here; call `initialize()` on the session
/// manager once before dispatching.
pub fn bootstrap(base_path: Option<&Path>, api_url: Option<&str>) -> Result<(Dispatcher, ClientConfig)> {
    let config_service = ConfigService::new(base_path).context("Failed to resolve config path")?;
    let mut config = config_service.load().with_context(|| {
        format!(
            "Failed to load configuration from {}",
            config_service.config_path().display()
        )
    })?;
    if let Some(url) = api_url {
        config.api_base_url = url.to_string();
    }

    let token_store = FileTokenStore::new(base_path).context("Failed to open token store")?;
    let history = FileHistoryRepository::new(base_path).context("Failed to open history")?;

    tracing::debug!(
        api = %config.base_url(),
        history = %history.path().display(),
        "client wired"
    );

    let dispatcher = assemble(&config, Arc::new(token_store), Arc::new(history));
    Ok((dispatcher, config))
}

/// Builds a dispatcher from already constructed stores.
pub fn assemble(
    config: &ClientConfig,
    token_store: Arc<dyn TokenStore>,
    history: Arc<dyn HistoryRepository>,
) -> Dispatcher {
    let session = Arc::new(SessionManager::new(ApiClient::from_config(config), token_store));
    let ledger = Arc::new(HistoryLedger::with_capacity(history, config.history_capacity));
    let generation = GenerationService::new(
        Arc::new(GenerationApi::new(session.clone())),
        ledger.clone(),
    );

    Dispatcher::new(
        session.clone(),
        generation,
        AdminApi::new(session),
        ledger,
        config.default_idea_count,
    )
}
