//! Token store implementations.
//!
//! `FileTokenStore` keeps the bearer token in `session.json` next to the
//! client config. `InMemoryTokenStore` backs tests and one-shot runs.

use crate::paths::ContentAiPaths;
use crate::storage::AtomicJsonFile;
use contentai_core::session::TokenStore;
use contentai_core::{ContentAiError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::RwLock;

/// On-disk shape of `session.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredSession {
    auth_token: String,
}

/// File-backed token store.
///
/// The token file is written atomically with owner-only permissions.
pub struct FileTokenStore {
    file: AtomicJsonFile<StoredSession>,
}

impl FileTokenStore {
    /// Creates a store at the default location (`<config_dir>/session.json`).
    pub fn new(base_path: Option<&Path>) -> Result<Self> {
        let path = ContentAiPaths::new(base_path).session_file()?;
        Ok(Self::with_path(path))
    }

    /// Creates a store backed by an explicit file.
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            file: AtomicJsonFile::new(path).private(),
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

impl TokenStore for FileTokenStore {
    fn load_token(&self) -> Result<Option<String>> {
        let stored = self.file.load()?;
        Ok(stored
            .map(|s| s.auth_token)
            .filter(|token| !token.trim().is_empty()))
    }

    fn save_token(&self, token: &str) -> Result<()> {
        self.file.save(&StoredSession {
            auth_token: token.to_string(),
        })?;
        tracing::debug!(path = %self.file.path().display(), "auth token persisted");
        Ok(())
    }

    fn clear_token(&self) -> Result<()> {
        self.file.remove()?;
        tracing::debug!(path = %self.file.path().display(), "auth token cleared");
        Ok(())
    }
}

/// Process-local token store.
#[derive(Debug, Default)]
pub struct InMemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl InMemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds `token`.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }

    /// Returns the held token without going through the trait.
    pub fn peek(&self) -> Option<String> {
        self.token.read().ok().and_then(|guard| guard.clone())
    }
}

impl TokenStore for InMemoryTokenStore {
    fn load_token(&self) -> Result<Option<String>> {
        let guard = self
            .token
            .read()
            .map_err(|_| ContentAiError::internal("token store lock poisoned"))?;
        Ok(guard.clone())
    }

    fn save_token(&self, token: &str) -> Result<()> {
        let mut guard = self
            .token
            .write()
            .map_err(|_| ContentAiError::internal("token store lock poisoned"))?;
        *guard = Some(token.to_string());
        Ok(())
    }

    fn clear_token(&self) -> Result<()> {
        let mut guard = self
            .token
            .write()
            .map_err(|_| ContentAiError::internal("token store lock poisoned"))?;
        *guard = None;
        Ok(())
    }
}
