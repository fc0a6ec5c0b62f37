//! Configuration service implementation.
//!
//! Loads `ClientConfig` from `config.toml` and applies environment overrides.

use crate::paths::ContentAiPaths;
use contentai_core::config::ClientConfig;
use contentai_core::{ContentAiError, Result};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// Overrides the backend base URL.
pub const ENV_API_URL: &str = "CONTENTAI_API_URL";
/// Overrides the per-request timeout, in seconds.
pub const ENV_TIMEOUT_SECS: &str = "CONTENTAI_TIMEOUT_SECS";

/// Configuration service that loads and caches the client configuration.
///
/// A missing file yields defaults. A file that is present but malformed is
/// reported as a `Config` error rather than silently replaced.
#[derive(Debug, Clone)]
pub struct ConfigService {
    config_path: PathBuf,
    /// Cached configuration loaded from file.
    config: Arc<RwLock<Option<ClientConfig>>>,
}

impl ConfigService {
    pub fn new(base_path: Option<&Path>) -> Result<Self> {
        let config_path = ContentAiPaths::new(base_path).config_file()?;
        Ok(Self::with_path(config_path))
    }

    pub fn with_path(config_path: PathBuf) -> Self {
        Self {
            config_path,
            config: Arc::new(RwLock::new(None)),
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Gets the configuration, reading the process environment for overrides.
    pub fn load(&self) -> Result<ClientConfig> {
        self.load_with(|key| std::env::var(key).ok())
    }

    /// Gets the configuration, resolving overrides through `lookup`.
    ///
    /// The file is read once; overrides are applied on every call.
    pub fn load_with<F>(&self, lookup: F) -> Result<ClientConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = self.file_config()?;
        apply_overrides(&mut config, lookup)?;
        Ok(config)
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        if let Ok(mut write_lock) = self.config.write() {
            *write_lock = None;
        }
    }

    fn file_config(&self) -> Result<ClientConfig> {
        {
            let read_lock = self
                .config
                .read()
                .map_err(|_| ContentAiError::internal("config cache lock poisoned"))?;
            if let Some(cached) = read_lock.as_ref() {
                return Ok(cached.clone());
            }
        }

        let loaded = self.read_file()?;

        {
            let mut write_lock = self
                .config
                .write()
                .map_err(|_| ContentAiError::internal("config cache lock poisoned"))?;
            *write_lock = Some(loaded.clone());
        }

        Ok(loaded)
    }

    fn read_file(&self) -> Result<ClientConfig> {
        if !self.config_path.exists() {
            tracing::debug!(path = %self.config_path.display(), "no config file, using defaults");
            return Ok(ClientConfig::default());
        }

        let content = std::fs::read_to_string(&self.config_path)?;
        toml::from_str(&content).map_err(|e| {
            ContentAiError::config(format!(
                "Failed to parse {}: {}",
                self.config_path.display(),
                e
            ))
        })
    }
}

fn apply_overrides<F>(config: &mut ClientConfig, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup(ENV_API_URL).filter(|v| !v.trim().is_empty()) {
        config.api_base_url = url.trim().to_string();
    }

    if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
        config.request_timeout_secs = raw.trim().parse().map_err(|_| {
            ContentAiError::config(format!("{} must be a number of seconds, got '{}'", ENV_TIMEOUT_SECS, raw))
        })?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::new(Some(temp_dir.path())).unwrap();

        let config = service.load_with(no_env).unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_file_values_and_env_overrides() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::new(Some(temp_dir.path())).unwrap();
        std::fs::write(
            service.config_path(),
            "api_base_url = \"https://file.example\"\nhistory_capacity = 10\n",
        )
        .unwrap();

        let config = service.load_with(no_env).unwrap();
        assert_eq!(config.api_base_url, "https://file.example");
        assert_eq!(config.history_capacity, 10);

        let config = service
            .load_with(|key| match key {
                ENV_API_URL => Some("http://env.example:9000".to_string()),
                ENV_TIMEOUT_SECS => Some("5".to_string()),
                _ => None,
            })
            .unwrap();
        assert_eq!(config.api_base_url, "http://env.example:9000");
        assert_eq!(config.request_timeout_secs, 5);
        assert_eq!(config.history_capacity, 10);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::new(Some(temp_dir.path())).unwrap();
        std::fs::write(service.config_path(), "history_capacity = \"many\"").unwrap();

        assert!(matches!(service.load_with(no_env), Err(ContentAiError::Config(_))));
    }

    #[test]
    fn test_bad_timeout_override_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::new(Some(temp_dir.path())).unwrap();

        let result = service.load_with(|key| (key == ENV_TIMEOUT_SECS).then(|| "soon".to_string()));
        assert!(matches!(result, Err(ContentAiError::Config(_))));
    }

    #[test]
    fn test_cache_until_invalidated() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::new(Some(temp_dir.path())).unwrap();
        assert_eq!(service.load_with(no_env).unwrap().default_idea_count, 5);

        std::fs::write(service.config_path(), "default_idea_count = 8").unwrap();
        assert_eq!(service.load_with(no_env).unwrap().default_idea_count, 5);

        service.invalidate_cache();
        assert_eq!(service.load_with(no_env).unwrap().default_idea_count, 8);
    }
}
