//! Unified path management for ContentAI client files.

use contentai_core::ContentAiError;
use std::path::{Path, PathBuf};

const APP_DIR_NAME: &str = "contentai";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for ContentAiError {
    fn from(e: PathError) -> Self {
        ContentAiError::config(e.to_string())
    }
}

/// Path resolution for everything the client persists.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/contentai/         # Config directory (platform specific)
/// ├── config.toml              # Client configuration
/// ├── session.json             # Persisted bearer token
/// └── history.json             # Generation history ledger
/// ```
///
/// A base path replaces the platform config directory, which keeps tests
/// away from the real user profile.
#[derive(Debug, Clone, Default)]
pub struct ContentAiPaths {
    base: Option<PathBuf>,
}

impl ContentAiPaths {
    pub fn new(base: Option<&Path>) -> Self {
        Self {
            base: base.map(Path::to_path_buf),
        }
    }

    /// Returns the client configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: The base path if set, else e.g. `~/.config/contentai/`
    /// - `Err(PathError::ConfigDirNotFound)`: Could not determine directory
    pub fn config_dir(&self) -> Result<PathBuf, PathError> {
        if let Some(base) = &self.base {
            return Ok(base.clone());
        }
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .ok_or(PathError::ConfigDirNotFound)
    }

    pub fn config_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("config.toml"))
    }

    /// Returns the path of the persisted token.
    ///
    /// # Security Note
    ///
    /// The file is written with 600 permissions on Unix.
    pub fn session_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("session.json"))
    }

    pub fn history_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("history.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_dir() {
        // Platforms without a config dir are skipped.
        if let Ok(config_dir) = ContentAiPaths::default().config_dir() {
            assert!(config_dir.ends_with("contentai"));
        }
    }

    #[test]
    fn test_files_live_under_base() {
        let paths = ContentAiPaths::new(Some(Path::new("/tmp/contentai-test")));
        let base = paths.config_dir().unwrap();

        assert_eq!(base, PathBuf::from("/tmp/contentai-test"));
        assert!(paths.config_file().unwrap().starts_with(&base));
        assert!(paths.session_file().unwrap().ends_with("session.json"));
        assert!(paths.history_file().unwrap().ends_with("history.json"));
    }
}
