//! History repository implementations.

use crate::paths::ContentAiPaths;
use crate::storage::AtomicJsonFile;
use contentai_core::history::{HistoryEntry, HistoryRepository};
use contentai_core::{ContentAiError, Result};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// JSON file backed history (`<config_dir>/history.json`).
///
/// The file holds the ordered entry list, newest first.
pub struct FileHistoryRepository {
    file: AtomicJsonFile<Vec<HistoryEntry>>,
}

impl FileHistoryRepository {
    pub fn new(base_path: Option<&Path>) -> Result<Self> {
        let path = ContentAiPaths::new(base_path).history_file()?;
        Ok(Self::with_path(path))
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self {
            file: AtomicJsonFile::new(path),
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

impl HistoryRepository for FileHistoryRepository {
    fn load_all(&self) -> Result<Vec<HistoryEntry>> {
        Ok(self.file.load()?.unwrap_or_default())
    }

    fn save_all(&self, entries: &[HistoryEntry]) -> Result<()> {
        self.file.save(&entries.to_vec())?;
        Ok(())
    }
}

/// In-memory history. `corrupt()` simulates unreadable persisted data
/// until the next save.
#[derive(Debug, Default)]
pub struct InMemoryHistoryRepository {
    state: Mutex<MemoryState>,
}

#[derive(Debug, Default)]
struct MemoryState {
    entries: Vec<HistoryEntry>,
    corrupt: bool,
}

impl InMemoryHistoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn corrupt(&self) {
        if let Ok(mut state) = self.state.lock() {
            state.corrupt = true;
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, MemoryState>> {
        self.state
            .lock()
            .map_err(|_| ContentAiError::internal("history repository lock poisoned"))
    }
}

impl HistoryRepository for InMemoryHistoryRepository {
    fn load_all(&self) -> Result<Vec<HistoryEntry>> {
        let state = self.lock()?;
        if state.corrupt {
            return Err(ContentAiError::Serialization {
                format: "JSON".to_string(),
                message: "stored history is not a valid entry list".to_string(),
            });
        }
        Ok(state.entries.clone())
    }

    fn save_all(&self, entries: &[HistoryEntry]) -> Result<()> {
        let mut state = self.lock()?;
        state.entries = entries.to_vec();
        state.corrupt = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_corruption_clears_on_save() {
        let repo = InMemoryHistoryRepository::new();
        repo.corrupt();
        assert!(repo.load_all().unwrap_err().is_serialization());

        repo.save_all(&[]).unwrap();
        assert!(repo.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_missing_file_is_empty() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let repo = FileHistoryRepository::new(Some(temp_dir.path())).unwrap();
        assert!(repo.load_all().unwrap().is_empty());
    }
}
