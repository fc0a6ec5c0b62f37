//! History repository trait.

use super::model::HistoryEntry;
use crate::error::Result;

/// Persistence for the whole history ledger.
///
/// The ledger is small and always rewritten as a unit, so the repository
/// only loads and replaces the full ordered list (newest first).
pub trait HistoryRepository: Send + Sync {
    /// Loads all persisted entries.
    ///
    /// # Returns
    ///
    /// - `Ok(entries)`: Persisted entries, empty if nothing persisted
    /// - `Err(ContentAiError::Serialization)`: Persisted data is malformed
    /// - `Err(ContentAiError::Io)`: Storage could not be read
    fn load_all(&self) -> Result<Vec<HistoryEntry>>;

    /// Replaces the persisted entries.
    fn save_all(&self, entries: &[HistoryEntry]) -> Result<()>;
}
