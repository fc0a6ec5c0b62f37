//! Bounded generation history.

use std::sync::{Arc, Mutex};

use chrono::Utc;

use super::model::{HistoryEntry, HistoryKind, HistoryPayload};
use super::repository::HistoryRepository;
use crate::error::{ContentAiError, Result};

/// Number of entries retained when no capacity is configured, and the
/// upper bound for any configured capacity.
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

/// Newest-first ledger of past generations, capped at `capacity` entries.
///
/// Entries are never edited or removed individually. Once the ledger is
/// full, each append evicts the oldest entry.
///
/// Malformed persisted data reads as an empty ledger rather than an error;
/// history is display data and must not block the rest of the client.
pub struct HistoryLedger {
    repository: Arc<dyn HistoryRepository>,
    capacity: usize,
    /// Serializes read-modify-write cycles of `append`.
    write_lock: Mutex<()>,
}

impl HistoryLedger {
    /// Creates a ledger with the default capacity.
    pub fn new(repository: Arc<dyn HistoryRepository>) -> Self {
        Self::with_capacity(repository, DEFAULT_HISTORY_CAPACITY)
    }

    /// Creates a ledger retaining at most `capacity` entries, clamped to
    /// `1..=DEFAULT_HISTORY_CAPACITY`.
    pub fn with_capacity(repository: Arc<dyn HistoryRepository>, capacity: usize) -> Self {
        let clamped = capacity.clamp(1, DEFAULT_HISTORY_CAPACITY);
        if clamped != capacity {
            tracing::warn!(requested = capacity, capacity = clamped, "history capacity out of range");
        }
        Self {
            repository,
            capacity: clamped,
            write_lock: Mutex::new(()),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Records a new generation at the head of the ledger and persists it.
    ///
    /// # Returns
    ///
    /// The stored entry. Fails only if the ledger could not be written.
    pub fn append(&self, payload: HistoryPayload) -> Result<HistoryEntry> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| ContentAiError::internal("history write lock poisoned"))?;

        let mut entries = self.read_all();
        let now = Utc::now();
        let id = match entries.first() {
            Some(head) => now.timestamp_millis().max(head.id + 1),
            None => now.timestamp_millis(),
        };

        let entry = HistoryEntry {
            id,
            payload,
            timestamp: now,
        };
        entries.insert(0, entry.clone());

        let evicted = entries.len().saturating_sub(self.capacity);
        entries.truncate(self.capacity);
        self.repository.save_all(&entries)?;

        tracing::debug!(
            id = entry.id,
            kind = %entry.kind(),
            evicted,
            "history entry appended"
        );
        Ok(entry)
    }

    /// Returns every retained entry, newest first.
    ///
    /// Absent or malformed persisted data yields an empty list.
    pub fn read_all(&self) -> Vec<HistoryEntry> {
        match self.repository.load_all() {
            Ok(mut entries) => {
                entries.truncate(self.capacity);
                entries
            }
            Err(e) => {
                tracing::warn!("history unreadable, treating as empty: {}", e);
                Vec::new()
            }
        }
    }

    /// Returns entries of one kind (or all), newest first, up to `limit`.
    pub fn read_filtered(&self, kind: Option<HistoryKind>, limit: Option<usize>) -> Vec<HistoryEntry> {
        self.read_all()
            .into_iter()
            .filter(|entry| kind.is_none_or(|k| entry.kind() == k))
            .take(limit.unwrap_or(usize::MAX))
            .collect()
    }
}
