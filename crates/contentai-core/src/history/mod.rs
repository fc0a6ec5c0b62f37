//! Generation history domain module.
//!
//! # Module Structure
//!
//! - `model`: history entries and their payloads
//! - `repository`: persistence trait for the whole ledger
//! - `ledger`: bounded, newest-first ledger over a repository

mod ledger;
mod model;
mod repository;

pub use ledger::{DEFAULT_HISTORY_CAPACITY, HistoryLedger};
pub use model::{HistoryEntry, HistoryKind, HistoryPayload};
pub use repository::HistoryRepository;
