pub mod config_service;
pub mod history_repository;
pub mod paths;
pub mod storage;
pub mod token_store;

pub use crate::config_service::ConfigService;
pub use crate::history_repository::{FileHistoryRepository, InMemoryHistoryRepository};
pub use crate::paths::ContentAiPaths;
pub use crate::token_store::{FileTokenStore, InMemoryTokenStore};
