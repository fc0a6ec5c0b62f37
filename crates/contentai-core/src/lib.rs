//! Domain layer of the ContentAI client.
//!
//! Holds the session and history models, the storage traits the
//! infrastructure crate implements, and the bounded history ledger.

pub mod admin;
pub mod config;
pub mod error;
pub mod generation;
pub mod history;
pub mod session;
pub mod user;

pub use error::{ContentAiError, Result};
