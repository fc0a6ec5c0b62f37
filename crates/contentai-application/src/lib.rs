//! Application layer for ContentAI.
//!
//! Coordinates the session manager, the generator and the history ledger
//! into the use cases a front end drives.

pub mod bootstrap;
pub mod dispatcher;
pub mod fallback;
pub mod generation_service;

pub use bootstrap::{assemble, bootstrap};
pub use dispatcher::{Command, CommandOutcome, Dispatcher};
pub use generation_service::{GenerationOutcome, GenerationService};
