//! Content generation domain module.
//!
//! # Module Structure
//!
//! - `model`: ideas and generation requests
//! - `service`: the generator trait implemented by the HTTP client

mod model;
mod service;

pub use model::{Idea, IdeasRequest, ScriptRequest};
pub use service::ContentGenerator;
