//! User domain module.
//!
//! # Module Structure
//!
//! - `model`: authenticated identity record as returned by the backend

mod model;

pub use model::{User, parse_timestamp};
