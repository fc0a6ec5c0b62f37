//! Session domain module.
//!
//! # Module Structure
//!
//! - `model`: the client-held authentication state
//! - `credentials`: login/registration forms and their local validation
//! - `scope`: which response statuses invalidate the session
//! - `token_store`: persistence trait for the bearer token

mod credentials;
mod model;
mod scope;
mod token_store;

pub use credentials::{LoginCredentials, Registration};
pub use model::Session;
pub use scope::AuthScope;
pub use token_store::TokenStore;
