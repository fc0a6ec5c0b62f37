//! HTTP boundary of the ContentAI client.
//!
//! `ApiClient` moves bytes; `SessionManager` owns the credential and
//! decides when a response invalidates it; `GenerationApi` and `AdminApi`
//! are typed endpoint wrappers on top of the manager.

pub mod admin_api;
pub mod client;
pub mod dto;
pub mod generation_api;
pub mod request;
pub mod response;
pub mod session_manager;

pub use admin_api::AdminApi;
pub use client::ApiClient;
pub use generation_api::GenerationApi;
pub use request::ApiRequest;
pub use response::ApiResponse;
pub use session_manager::SessionManager;
