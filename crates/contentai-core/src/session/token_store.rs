//! Bearer token persistence trait.

use crate::error::Result;

/// Persistent storage for the single bearer token of this client.
///
/// Storage is treated as non-suspending, so the trait is synchronous.
/// Implementations must make `clear_token` idempotent: clearing an absent
/// token is not an error.
pub trait TokenStore: Send + Sync {
    /// Reads the persisted token.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(token))`: A token was persisted
    /// - `Ok(None)`: Nothing persisted
    /// - `Err(ContentAiError)`: Storage could not be read
    fn load_token(&self) -> Result<Option<String>>;

    /// Persists `token`, replacing any previous one.
    fn save_token(&self, token: &str) -> Result<()>;

    /// Removes the persisted token.
    fn clear_token(&self) -> Result<()>;
}
