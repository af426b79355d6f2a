use async_trait::async_trait;
use auth::TokenPair;

use crate::identity::errors::AuthError;
use crate::identity::models::Credentials;
use crate::identity::models::Handle;
use crate::identity::models::Identity;
use crate::identity::models::RegisterCommand;

/// Port for the authentication boundary operations.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new identity and hand back its first token pair.
    ///
    /// # Errors
    /// * `HandleTaken` - Handle is already registered
    /// * `Password` / `Token` / `Directory` - Infrastructure failure
    async fn register(&self, command: RegisterCommand) -> Result<TokenPair, AuthError>;

    /// Verify credentials and issue a token pair.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown handle or wrong password; the two are
    ///   indistinguishable to the caller
    async fn login(&self, credentials: Credentials) -> Result<TokenPair, AuthError>;

    /// Exchange a valid refresh token for a fresh pair.
    ///
    /// # Errors
    /// * `Token` - Presented token is not a live refresh token
    /// * `IdentityNotFound` - Subject no longer exists in the directory
    async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, AuthError>;

    /// Resolve a bearer access token to a live identity.
    ///
    /// Re-validates and re-resolves on every call; nothing is cached between
    /// requests.
    ///
    /// # Errors
    /// * `Token` - Presented token is not a live access token
    /// * `IdentityNotFound` - Subject no longer exists in the directory
    async fn authenticate(&self, bearer_token: &str) -> Result<Identity, AuthError>;
}

/// User directory consumed by the authentication core.
///
/// An external collaborator in production; this crate ships an in-memory
/// implementation for local runs and tests. Lookups may suspend (network or
/// database round trip); the guard awaits them directly so the directory's
/// own timeout and cancellation semantics apply.
#[async_trait]
pub trait UserDirectory: Send + Sync + 'static {
    /// Look up an identity by its unique handle.
    async fn find_by_handle(&self, handle: &Handle) -> Result<Option<Identity>, AuthError>;

    /// Create a new identity, enforcing handle uniqueness.
    ///
    /// # Errors
    /// * `HandleTaken` - Handle is already registered
    async fn create(
        &self,
        handle: Handle,
        display_name: String,
        password_hash: String,
    ) -> Result<Identity, AuthError>;

    /// Remove an identity by handle.
    ///
    /// # Returns
    /// Whether an identity was removed
    async fn delete_by_handle(&self, handle: &Handle) -> Result<bool, AuthError>;
}
