use std::sync::Arc;

use async_trait::async_trait;
use auth::Clock;
use auth::PasswordHasher;
use auth::TokenCodec;
use auth::TokenIssuer;
use auth::TokenKind;
use auth::TokenPair;
use auth::TokenValidator;
use chrono::Duration;

use crate::identity::errors::AuthError;
use crate::identity::models::Credentials;
use crate::identity::models::Handle;
use crate::identity::models::Identity;
use crate::identity::models::RegisterCommand;
use crate::identity::ports::AuthServicePort;
use crate::identity::ports::UserDirectory;

/// Domain service implementing the authentication boundary.
///
/// Coordinates the credential hasher, token issuer, and token validator over
/// an injected user directory. Credential verification always happens here;
/// the issuer only ever sees an already-verified handle.
pub struct AuthService<D>
where
    D: UserDirectory,
{
    directory: Arc<D>,
    password_hasher: PasswordHasher,
    issuer: TokenIssuer,
    validator: TokenValidator,
}

impl<D> AuthService<D>
where
    D: UserDirectory,
{
    /// Create the service with an injected directory, signing codec, clock,
    /// and expiry policy.
    pub fn new(
        directory: Arc<D>,
        codec: Arc<TokenCodec>,
        clock: Arc<dyn Clock>,
        access_ttl: Duration,
        refresh_ttl: Duration,
    ) -> Self {
        Self {
            directory,
            password_hasher: PasswordHasher::new(),
            issuer: TokenIssuer::new(
                Arc::clone(&codec),
                Arc::clone(&clock),
                access_ttl,
                refresh_ttl,
            ),
            validator: TokenValidator::new(codec, clock),
        }
    }

    /// Resolve a validated token subject to a live identity.
    ///
    /// Tokens are not invalidated retroactively, so the subject may have been
    /// deleted since issuance; that surfaces as `IdentityNotFound` here.
    async fn resolve_subject(&self, subject: &str) -> Result<Identity, AuthError> {
        let handle = Handle::new(subject.to_string())
            .map_err(|_| AuthError::IdentityNotFound(subject.to_string()))?;

        self.directory
            .find_by_handle(&handle)
            .await?
            .ok_or_else(|| AuthError::IdentityNotFound(subject.to_string()))
    }
}

#[async_trait]
impl<D> AuthServicePort for AuthService<D>
where
    D: UserDirectory,
{
    async fn register(&self, command: RegisterCommand) -> Result<TokenPair, AuthError> {
        if self
            .directory
            .find_by_handle(&command.handle)
            .await?
            .is_some()
        {
            return Err(AuthError::HandleTaken(command.handle.to_string()));
        }

        let password_hash = self.password_hasher.hash(&command.password)?;

        let identity = self
            .directory
            .create(command.handle, command.display_name, password_hash)
            .await?;

        tracing::info!(handle = %identity.handle, id = %identity.id, "Identity registered");

        Ok(self.issuer.issue_pair(identity.handle.as_str())?)
    }

    async fn login(&self, credentials: Credentials) -> Result<TokenPair, AuthError> {
        let identity = match self.directory.find_by_handle(&credentials.handle).await? {
            Some(identity) => identity,
            None => {
                tracing::warn!(handle = %credentials.handle, "Login for unknown handle");
                return Err(AuthError::InvalidCredentials);
            }
        };

        if !self
            .password_hasher
            .verify(&credentials.password, &identity.password_hash)
        {
            tracing::warn!(handle = %credentials.handle, "Login with wrong password");
            return Err(AuthError::InvalidCredentials);
        }

        Ok(self.issuer.issue_pair(identity.handle.as_str())?)
    }

    async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, AuthError> {
        let session = self
            .validator
            .validate(refresh_token, Some(TokenKind::Refresh))?;

        // The identity must still exist before a new pair is minted
        let identity = self.resolve_subject(&session.subject).await?;

        Ok(self.issuer.issue_pair(identity.handle.as_str())?)
    }

    async fn authenticate(&self, bearer_token: &str) -> Result<Identity, AuthError> {
        let session = self
            .validator
            .validate(bearer_token, Some(TokenKind::Access))?;

        self.resolve_subject(&session.subject).await
    }
}
