use std::sync::Arc;

use chrono::Duration;

use super::claims::Claims;
use super::claims::TokenKind;
use super::codec::TokenCodec;
use super::errors::TokenError;
use crate::clock::Clock;

/// Access and refresh token pair handed to a client after authentication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Builds signed tokens for an already-verified identity.
///
/// The issuer never checks credentials itself; callers verify the secret
/// first and pass only the subject handle. Issuing has no side effects and
/// persists nothing.
pub struct TokenIssuer {
    codec: Arc<TokenCodec>,
    clock: Arc<dyn Clock>,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl TokenIssuer {
    /// Create an issuer with the configured expiry policy.
    ///
    /// `refresh_ttl` should be substantially longer than `access_ttl`.
    pub fn new(
        codec: Arc<TokenCodec>,
        clock: Arc<dyn Clock>,
        access_ttl: Duration,
        refresh_ttl: Duration,
    ) -> Self {
        Self {
            codec,
            clock,
            access_ttl,
            refresh_ttl,
        }
    }

    /// Issue a short-lived access token for `subject`.
    pub fn issue_access(&self, subject: &str) -> Result<String, TokenError> {
        self.issue(subject, TokenKind::Access, self.access_ttl)
    }

    /// Issue a long-lived refresh token for `subject`.
    pub fn issue_refresh(&self, subject: &str) -> Result<String, TokenError> {
        self.issue(subject, TokenKind::Refresh, self.refresh_ttl)
    }

    /// Issue a fresh access + refresh pair for `subject`.
    pub fn issue_pair(&self, subject: &str) -> Result<TokenPair, TokenError> {
        Ok(TokenPair {
            access_token: self.issue_access(subject)?,
            refresh_token: self.issue_refresh(subject)?,
        })
    }

    fn issue(&self, subject: &str, kind: TokenKind, ttl: Duration) -> Result<String, TokenError> {
        let now = self.clock.now();
        let claims = Claims::new(subject, kind, now, now + ttl);
        self.codec.encode(&claims)
    }
}
