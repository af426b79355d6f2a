use std::sync::Arc;

use chrono::DateTime;
use chrono::Utc;

use super::claims::TokenKind;
use super::codec::TokenCodec;
use super::errors::TokenError;
use crate::clock::Clock;

/// Outcome of a successful validation: the authenticated subject and the
/// token's remaining claims.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validated {
    pub subject: String,
    pub kind: Option<TokenKind>,
    pub expires_at: DateTime<Utc>,
}

/// Validates presented tokens against signature, structure, expiry, and kind.
///
/// Each call is independent and idempotent; there is no shared state beyond
/// the codec's read-only key.
pub struct TokenValidator {
    codec: Arc<TokenCodec>,
    clock: Arc<dyn Clock>,
}

impl TokenValidator {
    pub fn new(codec: Arc<TokenCodec>, clock: Arc<dyn Clock>) -> Self {
        Self { codec, clock }
    }

    /// Validate a token string, optionally requiring a specific kind.
    ///
    /// Checks run in a fixed order and stop at the first failure: structure,
    /// signature, payload shape, subject presence, expiry presence, expiry
    /// instant, then kind. Structural and signature checks always precede
    /// claim checks, so a forged-but-well-formed payload cannot short-circuit
    /// past verification.
    ///
    /// Expiry is strict: a token is valid up to but not including its
    /// `exp` instant.
    ///
    /// # Errors
    /// * `Malformed` / `InvalidSignature` / `InvalidPayload` - Codec rejection
    /// * `MissingSubject` - No `sub` claim, or empty subject
    /// * `MissingExpiry` - No `exp` claim
    /// * `Expired` - Current time is at or past `exp`
    /// * `WrongKind` - Token kind does not match `required`
    pub fn validate(
        &self,
        token: &str,
        required: Option<TokenKind>,
    ) -> Result<Validated, TokenError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(TokenError::Malformed);
        }

        let claims = self.codec.decode(token)?;

        let subject = claims
            .sub
            .filter(|sub| !sub.is_empty())
            .ok_or(TokenError::MissingSubject)?;

        let exp = claims.exp.ok_or(TokenError::MissingExpiry)?;
        let expires_at =
            DateTime::<Utc>::from_timestamp(exp, 0).ok_or(TokenError::InvalidPayload)?;

        if self.clock.now() >= expires_at {
            return Err(TokenError::Expired);
        }

        if let Some(expected) = required {
            if claims.token_type != Some(expected) {
                return Err(TokenError::WrongKind { expected });
            }
        }

        Ok(Validated {
            subject,
            kind: claims.token_type,
            expires_at,
        })
    }
}
