use thiserror::Error;

use super::claims::TokenKind;

/// Error type for token codec and validation operations.
///
/// The variants are intentionally specific so callers can log the precise
/// failure; boundary layers are expected to collapse them into one opaque
/// unauthenticated response before anything reaches a client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("token is not a well-formed three-segment token")]
    Malformed,

    #[error("token signature verification failed")]
    InvalidSignature,

    #[error("token payload does not match the expected claim structure")]
    InvalidPayload,

    #[error("token has no subject claim")]
    MissingSubject,

    #[error("token has no expiry claim")]
    MissingExpiry,

    #[error("token has expired")]
    Expired,

    #[error("token is not a {expected} token")]
    WrongKind { expected: TokenKind },

    #[error("failed to encode token: {0}")]
    EncodingFailed(String),
}
