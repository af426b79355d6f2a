use auth::PasswordError;
use auth::TokenError;
use thiserror::Error;

/// Error for IdentityId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IdentityIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for Handle validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HandleError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for authentication operations.
///
/// `InvalidCredentials` and `HandleTaken` are the only variants a client may
/// see spelled out. Every token sub-reason and `IdentityNotFound` is retained
/// for logging and collapsed to a generic unauthenticated response at the
/// HTTP boundary, so failures cannot be used as an oracle on the token
/// format.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("Incorrect email or password")]
    InvalidCredentials,

    #[error("Email already registered: {0}")]
    HandleTaken(String),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error("No identity found for handle: {0}")]
    IdentityNotFound(String),

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("User directory error: {0}")]
    Directory(String),
}
