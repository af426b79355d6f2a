use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::identity::errors::HandleError;
use crate::identity::errors::IdentityIdError;

/// Identity aggregate entity.
///
/// The authenticated principal: a stable id, a unique email-like handle used
/// as the token subject, a display name, and the password digest. The digest
/// never leaves this struct in plaintext form; there is no plaintext field.
#[derive(Debug, Clone)]
pub struct Identity {
    pub id: IdentityId,
    pub handle: Handle,
    pub display_name: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Identity unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IdentityId(pub Uuid);

impl IdentityId {
    /// Generate a new random identity ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an identity ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, IdentityIdError> {
        Uuid::parse_str(s)
            .map(IdentityId)
            .map_err(|e| IdentityIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for IdentityId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for IdentityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Unique email-like handle, the token subject.
///
/// Validated as an RFC 5322 address; uniqueness across identities is
/// enforced by the user directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Handle(String);

impl Handle {
    /// Create a new validated handle.
    ///
    /// # Errors
    /// * `InvalidFormat` - Not a well-formed email address
    pub fn new(handle: String) -> Result<Self, HandleError> {
        email_address::EmailAddress::from_str(&handle)
            .map(|_| Handle(handle))
            .map_err(|e| HandleError::InvalidFormat(e.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to register a new identity with validated fields.
#[derive(Debug)]
pub struct RegisterCommand {
    pub handle: Handle,
    pub display_name: String,
    pub password: String,
}

impl RegisterCommand {
    pub fn new(handle: Handle, display_name: String, password: String) -> Self {
        Self {
            handle,
            display_name,
            password,
        }
    }
}

/// Ephemeral credential pair submitted at login.
///
/// Exists only for the duration of the call; never persisted.
#[derive(Debug)]
pub struct Credentials {
    pub handle: Handle,
    pub password: String,
}
