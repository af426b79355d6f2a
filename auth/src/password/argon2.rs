use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Argon2;

use super::errors::PasswordError;

/// One-way credential hasher.
///
/// Wraps Argon2id with per-call random salts. The same secret hashed twice
/// yields two different digests; both verify.
pub struct PasswordHasher;

impl PasswordHasher {
    pub fn new() -> Self {
        Self
    }

    /// Hash a plaintext secret for storage.
    ///
    /// # Arguments
    /// * `secret` - Plaintext secret to hash
    ///
    /// # Returns
    /// PHC string format digest (algorithm, parameters, salt, and hash)
    ///
    /// # Errors
    /// * `HashingFailed` - Hashing operation failed
    pub fn hash(&self, secret: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(secret.as_bytes(), &salt)
            .map(|digest| digest.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a secret against a stored digest.
    ///
    /// Uses the algorithm's own verification, which re-derives the hash under
    /// the stored parameters and compares in constant time. A digest that is
    /// not a parseable PHC string fails verification; it never errors out to
    /// the caller.
    ///
    /// # Arguments
    /// * `secret` - Plaintext secret to verify
    /// * `digest` - Stored digest in PHC string format
    ///
    /// # Returns
    /// True iff `secret` produced `digest`
    pub fn verify(&self, secret: &str, digest: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(digest) else {
            return false;
        };

        Argon2::default()
            .verify_password(secret.as_bytes(), &parsed)
            .is_ok()
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}
