//! Authentication utilities library
//!
//! Provides the credential and session-token infrastructure for clipkit
//! services:
//! - Password hashing (Argon2id)
//! - Signed bearer tokens: issuance, codec, and validation (access + refresh)
//! - Injectable clock for expiry arithmetic
//! - Ownership-authorization contract for resource-owning collaborators
//!
//! All operations are synchronous and touch no shared mutable state beyond the
//! signing key held by the codec, so they are safe to run concurrently across
//! any number of requests. Tokens are self-contained: there is no server-side
//! token store and no revocation before natural expiry.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let digest = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &digest));
//! assert!(!hasher.verify("other_password", &digest));
//! ```
//!
//! ## Token Issuance and Validation
//! ```
//! use std::sync::Arc;
//!
//! use auth::{SystemClock, TokenCodec, TokenIssuer, TokenKind, TokenValidator};
//! use chrono::Duration;
//!
//! let codec = Arc::new(TokenCodec::new(b"secret_key_at_least_32_bytes_long!"));
//! let clock = Arc::new(SystemClock);
//!
//! let issuer = TokenIssuer::new(
//!     Arc::clone(&codec),
//!     clock.clone(),
//!     Duration::minutes(720),
//!     Duration::days(7),
//! );
//! let pair = issuer.issue_pair("ann@example.com").unwrap();
//!
//! let validator = TokenValidator::new(codec, clock);
//! let session = validator
//!     .validate(&pair.access_token, Some(TokenKind::Access))
//!     .unwrap();
//! assert_eq!(session.subject, "ann@example.com");
//! ```

pub mod clock;
pub mod ownership;
pub mod password;
pub mod token;

// Re-export commonly used items
pub use clock::Clock;
pub use clock::FixedClock;
pub use clock::SystemClock;
pub use ownership::Owned;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Claims;
pub use token::TokenCodec;
pub use token::TokenError;
pub use token::TokenIssuer;
pub use token::TokenKind;
pub use token::TokenPair;
pub use token::TokenValidator;
pub use token::Validated;
