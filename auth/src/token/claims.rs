use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Discriminates what a token may be used for.
///
/// Access tokens authorize ordinary requests; refresh tokens are only good
/// for minting a new token pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Access => write!(f, "access"),
            TokenKind::Refresh => write!(f, "refresh"),
        }
    }
}

/// Signed claim set carried by a token.
///
/// Wire field names are fixed: `sub` (identity handle), `exp` / `iat` (epoch
/// seconds), `token_type` (`"access"` or `"refresh"`). The structure is
/// closed; anything that does not fit it is rejected at decode time. Fields
/// are optional on the wire so the validator can report exactly which claim
/// is missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the identity's unique handle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,

    /// Expiration time (Unix timestamp, seconds)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,

    /// Issued at (Unix timestamp, seconds)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,

    /// Token kind discriminator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<TokenKind>,
}

impl Claims {
    /// Claims for a token issued to `subject` at `issued_at`, expiring at
    /// `expires_at`.
    pub fn new(
        subject: impl Into<String>,
        kind: TokenKind,
        issued_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            sub: Some(subject.into()),
            exp: Some(expires_at.timestamp()),
            iat: Some(issued_at.timestamp()),
            token_type: Some(kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    #[test]
    fn test_new_sets_all_claims() {
        let now = Utc::now();
        let claims = Claims::new(
            "ann@example.com",
            TokenKind::Access,
            now,
            now + Duration::hours(12),
        );

        assert_eq!(claims.sub.as_deref(), Some("ann@example.com"));
        assert_eq!(claims.token_type, Some(TokenKind::Access));
        assert_eq!(
            claims.exp.unwrap() - claims.iat.unwrap(),
            12 * 60 * 60 // 12 hours
        );
    }

    #[test]
    fn test_token_kind_wire_names() {
        assert_eq!(
            serde_json::to_string(&TokenKind::Access).unwrap(),
            "\"access\""
        );
        assert_eq!(
            serde_json::to_string(&TokenKind::Refresh).unwrap(),
            "\"refresh\""
        );
    }

    #[test]
    fn test_unknown_token_kind_rejected() {
        let result: Result<TokenKind, _> = serde_json::from_str("\"bearer\"");
        assert!(result.is_err());
    }
}
