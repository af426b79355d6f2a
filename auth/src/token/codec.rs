use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use jsonwebtoken::crypto;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;

use super::claims::Claims;
use super::errors::TokenError;

/// Codec for the signed, three-segment, dot-delimited token format.
///
/// HMAC-SHA256 over a symmetric key injected at construction. The algorithm
/// is pinned server-side: decoding verifies the signature with HS256 no
/// matter what the presented header claims, so there is no algorithm
/// negotiation with untrusted input.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl TokenCodec {
    /// Create a codec over a signing key.
    ///
    /// # Arguments
    /// * `secret` - Symmetric signing key (at least 32 bytes for HS256)
    ///
    /// # Security Notes
    /// - Load the secret from configuration at process start, never from a
    ///   literal in code
    /// - Distinct keys per test environment keep issued tokens isolated
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Serialize and sign a claim set.
    ///
    /// # Returns
    /// `header.payload.signature` with base64url segments
    ///
    /// # Errors
    /// * `EncodingFailed` - Serialization or signing failed
    pub fn encode(&self, claims: &Claims) -> Result<String, TokenError> {
        let header = Header::new(self.algorithm);

        jsonwebtoken::encode(&header, claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Verify and deserialize a token string.
    ///
    /// Check order is fixed: structure, then signature, then payload shape.
    /// A forged payload can never be inspected before its signature has been
    /// verified.
    ///
    /// # Errors
    /// * `Malformed` - Not exactly three non-empty dot-separated segments
    /// * `InvalidSignature` - HMAC does not match under the pinned algorithm
    /// * `InvalidPayload` - Signed payload does not parse as the claim structure
    pub fn decode(&self, token: &str) -> Result<Claims, TokenError> {
        let mut segments = token.split('.');
        let (Some(header), Some(payload), Some(signature), None) = (
            segments.next(),
            segments.next(),
            segments.next(),
            segments.next(),
        ) else {
            return Err(TokenError::Malformed);
        };

        if header.is_empty() || payload.is_empty() || signature.is_empty() {
            return Err(TokenError::Malformed);
        }

        // Signature covers `header.payload` exactly as transmitted
        let message = &token.as_bytes()[..header.len() + 1 + payload.len()];
        let verified = crypto::verify(signature, message, &self.decoding_key, self.algorithm)
            .map_err(|_| TokenError::InvalidSignature)?;
        if !verified {
            return Err(TokenError::InvalidSignature);
        }

        let payload_bytes = URL_SAFE_NO_PAD
            .decode(payload)
            .map_err(|_| TokenError::Malformed)?;

        serde_json::from_slice(&payload_bytes).map_err(|_| TokenError::InvalidPayload)
    }
}
