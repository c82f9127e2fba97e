use chrono::Duration;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use serde::Serialize;

use super::claims::Claims;
use super::errors::TokenError;
use crate::clock::Clock;
use crate::clock::SystemClock;

/// Issuer embedded in every token this manager creates.
const ISSUER: &str = "taska-auth-service";

/// Bearer token issued on login or refresh.
///
/// Self-contained and never persisted server-side; it expires on its
/// own at the instant encoded in its claims.
#[derive(Debug, Clone, Serialize)]
pub struct Token {
    /// Signed compact token string
    pub access_token: String,
    /// Always "Bearer"
    pub token_type: String,
    /// Seconds until expiry, measured at issuance
    pub expires_in: i64,
}

/// Issues, validates, and refreshes signed bearer tokens.
///
/// Holds no per-token state: every operation is a pure function of the
/// configured secret, the injected clock, and the token string. Uses
/// HS256 (HMAC with SHA-256).
pub struct TokenManager<C: Clock = SystemClock> {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_duration: Duration,
    clock: C,
}

impl TokenManager<SystemClock> {
    /// Create a token manager backed by the system clock.
    ///
    /// # Arguments
    /// * `secret` - Secret key for HMAC signing (at least 32 bytes recommended)
    /// * `token_duration` - Lifetime of issued tokens
    ///
    /// # Returns
    /// TokenManager configured with HS256
    pub fn new(secret: &[u8], token_duration: Duration) -> Self {
        Self::with_clock(secret, token_duration, SystemClock)
    }
}

impl<C: Clock> TokenManager<C> {
    /// Create a token manager with an explicit clock.
    ///
    /// # Arguments
    /// * `secret` - Secret key for HMAC signing
    /// * `token_duration` - Lifetime of issued tokens
    /// * `clock` - Time source for issuance and expiry checks
    ///
    /// # Returns
    /// TokenManager instance
    pub fn with_clock(secret: &[u8], token_duration: Duration, clock: C) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            token_duration,
            clock,
        }
    }

    /// Issue a new token for a subject.
    ///
    /// Sets issued-at and not-before to the current instant and expiry
    /// to now plus the configured duration.
    ///
    /// # Arguments
    /// * `subject_id` - Subject identifier to embed in the claims
    ///
    /// # Returns
    /// Token with access token string, type, and seconds until expiry
    ///
    /// # Errors
    /// * `Signing` - The signature operation failed
    pub fn create_token(&self, subject_id: u64) -> Result<Token, TokenError> {
        let now = self.clock.now().timestamp();
        let claims = Claims {
            sub: subject_id,
            iat: now,
            nbf: now,
            exp: now + self.token_duration.num_seconds(),
            iss: ISSUER.to_string(),
        };

        let access_token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::Signing(e.to_string()))?;

        Ok(Token {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in: self.token_duration.num_seconds(),
        })
    }

    /// Validate a token and return the embedded subject identifier.
    ///
    /// Verifies structure, signing method, and signature, then checks
    /// the temporal claims against the injected clock. A token checked
    /// at exactly its expiry instant counts as expired.
    ///
    /// # Arguments
    /// * `token` - Compact token string
    ///
    /// # Returns
    /// Subject identifier from the claims
    ///
    /// # Errors
    /// * `Malformed` - String cannot be parsed into a token
    /// * `UnexpectedSigningMethod` - Declared algorithm is not HS256
    /// * `SignatureInvalid` - Signature does not verify under the secret
    /// * `Expired` - Current time is at or past the expiry instant
    /// * `NotYetValid` - Current time is before the not-before instant
    pub fn validate_token(&self, token: &str) -> Result<u64, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        // Temporal claims are checked below against the injected clock
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.required_spec_claims.clear();

        let data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::InvalidAlgorithm => TokenError::UnexpectedSigningMethod,
                    ErrorKind::InvalidSignature => TokenError::SignatureInvalid,
                    _ => TokenError::Malformed(e.to_string()),
                }
            })?;

        let now = self.clock.now().timestamp();
        if now >= data.claims.exp {
            return Err(TokenError::Expired);
        }
        if now < data.claims.nbf {
            return Err(TokenError::NotYetValid);
        }

        Ok(data.claims.sub)
    }

    /// Validate an existing token and issue a fresh one for its subject.
    ///
    /// The old token is not revoked; it remains usable until its own
    /// expiry.
    ///
    /// # Arguments
    /// * `token` - Compact token string to refresh
    ///
    /// # Returns
    /// New token with a fresh issuance window
    ///
    /// # Errors
    /// Validation errors from the existing token propagate unchanged;
    /// `Signing` if issuing the replacement fails.
    pub fn refresh_token(&self, token: &str) -> Result<Token, TokenError> {
        let subject_id = self.validate_token(token)?;
        self.create_token(subject_id)
    }
}
