//! Bearer token issuance and validation.
//!
//! Tokens are HS256 JWTs carrying the username as subject and an absolute
//! expiry.

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use thiserror::Error;

use crate::auth::Claims;

/// Token service configuration.
#[derive(Debug, Clone)]
pub struct TokenConfig {
    /// Secret key for signing tokens.
    pub secret: String,
    /// Access token lifetime in seconds.
    pub access_token_expires_secs: i64,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            secret: "change-me-in-production".to_string(),
            access_token_expires_secs: 3600,
        }
    }
}

/// Errors that can occur during token operations.
#[derive(Debug, Error)]
pub enum TokenError {
    /// Token encoding failed.
    #[error("failed to encode token: {0}")]
    Encoding(String),

    /// Token has expired.
    #[error("token has expired")]
    Expired,

    /// Token is malformed, forged, or carries no subject.
    #[error("invalid token")]
    Invalid,
}

impl TokenError {
    /// Message shown to the client for a rejected token.
    #[must_use]
    pub const fn client_message(&self) -> &'static str {
        match self {
            Self::Expired => "Your session has expired. Please log in again.",
            Self::Encoding(_) | Self::Invalid => "Could not validate credentials",
        }
    }
}

/// Issues and validates bearer tokens.
#[derive(Clone)]
pub struct TokenService {
    config: TokenConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field(
                "access_token_expires_secs",
                &self.config.access_token_expires_secs,
            )
            .field("secret", &"[hidden]")
            .finish()
    }
}

impl TokenService {
    /// Creates a new token service with the given configuration.
    #[must_use]
    pub fn new(config: TokenConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());
        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Issues an access token for `username`.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Encoding` if signing fails.
    pub fn issue(&self, username: &str) -> Result<String, TokenError> {
        let expires_at = Utc::now() + Duration::seconds(self.config.access_token_expires_secs);
        let claims = Claims::new(username, expires_at);

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| TokenError::Encoding(e.to_string()))
    }

    /// Validates a token and returns the username it was issued to.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Expired` if the token is past its expiry.
    /// Returns `TokenError::Invalid` for anything else that fails to verify.
    pub fn validate(&self, token: &str) -> Result<String, TokenError> {
        // Expiry is absolute: no grace period past `exp`.
        let mut validation = Validation::default();
        validation.leeway = 0;

        let claims = decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid,
            })?;

        if claims.sub.trim().is_empty() {
            return Err(TokenError::Invalid);
        }

        Ok(claims.sub)
    }

    /// Returns the access token lifetime in seconds.
    #[must_use]
    pub const fn expires_in(&self) -> i64 {
        self.config.access_token_expires_secs
    }
}

#[cfg(test)]
#[path = "jwt_tests.rs"]
mod tests;
