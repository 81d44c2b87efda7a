//! JWT signing for redeemed invitation codes
//!
//! Provides token encoding, decoding, and validation using the `jsonwebtoken` crate.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// The redeemed invitation code
    pub code: String,
    /// Redemption time (Unix milliseconds)
    #[serde(rename = "verifiedAt")]
    pub verified_at: i64,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Check if the token is expired
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }

    /// Validity window in seconds
    #[must_use]
    pub fn lifetime(&self) -> i64 {
        self.exp - self.iat
    }
}

/// A freshly signed token together with its claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssuedToken {
    pub token: String,
    pub claims: Claims,
    pub expires_in: i64,
}

/// JWT service for encoding and decoding tokens
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_expiry: i64,
}

impl JwtService {
    /// Create a new JWT service with the given secret and expiry (seconds)
    #[must_use]
    pub fn new(secret: &str, token_expiry: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            token_expiry,
        }
    }

    /// Configured validity window in seconds
    #[must_use]
    pub fn token_expiry(&self) -> i64 {
        self.token_expiry
    }

    /// Sign a token for a redeemed invitation code
    ///
    /// # Errors
    /// Returns an error if token encoding fails
    pub fn issue(&self, code: &str) -> Result<IssuedToken, AppError> {
        self.issue_at(code, Utc::now())
    }

    /// Sign a token as if issued at `now`
    ///
    /// # Errors
    /// Returns an error if the expiry overflows or token encoding fails
    pub fn issue_at(&self, code: &str, now: DateTime<Utc>) -> Result<IssuedToken, AppError> {
        let expires_at = Duration::try_seconds(self.token_expiry)
            .and_then(|window| now.checked_add_signed(window))
            .ok_or_else(|| {
                AppError::Internal(anyhow::anyhow!(
                    "Token expiry of {}s is out of range",
                    self.token_expiry
                ))
            })?;

        let claims = Claims {
            code: code.to_string(),
            verified_at: now.timestamp_millis(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to encode JWT: {e}")))?;

        Ok(IssuedToken {
            token,
            claims,
            expires_in: self.token_expiry,
        })
    }

    /// Decode and validate a JWT token
    ///
    /// # Errors
    /// Returns an error if the token is invalid or expired
    pub fn decode_token(&self, token: &str) -> Result<Claims, AppError> {
        let validation = Validation::default();

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::TokenExpired,
                _ => AppError::InvalidToken,
            }
        })?;

        Ok(token_data.claims)
    }
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("token_expiry", &self.token_expiry)
            .finish_non_exhaustive()
    }
}
