//! Signed session tokens.
//!
//! The frontend exchanges an email for an HS256 token via `POST /jwt`; the
//! token rides in an HTTP-only cookie and is verified by the [`RequireAuth`]
//! extractor on every protected route. There is no authorization beyond
//! "has a valid token".
//!
//! [`RequireAuth`]: crate::middleware::auth::RequireAuth

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use gadgetz_core::Email;

/// Name of the session cookie.
pub const TOKEN_COOKIE_NAME: &str = "token";

/// Token lifetime. The frontends treat the cookie as long-lived.
const TOKEN_TTL_DAYS: i64 = 365;

/// Errors from issuing or verifying tokens.
#[derive(Debug, Error)]
pub enum TokenError {
    /// Signing failed (should not happen with an HMAC key).
    #[error("failed to sign token: {0}")]
    Signing(jsonwebtoken::errors::Error),

    /// The token is missing, malformed, expired, or has a bad signature.
    #[error("invalid token")]
    Invalid,

    /// The token verified but carries an email that fails to parse.
    #[error("invalid subject in token: {0}")]
    BadSubject(#[from] gadgetz_core::EmailError),
}

/// Claims carried in the session token.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// The caller's email.
    sub: String,
    /// Expiry, seconds since epoch.
    exp: i64,
    /// Issued-at, seconds since epoch.
    iat: i64,
}

/// Issues and verifies HS256 session tokens.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Create a token service from the configured signing secret.
    #[must_use]
    pub fn new(secret: &SecretString) -> Self {
        let bytes = secret.expose_secret().as_bytes();
        Self {
            encoding: EncodingKey::from_secret(bytes),
            decoding: DecodingKey::from_secret(bytes),
            validation: Validation::new(Algorithm::HS256),
        }
    }

    /// Sign a token for the given email.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Signing` if encoding fails.
    pub fn issue(&self, email: &Email) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = Claims {
            sub: email.as_str().to_owned(),
            exp: (now + Duration::days(TOKEN_TTL_DAYS)).timestamp(),
            iat: now.timestamp(),
        };

        jsonwebtoken::encode(&Header::default(), &claims, &self.encoding)
            .map_err(TokenError::Signing)
    }

    /// Verify a token and return the email it was issued for.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Invalid` for any signature, format, or expiry
    /// problem; the caller maps this to a 401.
    pub fn verify(&self, token: &str) -> Result<Email, TokenError> {
        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding, &self.validation)
            .map_err(|_| TokenError::Invalid)?;

        Ok(Email::parse(&data.claims.sub)?)
    }
}
