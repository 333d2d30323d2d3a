//! Access token claims
//!
//! The backend issues HS256 JWTs whose payload carries the staff username,
//! the numeric `role_id` and an `exp` timestamp. The frontend reads the
//! claims to learn the role after login; the route guard can optionally
//! verify expiry (and the signature, when the secret is shared).

use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};
use shared::AppError;
use thiserror::Error;

/// Payload of a backend access token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub role_id: Option<u32>,
    #[serde(default)]
    pub exp: Option<i64>,
}

impl TokenClaims {
    /// Role code as stored client-side (`"1"`, `"2"`, `"3"`)
    pub fn role_code(&self) -> Option<String> {
        self.role_id.map(|id| id.to_string())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token has expired")]
    Expired,

    #[error("Token signature is invalid")]
    InvalidSignature,

    #[error("Invalid token: {0}")]
    Invalid(String),
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(e: jsonwebtoken::errors::Error) -> Self {
        match e.kind() {
            JwtErrorKind::ExpiredSignature => Self::Expired,
            JwtErrorKind::InvalidSignature => Self::InvalidSignature,
            _ => Self::Invalid(e.to_string()),
        }
    }
}

impl From<TokenError> for AppError {
    fn from(e: TokenError) -> Self {
        match e {
            TokenError::Expired => AppError::token_expired(),
            other => AppError::invalid_token(other.to_string()),
        }
    }
}

fn base_validation() -> Validation {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_aud = false;
    validation.leeway = 0;
    validation
}

/// Read claims without checking signature or expiry
///
/// Used right after login, where the token has just come from the backend.
pub fn read_claims(token: &str) -> Result<TokenClaims, TokenError> {
    let mut validation = base_validation();
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.set_required_spec_claims::<&str>(&[]);

    let data = decode::<TokenClaims>(token, &DecodingKey::from_secret(&[]), &validation)?;
    Ok(data.claims)
}

/// Verifies tokens presented to the route guard
///
/// Expiry is always enforced. The signature is checked only when the
/// backend's signing secret is configured.
#[derive(Clone)]
pub struct TokenVerifier {
    key: Option<DecodingKey>,
}

impl TokenVerifier {
    pub fn new(secret: Option<&str>) -> Self {
        Self {
            key: secret
                .filter(|s| !s.is_empty())
                .map(|s| DecodingKey::from_secret(s.as_bytes())),
        }
    }

    pub fn checks_signature(&self) -> bool {
        self.key.is_some()
    }

    pub fn verify(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let mut validation = base_validation();
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp"]);

        let data = match &self.key {
            Some(key) => decode::<TokenClaims>(token, key, &validation)?,
            None => {
                validation.insecure_disable_signature_validation();
                decode::<TokenClaims>(token, &DecodingKey::from_secret(&[]), &validation)?
            }
        };
        Ok(data.claims)
    }
}

impl std::fmt::Debug for TokenVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenVerifier")
            .field("checks_signature", &self.checks_signature())
            .finish()
    }
}
