//! Signing and verification of HS256 API tokens.
//!
//! Only HS256 is accepted. Tokens without `exp` are valid indefinitely; when
//! `exp` or `nbf` are present they are checked without leeway.
//!
//! # Example
//!
//! ```ignore
//! use waduk_auth::{create_token, decode_token};
//! use waduk_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//! let token = create_token("42", Some(2), &config)?;
//! let claims = decode_token(&token, &config)?;
//! ```

use chrono::Utc;
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use thiserror::Error;

use waduk_config::JwtConfig;
use waduk_core::AppError;

use crate::claims::Claims;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token not found.")]
    Missing,
    #[error("Insecure use of middleware over HTTP denied by configuration.")]
    InsecureTransport,
    #[error("Expired token")]
    Expired,
    #[error("Token not yet valid")]
    Immature,
    #[error("Signature verification failed")]
    InvalidSignature,
    #[error("Algorithm not allowed")]
    AlgorithmNotAllowed,
    #[error("Malformed token")]
    Malformed,
    #[error("Token secret is not configured")]
    SecretNotConfigured,
    #[error("{0}")]
    Other(String),
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            ErrorKind::ImmatureSignature => TokenError::Immature,
            ErrorKind::InvalidSignature => TokenError::InvalidSignature,
            ErrorKind::InvalidAlgorithm | ErrorKind::InvalidAlgorithmName => {
                TokenError::AlgorithmNotAllowed
            }
            ErrorKind::InvalidToken
            | ErrorKind::Base64(_)
            | ErrorKind::Json(_)
            | ErrorKind::Utf8(_) => TokenError::Malformed,
            _ => TokenError::Other(err.to_string()),
        }
    }
}

fn validation() -> Validation {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;
    validation.validate_nbf = true;
    validation.required_spec_claims.clear();
    validation
}

/// Signs a token for `sub` that expires after `jwt_config.token_expiry` seconds.
pub fn create_token(
    sub: &str,
    role: Option<i32>,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    if jwt_config.secret.is_empty() {
        return Err(AppError::internal(TokenError::SecretNotConfigured));
    }

    if jwt_config.token_expiry <= 0 {
        return Err(AppError::internal(TokenError::Other(format!(
            "Token expiry must be positive, got {}",
            jwt_config.token_expiry
        ))));
    }

    let now = Utc::now().timestamp();
    let exp = now.checked_add(jwt_config.token_expiry).ok_or_else(|| {
        AppError::internal(TokenError::Other("Token expiry out of range".to_string()))
    })?;
    let claims = Claims {
        sub: sub.to_string(),
        role,
        iat: Some(now),
        exp: Some(exp),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(TokenError::Other(format!("Failed to create token: {}", e))))
}

/// Verifies signature, algorithm and time claims, returning the claims.
pub fn decode_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, TokenError> {
    if jwt_config.secret.is_empty() {
        return Err(TokenError::SecretNotConfigured);
    }

    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &validation(),
    )?;

    Ok(data.claims)
}
