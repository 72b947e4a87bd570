//! Identity-provider collaborator: bearer-credential verification.
//!
//! The contract is narrow: given request headers, [`authenticate`]
//! yields a verified caller identity, `None` when no credential was
//! presented, or [`AuthError`] when a credential was presented but could
//! not be verified. Whether "no identity" is acceptable is the route
//! layer's decision, not this module's.

use axum::http::HeaderMap;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Stable subject identifier of the caller.
    pub sub: String,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    pub fn new(subject: impl Into<String>) -> Self {
        let now = Utc::now();
        let expiry_hours = config::config().security.jwt_expiry_hours;
        Self {
            sub: subject.into(),
            exp: (now + Duration::hours(expiry_hours as i64)).timestamp(),
            iat: now.timestamp(),
        }
    }
}

/// Verified caller identity, injected into requests by the auth
/// middleware and available to every handler as an extension.
#[derive(Debug, Clone)]
pub struct CallerIdentity {
    pub subject: String,
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid Authorization header format")]
    MalformedHeader,

    #[error("Authorization header must use Bearer token format")]
    NotBearer,

    #[error("Empty bearer token")]
    EmptyToken,

    #[error("Invalid bearer token: {0}")]
    InvalidToken(String),

    #[error("JWT secret not configured")]
    MissingSecret,
}

/// Issue a signed bearer token for the given subject.
pub fn issue_token(subject: &str) -> Result<String, AuthError> {
    let secret = &config::config().security.jwt_secret;
    if secret.is_empty() {
        return Err(AuthError::MissingSecret);
    }
    let claims = Claims::new(subject);
    encode(&Header::default(), &claims, &EncodingKey::from_secret(secret.as_bytes()))
        .map_err(|e| AuthError::InvalidToken(e.to_string()))
}

/// Validate a bearer token and extract its claims.
pub fn verify_token(token: &str) -> Result<Claims, AuthError> {
    let secret = &config::config().security.jwt_secret;
    if secret.is_empty() {
        return Err(AuthError::MissingSecret);
    }
    let decoded = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|e| AuthError::InvalidToken(e.to_string()))?;
    Ok(decoded.claims)
}

/// Resolve the caller identity from request headers.
///
/// A missing Authorization header is not an error here; it simply means
/// no identity.
pub fn authenticate(headers: &HeaderMap) -> Result<Option<CallerIdentity>, AuthError> {
    let header = match headers
        .get("authorization")
        .or_else(|| headers.get("Authorization"))
    {
        Some(value) => value,
        None => return Ok(None),
    };

    let header = header.to_str().map_err(|_| AuthError::MalformedHeader)?;
    let token = header.strip_prefix("Bearer ").ok_or(AuthError::NotBearer)?;
    if token.trim().is_empty() {
        return Err(AuthError::EmptyToken);
    }

    let claims = verify_token(token)?;
    Ok(Some(CallerIdentity { subject: claims.sub }))
}
