// src/services/admin_auth.rs
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const ADMIN_ROLE: &str = "admin";

/// Claims carried by an admin bearer token (HS256).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminClaims {
    pub sub: String,
    pub role: String,
    pub exp: i64,
    pub iat: i64,
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("admin access is disabled on this server")]
    Disabled,

    #[error("missing bearer token")]
    MissingToken,

    #[error("token rejected: {0}")]
    Rejected(#[from] jsonwebtoken::errors::Error),

    #[error("token does not carry the admin role")]
    NotAdmin,

    #[error("token lifetime is out of range")]
    TtlOutOfRange,
}

/// Converts an operator-supplied lifetime in hours into a `Duration`.
pub fn ttl_from_hours(hours: i64) -> Result<Duration, AuthError> {
    Duration::try_hours(hours).ok_or(AuthError::TtlOutOfRange)
}

/// Signs an admin token for `subject`, valid for `ttl`.
pub fn issue_token(
    secret: &str,
    subject: &str,
    ttl: Duration,
) -> Result<String, AuthError> {
    let iat = Utc::now();
    let exp = iat.checked_add_signed(ttl).ok_or(AuthError::TtlOutOfRange)?;
    let claims = AdminClaims {
        sub: subject.to_string(),
        role: ADMIN_ROLE.to_string(),
        exp: exp.timestamp(),
        iat: iat.timestamp(),
    };
    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;
    Ok(token)
}

pub fn verify_token(secret: &str, token: &str) -> Result<AdminClaims, AuthError> {
    let validation = Validation::new(Algorithm::HS256);
    let data = decode::<AdminClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )?;
    if data.claims.role != ADMIN_ROLE {
        return Err(AuthError::NotAdmin);
    }
    Ok(data.claims)
}

/// Extracts the token from an `Authorization: Bearer <token>` header value.
pub fn bearer_token(header: &str) -> Option<&str> {
    let (scheme, token) = header.trim().split_once(' ')?;
    let token = token.trim();
    if scheme.eq_ignore_ascii_case("bearer") && !token.is_empty() {
        Some(token)
    } else {
        None
    }
}

/// Full check for an incoming request: server must have a secret configured and
/// the header must hold a valid admin token signed with it.
pub fn authorize(secret: Option<&str>, header: Option<&str>) -> Result<AdminClaims, AuthError> {
    let secret = secret.ok_or(AuthError::Disabled)?;
    let token = header.and_then(bearer_token).ok_or(AuthError::MissingToken)?;
    verify_token(secret, token)
}
