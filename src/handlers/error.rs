// src/handlers/error.rs
use std::fmt;
use warp::http::StatusCode;
use warp::reject::Reject;

use crate::services::admin_auth::AuthError;
use crate::services::bank_store::StoreError;
use crate::services::calculations::CalcError;

#[derive(Debug, Clone)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: &'static str,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        ApiError {
            status,
            code,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, "not_found", message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "invalid_input", message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "unauthorized", message)
    }

    /// Public read routes.
    pub fn store_load() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "store_error", "Failed to load bank data")
    }

    /// Admin read route.
    pub fn store_read() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "store_error", "Failed to read data")
    }

    pub fn store_write() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "store_error", "Failed to save data")
    }
}

impl From<CalcError> for ApiError {
    fn from(err: CalcError) -> Self {
        match err {
            CalcError::NotReady(_) => {
                Self::new(StatusCode::UNPROCESSABLE_ENTITY, "not_ready", err.to_string())
            }
            CalcError::InvalidInput { .. } => Self::bad_request(err.to_string()),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        Self::unauthorized(err.to_string())
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Invalid(e) => Self::bad_request(format!("Invalid data format: {}", e)),
            StoreError::Io(_) | StoreError::Json(_) => Self::store_load(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({}): {}", self.status.as_u16(), self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
impl Reject for ApiError {}
