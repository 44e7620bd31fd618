use super::jwks::KeySetError;
use crate::errors::ApiError;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use std::sync::Arc;
use thiserror::Error;

/// Reasons a request is refused before reaching a protected handler
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("Authorization header is expected.")]
    MissingAuthorizationHeader,
    #[error("{0}")]
    InvalidHeader(&'static str),
    #[error("{0}")]
    InvalidToken(&'static str),
    #[error("Token expired.")]
    TokenExpired,
    #[error("{0}")]
    InvalidClaims(&'static str),
    #[error("Permission not found.")]
    Unauthorized,
    #[error("Signing keys unavailable: {0}")]
    KeySetUnavailable(Arc<KeySetError>),
}

impl AuthError {
    /// Machine readable failure kind
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingAuthorizationHeader => "missing_authorization_header",
            Self::InvalidHeader(_) => "invalid_header",
            Self::InvalidToken(_) => "invalid_token",
            Self::TokenExpired => "token_expired",
            Self::InvalidClaims(_) => "invalid_claims",
            Self::Unauthorized => "unauthorized",
            Self::KeySetUnavailable(_) => "server_error",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidClaims(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::FORBIDDEN,
            Self::KeySetUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::UNAUTHORIZED,
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::KeySetUnavailable(_) => ApiError::internal().with_code(err.code()),
            _ => ApiError::new(err.to_string(), err.status_code()).with_code(err.code()),
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        ApiError::from(self).into_response()
    }
}
