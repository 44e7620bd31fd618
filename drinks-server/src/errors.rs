use crate::store::StoreError;
use axum::response::IntoResponse;
use axum::Json;
use http::StatusCode;
use log::error;
use serde::Serialize;
use utoipa::ToSchema;

/// Message returned for every 500, whatever the underlying cause
pub(crate) const SERVER_ERROR_MESSAGE: &str = "the server could not complete the request";

/// Error returned by every handler, rendered as
/// `{"success": false, "error": <status>, "message": <text>}`
#[derive(Debug, Clone)]
pub struct ApiError {
    pub message: String,
    pub status_code: StatusCode,
    /// Machine readable failure kind, set for authorization failures
    pub code: Option<&'static str>,
}

/// Uniform error envelope
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    success: bool,
    /// HTTP status code
    error: u16,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
}

impl ApiError {
    /// Create a new ApiError with a message and status code
    pub fn new<S: ToString>(message: S, status_code: StatusCode) -> Self {
        Self {
            message: message.to_string(),
            status_code,
            code: None,
        }
    }

    /// Attach a failure kind to the error
    pub fn with_code(mut self, code: &'static str) -> Self {
        self.code = Some(code);
        self
    }

    /// Create new Internal Server Error (500). The cause must be logged by
    /// the caller, it is never sent back.
    pub fn internal() -> Self {
        Self::new(SERVER_ERROR_MESSAGE, StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Create new Not Found Error (404)
    pub fn not_found() -> Self {
        Self::new("resource not found", StatusCode::NOT_FOUND)
    }

    /// Create new Unprocessable Entity Error (422) with a message
    pub fn unprocessable<S: ToString>(message: S) -> Self {
        Self::new(message, StatusCode::UNPROCESSABLE_ENTITY)
    }

    /// Create new Method Not Allowed Error (405)
    pub fn method_not_allowed() -> Self {
        Self::new("method not allowed", StatusCode::METHOD_NOT_ALLOWED)
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateTitle(_) => Self::unprocessable(err),
            StoreError::NotFound(_) => Self::not_found(),
            other => {
                error!("Store operation failed: {}", other);
                Self::internal()
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let body = ErrorBody {
            success: false,
            error: self.status_code.as_u16(),
            message: self.message,
            code: self.code.map(str::to_string),
        };
        (self.status_code, Json(body)).into_response()
    }
}
