use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use rolebook_application::message_envelope;
use rolebook_core::AppError;
use tracing::error;

mod types;

pub use types::ErrorResponse;

/// HTTP API error wrapper around core application errors.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(value: AppError) -> Self {
        Self(value)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            AppError::Validation(message) => (StatusCode::BAD_REQUEST, message.as_str()),
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, message.as_str()),
            AppError::Conflict(message) => (StatusCode::CONFLICT, message.as_str()),
            AppError::Internal(message) => {
                error!(error = %message, "request failed with internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
            }
        };

        let payload = Json(ErrorResponse::from(message_envelope(message)));

        (status, payload).into_response()
    }
}

/// Standard API result type.
pub type ApiResult<T> = Result<T, ApiError>;
