use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tinylink_core::ShortenerError;
use tracing::error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("short code not found: {0}")]
    NotFound(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<ShortenerError> for AppError {
    fn from(value: ShortenerError) -> Self {
        match value {
            ShortenerError::NotFound(code) => Self::NotFound(code),
            other => Self::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::InvalidUrl(_) => {
                (StatusCode::BAD_REQUEST, "Invalid URL format.").into_response()
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND.into_response(),
            AppError::Internal(message) => {
                error!(%message, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error.").into_response()
            }
        }
    }
}
