use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

/// Everything a request can fail with. Converted to an HTTP response in
/// exactly one place (`IntoResponse` below); handlers just propagate.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    MethodNotAllowed(String),
    #[error("{0}")]
    UnsupportedMediaType(String),
    #[error("Database error: {0}")]
    Db(sqlx::Error),
    #[error("Internal error: {0}")]
    Internal(anyhow::Error),
}

/// JSON body returned for every mapped failure. The numeric `status` field
/// duplicates the HTTP status code.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub status: u16,
    pub error: &'static str,
    pub message: String,
}

const INTERNAL_ERROR_MESSAGE: &str = "An unexpected error occurred. Please try again later.";

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, label, message) = match self {
            AppError::Validation(msg) => {
                warn!("400 Bad Request: {}", msg);
                (StatusCode::BAD_REQUEST, "Bad Request", msg)
            }
            AppError::NotFound(msg) => {
                warn!("404 Not Found: {}", msg);
                (StatusCode::NOT_FOUND, "Not Found", msg)
            }
            AppError::MethodNotAllowed(msg) => {
                warn!("405 Method Not Allowed: {}", msg);
                (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed", msg)
            }
            AppError::UnsupportedMediaType(msg) => {
                warn!("415 Unsupported Media Type: {}", msg);
                (
                    StatusCode::UNSUPPORTED_MEDIA_TYPE,
                    "Unsupported Media Type",
                    msg,
                )
            }
            // The underlying detail is logged, never returned to the caller.
            AppError::Db(err) => {
                error!("500 Internal Server Error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error",
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }
            AppError::Internal(err) => {
                error!("500 Internal Server Error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error",
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }
        };

        let body = ErrorBody {
            status: status.as_u16(),
            error: label,
            message,
        };
        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(value: sqlx::Error) -> Self {
        AppError::Db(value)
    }
}
