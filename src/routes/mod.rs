pub(crate) mod accounts;
pub(crate) mod health;

use crate::errors::AppError;

/// Router-wide fallback for paths that match no route.
pub async fn not_found() -> AppError {
    AppError::NotFound("The requested URL was not found on the server".to_string())
}

/// Per-route fallback for methods not registered on a matched path.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed("The method is not allowed for the requested URL".to_string())
}
