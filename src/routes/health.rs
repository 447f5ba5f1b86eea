use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tracing::info;

use crate::errors::AppError;
use crate::routes::method_not_allowed;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index).fallback(method_not_allowed))
        .route("/health", get(health).fallback(method_not_allowed))
        .route("/boom", get(boom).fallback(method_not_allowed))
}

pub async fn index() -> Json<Value> {
    info!("GET / - Index");
    Json(json!({ "name": "Account REST API Service", "version": "1.0" }))
}

pub async fn health() -> Json<Value> {
    info!("GET /health - Health check");
    Json(json!({ "status": "OK" }))
}

// Deliberately fails so the 500 mapping can be exercised end to end.
pub async fn boom() -> Result<(), AppError> {
    info!("GET /boom - Triggering internal error");
    Err(AppError::Internal(anyhow::anyhow!("Boom!")))
}
