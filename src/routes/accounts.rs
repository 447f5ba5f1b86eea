use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::Value;
use tracing::info;

use crate::db::account_queries;
use crate::errors::AppError;
use crate::models::{Account, Entity};
use crate::routes::method_not_allowed;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/accounts", post(create_account).fallback(method_not_allowed))
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| {
            let mime = value.split(';').next().unwrap_or("").trim();
            mime.eq_ignore_ascii_case("application/json")
        })
        .unwrap_or(false)
}

pub async fn create_account(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    info!("POST /accounts - Creating account");
    if !is_json(&headers) {
        return Err(AppError::UnsupportedMediaType(
            "Content-Type must be application/json".to_string(),
        ));
    }

    let data: Value = serde_json::from_slice(&body).map_err(|_| {
        AppError::Validation("Invalid Account: body of request contained bad or no data".to_string())
    })?;

    let mut account = Account::deserialize(&data)?;
    account_queries::create(&state.pool, &mut account).await?;
    Ok((StatusCode::CREATED, Json(account.serialize())))
}
