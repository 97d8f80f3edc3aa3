use crate::{AppState, errors::ApiError};
use axum::{Json, extract::State};
use chrono::Utc;

/// GET /health
/// Response: 200 OK with JSON
pub async fn health_check(State(state): State<AppState>) -> Result<Json<serde_json::Value>, ApiError> {
    let posts = state.store.count().await?;

    Ok(Json(serde_json::json!({
      "status": "healthy",
      "timestamp": Utc::now().timestamp(),
      "posts": posts
    })))
}
