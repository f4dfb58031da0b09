use axum::{extract::State, response::Json, routing::get, Router};
use serde_json::json;

use crate::state::AppState;
use crate::utils::errors::AppResult;

pub fn create_health_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/health/ready", get(readiness_check))
}

/// Liveness: responde mientras el proceso esté sirviendo requests
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "success": true,
        "message": "E-commerce API is healthy! 🚀",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Readiness: 503 si PostgreSQL o Redis no responden
async fn readiness_check(State(state): State<AppState>) -> AppResult<Json<serde_json::Value>> {
    state.product_service.check_readiness().await?;

    Ok(Json(json!({
        "success": true,
        "message": "E-commerce API is ready",
        "timestamp": chrono::Utc::now().to_rfc3339()
    })))
}
