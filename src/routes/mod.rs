//! Rutas HTTP
//! 
//! Arma el router completo: rutas de catálogo (en la raíz y bajo `/api`),
//! fallback 404 y middleware transversal.

pub mod health_routes;
pub mod product_routes;

use axum::{http::StatusCode, middleware, response::Json, routing::get, Router};
use serde_json::json;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::dto::api_response::ApiResponse;
use crate::middleware::{catch_panic_layer, cors_middleware, expose_error_detail};
use crate::state::AppState;

/// Crear el router de la API (health + productos)
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .merge(health_routes::create_health_router())
        .nest("/products", product_routes::create_product_router())
}

/// Crear la aplicación completa con estado y middleware
pub fn create_router(state: AppState) -> Router {
    let api = create_api_router();
    let is_development = state.config.is_development();
    let cors = cors_middleware(&state.config.cors_origins);

    Router::new()
        .route("/", get(root))
        .merge(api.clone())
        .nest("/api", api)
        .fallback(route_not_found)
        .layer(middleware::from_fn_with_state(is_development, expose_error_detail))
        .layer(catch_panic_layer(is_development))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn root() -> Json<serde_json::Value> {
    Json(json!({
        "success": true,
        "message": "E-commerce API is running! 🚀",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "health": "/api/health",
            "ready": "/api/health/ready",
            "products": "/api/products"
        }
    }))
}

async fn route_not_found() -> (StatusCode, Json<ApiResponse<()>>) {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::error("Route not found".to_string())),
    )
}
