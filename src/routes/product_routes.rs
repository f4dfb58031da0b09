use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use crate::controllers::ProductController;
use crate::dto::api_response::ApiResponse;
use crate::dto::product_dto::CreateProductRequest;
use crate::models::product::Product;
use crate::state::AppState;
use crate::utils::errors::{bad_request_error, AppError};

pub fn create_product_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/:id", get(get_product))
}

async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Product>>>, AppError> {
    let controller = ProductController::new(state.product_service.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

// El id llega como texto: un valor que no es UUID responde 404, no 400
async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Product>>, AppError> {
    let controller = ProductController::new(state.product_service.clone());
    let response = controller.get_by_id(&id).await?;
    Ok(Json(response))
}

async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<CreateProductRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<Product>>), AppError> {
    let Json(request) = payload.map_err(|rejection| bad_request_error(&rejection.body_text()))?;

    let controller = ProductController::new(state.product_service.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}
