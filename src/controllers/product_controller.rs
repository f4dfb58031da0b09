use std::sync::Arc;

use crate::dto::api_response::ApiResponse;
use crate::dto::product_dto::CreateProductRequest;
use crate::models::product::Product;
use crate::services::ProductService;
use crate::utils::errors::AppError;

pub struct ProductController {
    service: Arc<ProductService>,
}

impl ProductController {
    pub fn new(service: Arc<ProductService>) -> Self {
        Self { service }
    }

    pub async fn list(&self) -> Result<ApiResponse<Vec<Product>>, AppError> {
        let products = self.service.get_all_products().await?;
        Ok(ApiResponse::list(products))
    }

    pub async fn get_by_id(&self, id: &str) -> Result<ApiResponse<Product>, AppError> {
        let product = self.service.get_product_by_id(id).await?;
        Ok(ApiResponse::success(product))
    }

    pub async fn create(&self, request: CreateProductRequest) -> Result<ApiResponse<Product>, AppError> {
        let product = self.service.create_product(request).await?;

        Ok(ApiResponse::success_with_message(
            product,
            "Product created successfully".to_string(),
        ))
    }
}
