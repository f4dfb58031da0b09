//! DTOs de la API
//! 
//! Requests de entrada y el sobre genérico de respuesta.

pub mod api_response;
pub mod product_dto;

pub use api_response::ApiResponse;
pub use product_dto::CreateProductRequest;
