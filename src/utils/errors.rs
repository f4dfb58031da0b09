//! Sistema de manejo de errores
//! 
//! Este módulo define todos los tipos de errores del sistema
//! y su conversión a respuestas HTTP con el sobre `{success, message}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

use crate::utils::validation::describe_validation_errors;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Cache error: {0}")]
    Cache(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Validation failed: {}", describe_validation_errors(.0))]
    Validation(#[from] validator::ValidationErrors),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    /// Fallo en el camino de lectura (base de datos o cache)
    #[error("{message}: {detail}")]
    Retrieval { message: String, detail: String },

    /// Fallo de escritura no atribuible a los datos de entrada
    #[error("{0}")]
    Creation(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
}

/// Detalle interno de un error 5xx, adjunto como extensión de la respuesta.
///
/// Nunca se serializa en el cuerpo; `expose_error_detail` lo agrega
/// solo en modo desarrollo.
#[derive(Debug, Clone)]
pub struct ErrorDetail(pub String);

impl From<redis::RedisError> for AppError {
    fn from(err: redis::RedisError) -> Self {
        AppError::Cache(err.to_string())
    }
}

impl AppError {
    /// Código HTTP asociado a cada tipo de error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database(_)
            | AppError::Cache(_)
            | AppError::Serialization(_)
            | AppError::Retrieval { .. }
            | AppError::Creation(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Indica si el error proviene de una restricción violada en la base de datos
    pub fn is_constraint_violation(&self) -> bool {
        match self {
            AppError::Database(sqlx::Error::Database(db_error)) => !matches!(
                db_error.kind(),
                sqlx::error::ErrorKind::Other
            ),
            _ => false,
        }
    }
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    success: bool,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<serde_json::Value>,
}

impl ErrorResponse {
    fn message(message: String) -> Self {
        Self {
            success: false,
            message,
            errors: None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let (body, detail) = match self {
            AppError::Validation(ref errors) => {
                warn!("⚠️ Validation error: {}", self);
                let body = ErrorResponse {
                    success: false,
                    message: self.to_string(),
                    errors: Some(json!(errors)),
                };
                (body, None)
            }

            AppError::BadRequest(_) | AppError::NotFound(_) => {
                warn!("⚠️ {}: {}", status, self);
                (ErrorResponse::message(self.to_string()), None)
            }

            AppError::Retrieval { ref message, ref detail } => {
                error!("❌ Retrieval error: {}", self);
                (ErrorResponse::message(message.clone()), Some(detail.clone()))
            }

            AppError::Creation(ref detail) => {
                error!("❌ Creation error: {}", self);
                let body = ErrorResponse::message("Failed to create product".to_string());
                (body, Some(detail.clone()))
            }

            AppError::ServiceUnavailable(ref detail) => {
                warn!("⚠️ Readiness check failed: {}", detail);
                (ErrorResponse::message("Service not ready".to_string()), Some(detail.clone()))
            }

            AppError::Database(_)
            | AppError::Cache(_)
            | AppError::Serialization(_)
            | AppError::Internal(_) => {
                error!("❌ Unhandled error: {}", self);
                let body = ErrorResponse::message("Internal server error".to_string());
                (body, Some(self.to_string()))
            }
        };

        let mut response = (status, Json(body)).into_response();
        if let Some(detail) = detail {
            response.extensions_mut().insert(ErrorDetail(detail));
        }
        response
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(resource: &str) -> AppError {
    AppError::NotFound(format!("{} not found", resource))
}

/// Función helper para crear errores de solicitud incorrecta
pub fn bad_request_error(message: &str) -> AppError {
    AppError::BadRequest(message.to_string())
}
