//! Manejo de panics en handlers
//! 
//! Convierte cualquier panic en un 500 con el sobre estándar.
//! El detalle solo se expone en modo desarrollo.

use std::any::Any;

use axum::{
    body::Body,
    http::{header, Response, StatusCode},
};
use serde_json::json;
use tower_http::catch_panic::{CatchPanicLayer, ResponseForPanic};
use tracing::error;

#[derive(Debug, Clone, Copy)]
pub struct PanicHandler {
    is_development: bool,
}

impl PanicHandler {
    pub fn new(is_development: bool) -> Self {
        Self { is_development }
    }
}

impl ResponseForPanic for PanicHandler {
    type ResponseBody = Body;

    fn response_for_panic(&mut self, err: Box<dyn Any + Send + 'static>) -> Response<Self::ResponseBody> {
        let detail = if let Some(s) = err.downcast_ref::<String>() {
            s.clone()
        } else if let Some(s) = err.downcast_ref::<&str>() {
            s.to_string()
        } else {
            "unknown panic".to_string()
        };

        error!("💥 Panic en handler: {}", detail);

        let body = if self.is_development {
            json!({ "success": false, "message": "Internal server error", "error": detail })
        } else {
            json!({ "success": false, "message": "Internal server error" })
        };

        let mut response = Response::new(Body::from(body.to_string()));
        *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );
        response
    }
}

pub fn catch_panic_layer(is_development: bool) -> CatchPanicLayer<PanicHandler> {
    CatchPanicLayer::custom(PanicHandler::new(is_development))
}
