//! Detalle de errores internos
//!
//! Los errores 5xx viajan con un `ErrorDetail` en las extensiones de la
//! respuesta. En desarrollo se copia al cuerpo JSON como `"error"`; en
//! cualquier otro entorno el cuerpo queda con el mensaje genérico.

use axum::{
    body::{to_bytes, Body},
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use serde_json::Value;
use tracing::warn;

use crate::utils::errors::ErrorDetail;

pub async fn expose_error_detail(
    State(is_development): State<bool>,
    request: Request,
    next: Next,
) -> Response {
    let response = next.run(request).await;
    if !is_development {
        return response;
    }

    let Some(ErrorDetail(detail)) = response.extensions().get::<ErrorDetail>().cloned() else {
        return response;
    };

    let (mut parts, body) = response.into_parts();
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!("⚠️ No se pudo leer el cuerpo del error: {}", e);
            return Response::from_parts(parts, Body::empty());
        }
    };

    let mut value: Value = match serde_json::from_slice(&bytes) {
        Ok(value) => value,
        Err(_) => return Response::from_parts(parts, Body::from(bytes)),
    };
    if let Some(object) = value.as_object_mut() {
        object.insert("error".to_string(), Value::String(detail));
    }

    parts.headers.remove(header::CONTENT_LENGTH);
    Response::from_parts(parts, Body::from(value.to_string()))
}
