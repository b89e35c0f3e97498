use actix_web::{web, HttpResponse};
use serde_json::Value;

use errpipe_core::RawError;

use crate::handlers::{error_middleware, ApiError};

/// Handler for POST /api/v1/errors/raw
///
/// Normalizes a failure forwarded by an upstream service, e.g.
/// `{"name": "CastError", "path": "id"}` answers 400
/// `Resource not found. Invalid id`. Any JSON body is accepted; fields of
/// the wrong type are ignored.
pub async fn normalize_raw(body: web::Json<Value>) -> HttpResponse {
    let raw = RawError::from_value(body.into_inner());
    log::debug!("Normalizing forwarded failure {:?}", raw);
    error_middleware(raw)
}

/// Default service: 404 in the uniform shape
pub async fn not_found() -> Result<HttpResponse, ApiError> {
    Err(ApiError::new("The requested resource was not found", 404))
}
