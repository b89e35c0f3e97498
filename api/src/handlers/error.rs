//! HTTP rendering of application errors.
//!
//! [`ApiError`] is the failure arm of every handler result. Rendering goes
//! through [`AppError::normalize`], so the body is always
//! `{"success": false, "message": "..."}`.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use errpipe_core::errors::{AppError, NormalizedError, RawError};
use errpipe_shared::types::ErrorBody;
use thiserror::Error;
use validator::ValidationErrors;

/// Message used when a request body fails validation without a field message
const INVALID_BODY_MESSAGE: &str = "Invalid request body";

/// Application error at the HTTP boundary
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error(transparent)]
pub struct ApiError(#[from] AppError);

impl ApiError {
    /// Error with an explicit message and status
    pub fn new(message: impl Into<String>, status_code: u16) -> Self {
        Self(AppError::new(message, status_code))
    }

    /// Rebuild an arbitrary actix error as an [`ApiError`].
    ///
    /// Errors that already are an `ApiError` are returned as is; anything
    /// else keeps its own status and display message.
    pub fn from_actix(err: &actix_web::Error) -> Self {
        if let Some(api_error) = err.as_error::<ApiError>() {
            return api_error.clone();
        }

        let status = err.as_response_error().status_code();
        Self::new(err.to_string(), status.as_u16())
    }

    pub fn inner(&self) -> &AppError {
        &self.0
    }

    pub fn into_inner(self) -> AppError {
        self.0
    }

    /// Resolved status and message
    pub fn normalized(&self) -> NormalizedError {
        self.0.normalize()
    }
}

impl From<RawError> for ApiError {
    fn from(raw: RawError) -> Self {
        Self(raw.into())
    }
}

impl From<jsonwebtoken::errors::Error> for ApiError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        Self(err.into())
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        Self(err.into())
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        Self(validation_error(errors))
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        let NormalizedError { message, .. } = self.normalized();
        HttpResponse::build(self.status_code()).json(ErrorBody::new(message))
    }
}

/// Terminal stage of the error pipeline.
///
/// Normalizes the error and renders the uniform JSON body. The returned
/// response carries the [`ApiError`], which marks it as already normalized
/// for [`ErrorMiddleware`](crate::middleware::ErrorMiddleware).
pub fn error_middleware(err: impl Into<ApiError>) -> HttpResponse {
    HttpResponse::from_error(err.into())
}

/// Convert request validation failures into a 400.
///
/// The first field message in field-name order is reported.
pub fn validation_error(errors: ValidationErrors) -> AppError {
    let field_errors = errors.field_errors();
    let mut fields: Vec<_> = field_errors.iter().collect();
    fields.sort_by(|a, b| a.0.cmp(b.0));

    let message = fields
        .into_iter()
        .flat_map(|(_, errs)| errs.iter())
        .find_map(|err| err.message.as_ref().map(|message| message.to_string()))
        .unwrap_or_else(|| INVALID_BODY_MESSAGE.to_string());

    AppError::new(message, 400)
}
