//! Mapping of token verification errors onto [`AppError`].

use jsonwebtoken::errors::{Error as JwtError, ErrorKind as JwtErrorKind};

use super::app_error::AppError;

impl From<JwtError> for AppError {
    fn from(err: JwtError) -> Self {
        match err.kind() {
            JwtErrorKind::ExpiredSignature => AppError::TokenExpired,
            // "Not before" failures are not one of the recognised classes
            JwtErrorKind::ImmatureSignature => AppError::from_message("Token not yet valid"),
            _ => {
                tracing::debug!(error = %err, "token rejected");
                AppError::InvalidToken
            }
        }
    }
}
