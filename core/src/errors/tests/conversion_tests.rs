//! Unit tests for collaborator error conversions

use std::borrow::Cow;
use std::fmt;

use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use sqlx::error::{DatabaseError, ErrorKind as DbErrorKind};

use crate::errors::{duplicate_key_fields, AppError};

#[test]
fn test_jwt_expired_signature() {
    let err: jsonwebtoken::errors::Error = JwtErrorKind::ExpiredSignature.into();
    assert_eq!(AppError::from(err), AppError::TokenExpired);
}

#[test]
fn test_jwt_invalid_kinds() {
    for kind in [
        JwtErrorKind::InvalidToken,
        JwtErrorKind::InvalidSignature,
        JwtErrorKind::InvalidAlgorithm,
        JwtErrorKind::InvalidIssuer,
    ] {
        let err: jsonwebtoken::errors::Error = kind.into();
        assert_eq!(AppError::from(err), AppError::InvalidToken);
    }
}

#[test]
fn test_jwt_immature_signature_is_unclassified() {
    let err: jsonwebtoken::errors::Error = JwtErrorKind::ImmatureSignature.into();
    let normalized = AppError::from(err).normalize();
    assert_eq!(normalized.status_code, 500);
    assert_eq!(normalized.message, "Token not yet valid");
}

#[test]
fn test_duplicate_key_fields_mysql() {
    assert_eq!(
        duplicate_key_fields("Duplicate entry 'ada@example.com' for key 'users.email'"),
        vec!["email"]
    );
    assert_eq!(
        duplicate_key_fields("Duplicate entry 'ada' for key 'username'"),
        vec!["username"]
    );
}

#[test]
fn test_duplicate_key_fields_postgres() {
    assert_eq!(
        duplicate_key_fields("Key (tenant_id, email)=(1, ada@example.com) already exists."),
        vec!["tenant_id", "email"]
    );
}

#[test]
fn test_duplicate_key_fields_unrecognised() {
    assert!(duplicate_key_fields("deadlock detected").is_empty());
}

#[test]
fn test_sqlx_row_not_found() {
    let normalized = AppError::from(sqlx::Error::RowNotFound).normalize();
    assert_eq!(normalized.status_code, 404);
    assert_eq!(normalized.message, "Resource not found");
}

#[test]
fn test_sqlx_other_errors_pass_message_through() {
    let error = AppError::from(sqlx::Error::PoolTimedOut);
    let normalized = error.normalize();
    assert_eq!(normalized.status_code, 500);
    assert_eq!(normalized.message, sqlx::Error::PoolTimedOut.to_string());
}

#[derive(Debug)]
struct FakeDatabaseError {
    message: String,
    unique: bool,
}

impl fmt::Display for FakeDatabaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for FakeDatabaseError {}

impl DatabaseError for FakeDatabaseError {
    fn message(&self) -> &str {
        &self.message
    }

    fn code(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed("23000"))
    }

    fn as_error(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        self
    }

    fn as_error_mut(&mut self) -> &mut (dyn std::error::Error + Send + Sync + 'static) {
        self
    }

    fn into_error(self: Box<Self>) -> Box<dyn std::error::Error + Send + Sync + 'static> {
        self
    }

    fn kind(&self) -> DbErrorKind {
        if self.unique {
            DbErrorKind::UniqueViolation
        } else {
            DbErrorKind::Other
        }
    }
}

fn database_error(message: &str, unique: bool) -> sqlx::Error {
    sqlx::Error::Database(Box::new(FakeDatabaseError {
        message: message.to_string(),
        unique,
    }))
}

#[test]
fn test_sqlx_unique_violation() {
    let err = database_error(
        "Duplicate entry 'ada@example.com' for key 'users.email'",
        true,
    );
    let normalized = AppError::from(err).normalize();
    assert_eq!(normalized.status_code, 400);
    assert_eq!(normalized.message, "Duplicate email entered");
}

#[test]
fn test_sqlx_unique_violation_without_key_degrades() {
    let err = database_error("unique violation", true);
    let normalized = AppError::from(err).normalize();
    assert_eq!(normalized.status_code, 500);
    assert_eq!(normalized.message, "Internal Server Error");
}

#[test]
fn test_sqlx_other_database_error() {
    let err = database_error("Cannot add or update a child row", false);
    let normalized = AppError::from(err).normalize();
    assert_eq!(normalized.status_code, 500);
    assert!(normalized.message.contains("Cannot add or update a child row"));
}
