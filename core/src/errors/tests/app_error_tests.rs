//! Unit tests for AppError normalization

use crate::errors::{AppError, ErrorKind, NormalizedError, DEFAULT_MESSAGE};

#[test]
fn test_unset_message_and_status_use_defaults() {
    let normalized = AppError::internal().normalize();
    assert_eq!(normalized.status_code, 500);
    assert_eq!(normalized.message, DEFAULT_MESSAGE);
}

#[test]
fn test_empty_message_and_zero_status_count_as_unset() {
    let error = AppError::Custom {
        message: Some(String::new()),
        status_code: Some(0),
    };
    let normalized = error.normalize();
    assert_eq!(normalized.status_code, 500);
    assert_eq!(normalized.message, "Internal Server Error");
}

#[test]
fn test_explicit_error_passes_through() {
    let normalized = AppError::new("User not found", 404).normalize();
    assert_eq!(normalized.status_code, 404);
    assert_eq!(normalized.message, "User not found");
}

#[test]
fn test_message_without_status_resolves_to_500() {
    let normalized = AppError::from_message("connection reset").normalize();
    assert_eq!(normalized.status_code, 500);
    assert_eq!(normalized.message, "connection reset");
}

#[test]
fn test_cast_error() {
    let error = AppError::Cast {
        path: "id".to_string(),
    };
    let normalized = error.normalize();
    assert_eq!(normalized.status_code, 400);
    assert_eq!(normalized.message, "Resource not found. Invalid id");
    assert_eq!(error.kind(), ErrorKind::ResourceNotFound);
}

#[test]
fn test_duplicate_key_single_field() {
    let error = AppError::duplicate_key(["email"]);
    let normalized = error.normalize();
    assert_eq!(normalized.status_code, 400);
    assert_eq!(normalized.message, "Duplicate email entered");
    assert_eq!(error.kind(), ErrorKind::DuplicateEntry);
}

#[test]
fn test_duplicate_key_fields_are_comma_joined() {
    let normalized = AppError::duplicate_key(["tenant", "email"]).normalize();
    assert_eq!(normalized.message, "Duplicate tenant,email entered");
}

#[test]
fn test_duplicate_key_without_fields_degrades_to_defaults() {
    let error = AppError::DuplicateKey { fields: vec![] };
    let normalized = error.normalize();
    assert_eq!(normalized.status_code, 500);
    assert_eq!(normalized.message, DEFAULT_MESSAGE);
    assert_eq!(error.kind(), ErrorKind::Uncategorized);
}

#[test]
fn test_token_errors() {
    let invalid = AppError::InvalidToken.normalize();
    assert_eq!(invalid.status_code, 400);
    assert_eq!(invalid.message, "JSON web token is invalid, try again");

    let expired = AppError::TokenExpired.normalize();
    assert_eq!(expired.status_code, 400);
    assert_eq!(expired.message, "JSON web token has expired, try again");
}

#[test]
fn test_normalize_is_idempotent() {
    let errors = vec![
        AppError::internal(),
        AppError::new("Forbidden", 403),
        AppError::Cast {
            path: "id".to_string(),
        },
        AppError::duplicate_key(["email"]),
        AppError::InvalidToken,
        AppError::TokenExpired,
    ];

    for error in errors {
        let once = error.normalize();
        let twice = AppError::from(once.clone()).normalize();
        assert_eq!(once, twice, "re-normalizing {:?} changed the result", error);
    }
}

#[test]
fn test_display_matches_normalized_message() {
    let error = AppError::TokenExpired;
    assert_eq!(error.to_string(), error.normalize().message);
    assert_eq!(AppError::internal().to_string(), DEFAULT_MESSAGE);
}

#[test]
fn test_server_error_flag() {
    assert!(AppError::internal().is_server_error());
    assert!(!AppError::InvalidToken.is_server_error());
    assert!(!AppError::new("Not found", 404).is_server_error());
}

#[test]
fn test_normalized_error_serializes_camel_case() {
    let normalized = NormalizedError {
        status_code: 400,
        message: "bad".to_string(),
    };
    let json = serde_json::to_value(&normalized).unwrap();
    assert_eq!(json, serde_json::json!({ "statusCode": 400, "message": "bad" }));
}
