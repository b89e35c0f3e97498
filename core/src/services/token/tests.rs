//! Unit tests for token service

use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use uuid::Uuid;

use crate::domain::entities::token::Claims;
use crate::errors::AppError;
use crate::services::token::{TokenService, TokenServiceConfig};

fn service() -> TokenService {
    TokenService::new(TokenServiceConfig::new("test-secret"))
}

#[test]
fn test_issue_and_verify() {
    let service = service();
    let user_id = Uuid::new_v4();

    let token = service.issue(user_id).unwrap();
    let claims = service.verify(&token).unwrap();

    assert_eq!(claims.user_id().unwrap(), user_id);
    assert_eq!(claims.exp - claims.iat, service.expiry_seconds());
}

#[test]
fn test_expired_token() {
    let service = service();
    let now = Utc::now().timestamp();
    let token = service
        .sign(&Claims::with_expiry(Uuid::new_v4(), now - 7200, now - 3600))
        .unwrap();

    let err = service.verify(&token).unwrap_err();
    assert_eq!(err, AppError::TokenExpired);
    assert_eq!(err.normalize().message, "JSON web token has expired, try again");
}

#[test]
fn test_malformed_token() {
    let err = service().verify("not.a.jwt").unwrap_err();
    assert_eq!(err, AppError::InvalidToken);
    assert_eq!(err.normalize().status_code, 400);
}

#[test]
fn test_token_signed_with_other_secret() {
    let other = TokenService::new(TokenServiceConfig::new("other-secret"));
    let token = other.issue(Uuid::new_v4()).unwrap();

    assert_eq!(service().verify(&token).unwrap_err(), AppError::InvalidToken);
}

#[test]
fn test_token_from_other_issuer() {
    let mut claims = Claims::new(Uuid::new_v4(), 600);
    claims.iss = "someone-else".to_string();
    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(b"test-secret"),
    )
    .unwrap();

    assert_eq!(service().verify(&token).unwrap_err(), AppError::InvalidToken);
}
