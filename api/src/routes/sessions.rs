use actix_web::{http::header, web, HttpRequest, HttpResponse};
use validator::Validate;

use errpipe_core::AppError;
use errpipe_shared::ApiResponse;

use crate::app::AppState;
use crate::dto::{SessionRequest, SessionResponse, UserResponse};
use crate::handlers::ApiError;

const LOGIN_REQUIRED: &str = "Please login to access this resource";

/// Handler for POST /api/v1/sessions
///
/// Issues an access token for an existing user. Returns `ApiError`
/// directly, so failures are rendered through `ResponseError`.
pub async fn create_session(
    state: web::Data<AppState>,
    request: web::Json<SessionRequest>,
) -> Result<HttpResponse, ApiError> {
    request.validate()?;

    let user = state
        .users
        .find_by_email(&request.email)
        .await?
        .ok_or_else(|| AppError::new("Invalid email", 401))?;

    let access_token = state.tokens.issue(user.id)?;
    log::debug!("Issued access token for user {}", user.id);

    Ok(HttpResponse::Created().json(ApiResponse::success(SessionResponse::bearer(
        access_token,
        state.tokens.expiry_seconds(),
    ))))
}

/// Handler for GET /api/v1/me
///
/// # Errors
/// * 401 when no Bearer token is supplied
/// * 400 `JSON web token is invalid, try again` for a bad token
/// * 400 `JSON web token has expired, try again` for an expired token
pub async fn me(req: HttpRequest, state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let token = bearer_token(&req).ok_or_else(|| AppError::new(LOGIN_REQUIRED, 401))?;
    let claims = state.tokens.verify(token)?;

    let user = state
        .users
        .find_by_id(claims.user_id()?)
        .await?
        .ok_or_else(|| AppError::new("User not found", 404))?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(UserResponse::from(user))))
}

/// Token from an `Authorization: Bearer <token>` header
pub fn bearer_token(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
