use actix_web::{web, HttpResponse};
use validator::Validate;

use errpipe_core::{AppError, ResourceId, User};
use errpipe_shared::ApiResponse;

use crate::app::AppState;
use crate::dto::{CreateUserRequest, UserResponse};
use crate::handlers::validation_error;

/// Handler for POST /api/v1/users
///
/// # Errors
/// * 400 `Please enter a valid email` when validation fails
/// * 400 `Duplicate email entered` when the email is taken
pub async fn create_user(
    state: web::Data<AppState>,
    request: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate().map_err(validation_error)?;

    let user = state.users.create(User::new(request.name, request.email)).await?;
    log::info!("Created user {}", user.id);

    Ok(HttpResponse::Created().json(ApiResponse::success(UserResponse::from(user))))
}

/// Handler for GET /api/v1/users/{id}
///
/// A malformed id is a cast failure on `id`; an unknown id is a 404.
pub async fn get_user(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = ResourceId::parse("id", &path.into_inner())?;

    let user = state
        .users
        .find_by_id(id.into_inner())
        .await?
        .ok_or_else(|| AppError::new("User not found", 404))?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(UserResponse::from(user))))
}
