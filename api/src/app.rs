//! Application state and factory
//!
//! Wires the route handlers, the error middleware and the shared state
//! into an actix-web [`App`].

use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web, App, Error,
};

use errpipe_core::{InMemoryUserRepository, TokenService, TokenServiceConfig, UserRepository};

use crate::config::ErrorConfig;
use crate::handlers::catch_async_error;
use crate::middleware::ErrorMiddleware;
use crate::routes::{errors, health, sessions, users};

/// Application state that holds shared services
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub tokens: TokenService,
}

impl AppState {
    pub fn new(users: Arc<dyn UserRepository>, tokens: TokenService) -> Self {
        Self { users, tokens }
    }

    /// State backed by the in-memory user store
    pub fn in_memory(token_config: TokenServiceConfig) -> Self {
        Self::new(
            Arc::new(InMemoryUserRepository::new()),
            TokenService::new(token_config),
        )
    }
}

/// Register all routes and the default 404 service
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/api/v1")
                .route("/users", web::post().to(catch_async_error(users::create_user)))
                .route("/users/{id}", web::get().to(catch_async_error(users::get_user)))
                .route("/sessions", web::post().to(sessions::create_session))
                .route("/me", web::get().to(catch_async_error(sessions::me)))
                .route("/errors/raw", web::post().to(errors::normalize_raw)),
        )
        .default_service(web::route().to(errors::not_found));
}

/// Create and configure the application with all dependencies
pub fn create_app(
    state: web::Data<AppState>,
    error_config: ErrorConfig,
    max_payload_size: usize,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(state)
        .app_data(web::JsonConfig::default().limit(max_payload_size))
        // Error middleware runs inside the access log so logged statuses are final
        .wrap(ErrorMiddleware::new(error_config))
        .wrap(Logger::default())
        .configure(configure)
}
