//! # Errpipe Core
//!
//! Error model and domain layer for the Errpipe backend: the application
//! error type with its classification rules, the async boundary that routes
//! handler failures into the error pipeline, and the user/token domain that
//! raises those errors.

pub mod domain;
pub mod errors;
pub mod pipeline;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{Claims, ResourceId, User};
pub use errors::{AppError, AppResult, ErrorKind, NormalizedError, RawError};
pub use pipeline::route_failure;
pub use repositories::{InMemoryUserRepository, UserRepository};
pub use services::{TokenService, TokenServiceConfig};
