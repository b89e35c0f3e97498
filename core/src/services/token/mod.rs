//! Token service module for JWT management
//!
//! Issues HS256 access tokens and verifies them. Verification failures are
//! reported as the token classes of [`crate::errors::AppError`].

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::{TokenServiceConfig, DEVELOPMENT_SECRET};
pub use service::TokenService;
