//! Shared types for the Errpipe server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types (environment, server, logging)
//! - Response body shapes

pub mod config;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{Environment, LogFormat, LoggingConfig, ServerConfig};
pub use types::{ApiResponse, ErrorBody};
