//! Configuration module
//!
//! - `environment` - Environment detection and logging configuration
//! - `server` - HTTP server configuration

pub mod environment;
pub mod server;

pub use environment::{Environment, LogFormat, LoggingConfig};
pub use server::ServerConfig;
