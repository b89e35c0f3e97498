//! Runtime configuration for the API server

pub mod error_config;

use std::env;

use errpipe_core::services::token::DEVELOPMENT_SECRET;
use errpipe_core::TokenServiceConfig;
use errpipe_shared::{Environment, LoggingConfig, ServerConfig};

pub use error_config::ErrorConfig;

/// Everything the server binary needs, read once at startup
#[derive(Debug, Clone)]
pub struct Config {
    pub environment: Environment,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub errors: ErrorConfig,
    pub token: TokenServiceConfig,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `JWT_SECRET` is mandatory in production; elsewhere a fixed
    /// development secret is used when it is unset.
    pub fn from_env() -> Result<Self, String> {
        let environment = Environment::from_env();

        Ok(Self {
            environment,
            server: ServerConfig::from_env()?,
            logging: LoggingConfig::for_environment(environment),
            errors: ErrorConfig::from_env(environment)?,
            token: token_config_from_env(environment)?,
        })
    }
}

fn token_config_from_env(environment: Environment) -> Result<TokenServiceConfig, String> {
    let secret = match env::var("JWT_SECRET") {
        Ok(secret) if !secret.is_empty() => secret,
        _ if environment.is_production() => {
            return Err("JWT_SECRET must be set in production".to_string())
        }
        _ => DEVELOPMENT_SECRET.to_string(),
    };

    let mut config = TokenServiceConfig::new(secret);
    if let Ok(raw) = env::var("JWT_EXPIRY_SECONDS") {
        let expiry = raw
            .parse::<i64>()
            .ok()
            .filter(|seconds| *seconds > 0)
            .ok_or_else(|| format!("JWT_EXPIRY_SECONDS must be a positive number, got {:?}", raw))?;
        config = config.with_expiry_seconds(expiry);
    }

    Ok(config)
}
