//! Server configuration module

use serde::{Deserialize, Serialize};
use std::env;

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Worker threads (0 = number of CPU cores)
    #[serde(default)]
    pub workers: usize,

    /// Maximum JSON payload size in bytes
    #[serde(default = "default_max_payload_size")]
    pub max_payload_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("127.0.0.1"),
            port: 8080,
            workers: 0, // Use all CPU cores
            max_payload_size: default_max_payload_size(),
        }
    }
}

impl ServerConfig {
    /// Create a new server configuration
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Load from `SERVER_HOST`, `SERVER_PORT` and `SERVER_WORKERS`.
    ///
    /// Returns an error message naming the variable when a value is present but invalid.
    pub fn from_env() -> Result<Self, String> {
        let defaults = Self::default();

        let host = env::var("SERVER_HOST").unwrap_or(defaults.host);
        let port = match env::var("SERVER_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| format!("SERVER_PORT must be a valid port number, got {:?}", raw))?,
            Err(_) => defaults.port,
        };
        let workers = match env::var("SERVER_WORKERS") {
            Ok(raw) => raw
                .parse::<usize>()
                .map_err(|_| format!("SERVER_WORKERS must be a number, got {:?}", raw))?,
            Err(_) => defaults.workers,
        };

        Ok(Self {
            host,
            port,
            workers,
            max_payload_size: defaults.max_payload_size,
        })
    }

    /// Get the bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn default_max_payload_size() -> usize {
    256 * 1024 // 256 KB
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_default() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.workers, 0);
        assert_eq!(config.max_payload_size, 256 * 1024);
    }

    #[test]
    fn test_bind_address() {
        let config = ServerConfig::new("localhost", 3000);
        assert_eq!(config.bind_address(), "localhost:3000");
    }

    #[test]
    fn test_server_config_deserialize_with_defaults() {
        let config: ServerConfig =
            serde_json::from_str(r#"{"host": "0.0.0.0", "port": 9000}"#).unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.workers, 0);
        assert_eq!(config.max_payload_size, 256 * 1024);
    }
}
