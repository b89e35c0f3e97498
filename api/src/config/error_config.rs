use std::env;

use errpipe_shared::Environment;

/// Error response configuration options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorConfig {
    /// Log 4xx responses at warn level (5xx are always logged)
    pub log_client_errors: bool,

    /// Echo the request id in the `X-Request-ID` response header
    pub echo_request_id: bool,
}

impl Default for ErrorConfig {
    fn default() -> Self {
        Self::development()
    }
}

impl ErrorConfig {
    /// Create production configuration
    pub fn production() -> Self {
        Self {
            log_client_errors: false,
            echo_request_id: true,
        }
    }

    /// Create development configuration
    pub fn development() -> Self {
        Self {
            log_client_errors: true,
            echo_request_id: true,
        }
    }

    pub fn for_environment(environment: Environment) -> Self {
        if environment.is_production() {
            Self::production()
        } else {
            Self::development()
        }
    }

    /// Environment defaults, overridden by `LOG_CLIENT_ERRORS` when set
    pub fn from_env(environment: Environment) -> Result<Self, String> {
        let mut config = Self::for_environment(environment);

        if let Ok(raw) = env::var("LOG_CLIENT_ERRORS") {
            config.log_client_errors = parse_flag(&raw)
                .ok_or_else(|| format!("LOG_CLIENT_ERRORS must be true or false, got {:?}", raw))?;
        }

        Ok(config)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_production_hides_client_errors() {
        let config = ErrorConfig::for_environment(Environment::Production);
        assert!(!config.log_client_errors);
        assert!(config.echo_request_id);
    }

    #[test]
    fn test_staging_uses_development_defaults() {
        assert_eq!(
            ErrorConfig::for_environment(Environment::Staging),
            ErrorConfig::development()
        );
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag(" off "), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }
}
