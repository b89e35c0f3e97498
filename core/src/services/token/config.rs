//! Configuration for the token service

/// Secret used when none is configured outside production
pub const DEVELOPMENT_SECRET: &str = "development-secret-please-change-in-production";

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// HS256 signing secret
    pub jwt_secret: String,
    /// Access token lifetime in seconds
    pub expiry_seconds: i64,
    /// Clock skew tolerance applied to `exp` in seconds
    pub leeway_seconds: u64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: DEVELOPMENT_SECRET.to_string(),
            expiry_seconds: 3600,
            leeway_seconds: 0,
        }
    }
}

impl TokenServiceConfig {
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            ..Default::default()
        }
    }

    pub fn with_expiry_seconds(mut self, expiry_seconds: i64) -> Self {
        self.expiry_seconds = expiry_seconds;
        self
    }
}
