//! Token claims for JWT-based authentication.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{AppError, AppResult};

/// JWT issuer
pub const JWT_ISSUER: &str = "errpipe";

/// Claims structure for JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Issuer
    pub iss: String,
}

impl Claims {
    /// Claims for `user_id` valid for `ttl_seconds` from now
    pub fn new(user_id: Uuid, ttl_seconds: i64) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::seconds(ttl_seconds);
        Self::with_expiry(user_id, now.timestamp(), expiry.timestamp())
    }

    /// Claims with explicit issue and expiry timestamps
    pub fn with_expiry(user_id: Uuid, iat: i64, exp: i64) -> Self {
        Self {
            sub: user_id.to_string(),
            iat,
            exp,
            iss: JWT_ISSUER.to_string(),
        }
    }

    /// Parse the subject back into a user id.
    ///
    /// A signed token with a non-UUID subject is treated as invalid.
    pub fn user_id(&self) -> AppResult<Uuid> {
        Uuid::parse_str(&self.sub).map_err(|_| AppError::InvalidToken)
    }
}
