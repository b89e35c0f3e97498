//! The application error type and its normalization into a status/message pair.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message used when an error carries none
pub const DEFAULT_MESSAGE: &str = "Internal Server Error";

/// Status used when an error carries none
pub const DEFAULT_STATUS: u16 = 500;

/// Status assigned by every classification rule
pub const CLASSIFIED_STATUS: u16 = 400;

/// Failure raised anywhere below the HTTP boundary.
///
/// The first four variants are the recognised classifications; `Custom` is
/// the fallback carrying whatever message and status the raiser supplied.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// An identifier failed to parse (e.g. a malformed id in the path)
    #[error("Resource not found. Invalid {path}")]
    Cast { path: String },

    /// A uniqueness constraint was violated on the listed fields
    #[error("{}", duplicate_message(.fields))]
    DuplicateKey { fields: Vec<String> },

    /// Token is malformed or its signature does not verify
    #[error("JSON web token is invalid, try again")]
    InvalidToken,

    /// Token signature is valid but the token has expired
    #[error("JSON web token has expired, try again")]
    TokenExpired,

    /// Explicit application error, or an unclassified failure
    #[error("{}", custom_message(.message))]
    Custom {
        message: Option<String>,
        status_code: Option<u16>,
    },
}

/// Result type returned by handlers and services
pub type AppResult<T> = Result<T, AppError>;

/// Error taxonomy, one entry per response class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Uncategorized,
    ResourceNotFound,
    DuplicateEntry,
    InvalidToken,
    ExpiredToken,
}

/// Resolved status code and message of an error
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedError {
    pub status_code: u16,
    pub message: String,
}

impl AppError {
    /// Create an error with an explicit message and HTTP status code
    pub fn new(message: impl Into<String>, status_code: u16) -> Self {
        AppError::Custom {
            message: Some(message.into()),
            status_code: Some(status_code),
        }
    }

    /// Create an error with a message but no status (resolves to 500)
    pub fn from_message(message: impl Into<String>) -> Self {
        AppError::Custom {
            message: Some(message.into()),
            status_code: None,
        }
    }

    /// Create an error with neither message nor status
    pub fn internal() -> Self {
        AppError::Custom {
            message: None,
            status_code: None,
        }
    }

    /// Create a duplicate-key error for the given offending fields
    pub fn duplicate_key<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        AppError::DuplicateKey {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Classification this error resolves to
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Cast { .. } => ErrorKind::ResourceNotFound,
            AppError::DuplicateKey { fields } if !fields.is_empty() => ErrorKind::DuplicateEntry,
            AppError::InvalidToken => ErrorKind::InvalidToken,
            AppError::TokenExpired => ErrorKind::ExpiredToken,
            AppError::DuplicateKey { .. } | AppError::Custom { .. } => ErrorKind::Uncategorized,
        }
    }

    /// Resolved HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            AppError::Cast { .. } | AppError::InvalidToken | AppError::TokenExpired => {
                CLASSIFIED_STATUS
            }
            AppError::DuplicateKey { fields } if !fields.is_empty() => CLASSIFIED_STATUS,
            AppError::DuplicateKey { .. } => DEFAULT_STATUS,
            AppError::Custom { status_code, .. } => resolve_status(*status_code),
        }
    }

    /// Whether the resolved status is in the 5xx range
    pub fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }

    /// Resolve this error into the status and message sent to the client.
    ///
    /// Total over all variants and never fails. A duplicate-key error without
    /// offending fields is malformed and degrades to the defaults.
    pub fn normalize(&self) -> NormalizedError {
        NormalizedError {
            status_code: self.status_code(),
            message: self.to_string(),
        }
    }
}

impl From<NormalizedError> for AppError {
    fn from(normalized: NormalizedError) -> Self {
        AppError::new(normalized.message, normalized.status_code)
    }
}

fn resolve_status(status_code: Option<u16>) -> u16 {
    status_code.filter(|code| *code != 0).unwrap_or(DEFAULT_STATUS)
}

fn custom_message(message: &Option<String>) -> &str {
    message
        .as_deref()
        .filter(|message| !message.is_empty())
        .unwrap_or(DEFAULT_MESSAGE)
}

fn duplicate_message(fields: &[String]) -> String {
    if fields.is_empty() {
        DEFAULT_MESSAGE.to_string()
    } else {
        format!("Duplicate {} entered", fields.join(","))
    }
}
