//! Mapping of database driver errors onto [`AppError`].

use once_cell::sync::Lazy;
use regex::Regex;

use super::app_error::AppError;

/// MySQL: `Duplicate entry 'a@b.c' for key 'users.email'`
static MYSQL_DUPLICATE_KEY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"for key '([^']+)'").expect("valid mysql duplicate-key pattern"));

/// Postgres: `Key (email)=(a@b.c) already exists.`
static POSTGRES_DUPLICATE_KEY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Key \(([^)]+)\)=").expect("valid postgres duplicate-key pattern"));

/// Extract the offending field names from a duplicate-key driver message.
///
/// MySQL reports the index as `table.index`; the table prefix is dropped.
/// Returns an empty list when the message is in neither format.
pub fn duplicate_key_fields(message: &str) -> Vec<String> {
    if let Some(captures) = MYSQL_DUPLICATE_KEY.captures(message) {
        let key = &captures[1];
        let field = key.rsplit('.').next().unwrap_or(key);
        return vec![field.to_string()];
    }

    if let Some(captures) = POSTGRES_DUPLICATE_KEY.captures(message) {
        return captures[1]
            .split(',')
            .map(|field| field.trim().to_string())
            .filter(|field| !field.is_empty())
            .collect();
    }

    Vec::new()
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                let mut fields = duplicate_key_fields(db.message());
                if fields.is_empty() {
                    if let Some(constraint) = db.constraint() {
                        fields.push(constraint.to_string());
                    }
                }
                if fields.is_empty() {
                    tracing::warn!(
                        message = db.message(),
                        "unique violation without recognisable key"
                    );
                }
                AppError::DuplicateKey { fields }
            }
            sqlx::Error::RowNotFound => AppError::new("Resource not found", 404),
            other => {
                tracing::error!(error = %other, "unclassified database error");
                AppError::from_message(other.to_string())
            }
        }
    }
}
