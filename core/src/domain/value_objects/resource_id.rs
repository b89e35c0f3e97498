//! Identifier parsed from untrusted input.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::errors::{AppError, AppResult};

/// A UUID taken from a request path or body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(Uuid);

impl ResourceId {
    /// Parse `raw` as the value of the field named `path`.
    ///
    /// A malformed value yields [`AppError::Cast`] naming `path`.
    pub fn parse(path: &str, raw: &str) -> AppResult<Self> {
        Uuid::parse_str(raw.trim()).map(ResourceId).map_err(|err| {
            tracing::debug!(path, error = %err, "identifier failed to parse");
            AppError::Cast {
                path: path.to_string(),
            }
        })
    }

    pub fn into_inner(self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for ResourceId {
    fn from(id: Uuid) -> Self {
        ResourceId(id)
    }
}

impl From<ResourceId> for Uuid {
    fn from(id: ResourceId) -> Self {
        id.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_id() {
        let id = Uuid::new_v4();
        let parsed = ResourceId::parse("id", &id.to_string()).unwrap();
        assert_eq!(parsed.into_inner(), id);
    }

    #[test]
    fn test_parse_invalid_id_is_cast_error() {
        let err = ResourceId::parse("id", "not-a-uuid").unwrap_err();
        assert_eq!(err, AppError::Cast { path: "id".to_string() });
        assert_eq!(err.normalize().message, "Resource not found. Invalid id");
        assert_eq!(err.normalize().status_code, 400);
    }

    #[test]
    fn test_parse_names_the_offending_field() {
        let err = ResourceId::parse("owner_id", "42").unwrap_err();
        assert_eq!(err.to_string(), "Resource not found. Invalid owner_id");
    }
}
