//! Classification of loosely typed failures.
//!
//! Collaborators such as document stores and token verifiers report failures
//! as a bag of optional fields. [`RULES`] maps the recognised shapes onto
//! [`AppError`] variants. Kind-name rules are listed before the numeric-code
//! rule, so an error carrying both a recognised name and code 11000 resolves
//! by name.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::app_error::AppError;

/// Numeric code reported by storage for a uniqueness constraint violation
pub const DUPLICATE_KEY_CODE: i64 = 11000;

/// A failure value as raised by a collaborator.
///
/// Deserializes from the camelCase JSON shape, e.g.
/// `{"name": "CastError", "path": "id"}` or
/// `{"code": 11000, "keyValue": {"email": "a@b.c"}}`. A field of the wrong
/// type is read as absent rather than rejecting the whole failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawError {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(
        default,
        alias = "status",
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub status_code: Option<u16>,

    /// Kind-name of the failure (e.g. `CastError`, `TokenExpiredError`)
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub code: Option<i64>,

    /// Field that failed to cast
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Offending key/value pairs of a duplicate-key failure
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub key_value: Option<Map<String, Value>>,
}

impl RawError {
    /// Read a failure from arbitrary JSON; anything that is not an object
    /// yields an empty failure.
    pub fn from_value(value: Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }

    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Default::default()
        }
    }

    pub fn with_status(mut self, status_code: u16) -> Self {
        self.status_code = Some(status_code);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_code(mut self, code: i64) -> Self {
        self.code = Some(code);
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_key_value(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.key_value
            .get_or_insert_with(Map::new)
            .insert(key.into(), value.into());
        self
    }
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// What a rule inspects on the incoming failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matcher {
    Name(&'static str),
    Code(i64),
}

impl Matcher {
    pub fn matches(&self, raw: &RawError) -> bool {
        match self {
            Matcher::Name(name) => raw.name.as_deref() == Some(*name),
            Matcher::Code(code) => raw.code == Some(*code),
        }
    }
}

/// A (matcher, transformer) pair.
///
/// The transformer returns `None` when the failure matched but lacks the
/// fields needed to build the message.
#[derive(Clone, Copy)]
pub struct ClassificationRule {
    pub matcher: Matcher,
    transform: fn(&RawError) -> Option<AppError>,
}

impl std::fmt::Debug for ClassificationRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClassificationRule")
            .field("matcher", &self.matcher)
            .finish_non_exhaustive()
    }
}

impl ClassificationRule {
    pub fn apply(&self, raw: &RawError) -> Option<AppError> {
        (self.transform)(raw)
    }
}

/// Rules in lookup order.
pub static RULES: [ClassificationRule; 4] = [
    ClassificationRule {
        matcher: Matcher::Name("CastError"),
        transform: cast_error,
    },
    ClassificationRule {
        matcher: Matcher::Name("JsonWebTokenError"),
        transform: invalid_token,
    },
    ClassificationRule {
        matcher: Matcher::Name("TokenExpiredError"),
        transform: expired_token,
    },
    ClassificationRule {
        matcher: Matcher::Code(DUPLICATE_KEY_CODE),
        transform: duplicate_key,
    },
];

/// First rule whose matcher accepts the failure
pub fn rule_for(raw: &RawError) -> Option<&'static ClassificationRule> {
    RULES.iter().find(|rule| rule.matcher.matches(raw))
}

/// Classify a raw failure.
///
/// At most one rule is consulted. Returns `None` when nothing matches or the
/// matching rule rejects a malformed failure.
pub fn classify(raw: &RawError) -> Option<AppError> {
    let rule = rule_for(raw)?;
    let classified = rule.apply(raw);
    if classified.is_none() {
        tracing::warn!(
            matcher = ?rule.matcher,
            "failure matched a classification rule but is malformed; using defaults"
        );
    }
    classified
}

impl From<RawError> for AppError {
    fn from(raw: RawError) -> Self {
        if let Some(classified) = classify(&raw) {
            return classified;
        }

        AppError::Custom {
            message: raw.message.filter(|message| !message.is_empty()),
            status_code: raw.status_code.filter(|code| *code != 0),
        }
    }
}

fn cast_error(raw: &RawError) -> Option<AppError> {
    let path = raw.path.as_deref().filter(|path| !path.is_empty())?;
    Some(AppError::Cast {
        path: path.to_string(),
    })
}

fn invalid_token(_: &RawError) -> Option<AppError> {
    Some(AppError::InvalidToken)
}

fn expired_token(_: &RawError) -> Option<AppError> {
    Some(AppError::TokenExpired)
}

fn duplicate_key(raw: &RawError) -> Option<AppError> {
    let key_value = raw.key_value.as_ref().filter(|map| !map.is_empty())?;
    Some(AppError::duplicate_key(key_value.keys().cloned()))
}
