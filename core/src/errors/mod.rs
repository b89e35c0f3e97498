//! Application error model and classification.
//!
//! Every failure that reaches the HTTP boundary is an [`AppError`]. Loosely
//! typed failures raised by collaborators arrive as [`RawError`] and are
//! classified once through the rule table in [`classify`].

mod app_error;
pub mod classify;
mod persistence;
mod token;

#[cfg(test)]
mod tests;

pub use app_error::{
    AppError, AppResult, ErrorKind, NormalizedError, CLASSIFIED_STATUS, DEFAULT_MESSAGE,
    DEFAULT_STATUS,
};
pub use classify::{ClassificationRule, Matcher, RawError, DUPLICATE_KEY_CODE};
pub use persistence::duplicate_key_fields;
