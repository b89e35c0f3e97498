//! Error handling at the HTTP boundary

pub mod catch_async;
pub mod error;

pub use catch_async::{catch_async_error, CatchAsyncError};
pub use error::{error_middleware, validation_error, ApiError};
