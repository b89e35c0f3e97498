pub mod error_handler;

pub use error_handler::{ErrorMiddleware, RequestId, RequestIdExt, REQUEST_ID_HEADER};
