//! Route handlers
//!
//! Every error class the pipeline knows about can be produced through one
//! of these endpoints.

pub mod errors;
pub mod health;
pub mod sessions;
pub mod users;
