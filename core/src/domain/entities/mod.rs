//! Domain entities.

pub mod token;
pub mod user;


// Re-export commonly used types
pub use token::{Claims, JWT_ISSUER};
pub use user::User;
