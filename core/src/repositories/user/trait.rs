//! User repository trait defining the interface for user persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::AppError;

/// Repository trait for User entity persistence operations
///
/// Implementations report storage failures as [`AppError`]; a uniqueness
/// violation on `email` must surface as a duplicate-key error so that the
/// error pipeline can classify it.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user found with given ID
    /// * `Err(AppError)` - Storage error occurred
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AppError>;

    /// Find a user by email address (compared case-insensitively)
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// Persist a new user
    ///
    /// # Returns
    /// * `Ok(User)` - The stored user
    /// * `Err(AppError::DuplicateKey)` - Another user already has this email
    async fn create(&self, user: User) -> Result<User, AppError>;
}
