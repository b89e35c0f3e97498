//! In-memory implementation of UserRepository

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::user::{normalize_email, User};
use crate::errors::{AppError, RawError, DUPLICATE_KEY_CODE};

use super::trait_::UserRepository;

/// User repository backed by a process-local map.
///
/// Uniqueness violations are raised in the storage engine's own shape
/// (code 11000 plus the offending key/value) and classified on the way out.
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn duplicate_email(email: &str) -> AppError {
    RawError::new(format!(
        "E11000 duplicate key error collection: users index: email_1 dup key: {{ email: \"{}\" }}",
        email
    ))
    .with_name("MongoServerError")
    .with_code(DUPLICATE_KEY_CODE)
    .with_key_value("email", email)
    .into()
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AppError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let email = normalize_email(email);
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn create(&self, user: User) -> Result<User, AppError> {
        let mut users = self.users.write().await;

        if users.values().any(|u| u.email == user.email) {
            tracing::debug!(email = %user.email, "rejecting duplicate email");
            return Err(duplicate_email(&user.email));
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }
}
