//! In-memory implementation of UserRepository
//!
//! Records live in a map keyed by username; email uniqueness is checked under
//! the same write lock so concurrent registrations cannot both succeed.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::user::{User, UserField};
use crate::errors::StoreError;

use super::trait_::{UserPatch, UserRepository};

/// Process-local user store
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, StoreError> {
        let mut users = self.users.write().await;

        if users.contains_key(&user.username) {
            return Err(StoreError::UniqueViolation {
                field: UserField::Username,
            });
        }
        if users.values().any(|u| u.email == user.email) {
            return Err(StoreError::UniqueViolation {
                field: UserField::Email,
            });
        }

        users.insert(user.username.clone(), user.clone());
        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let users = self.users.read().await;
        Ok(users.get(username).cloned())
    }

    async fn update(&self, username: &str, patch: UserPatch) -> Result<User, StoreError> {
        let mut users = self.users.write().await;

        let user = users.get_mut(username).ok_or(StoreError::NotFound)?;
        patch.apply(user)?;
        Ok(user.clone())
    }
}
