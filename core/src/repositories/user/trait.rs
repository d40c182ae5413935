//! User repository trait defining the record store contract.
//!
//! The store owns uniqueness of `username` and `email` and the atomicity of
//! each call. The verification service performs no locking of its own, so
//! every implementation must make `create` and conditional `update` atomic
//! with respect to concurrent callers.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::user::User;
use crate::errors::StoreError;

/// Changes applied to a stored user by [`UserRepository::update`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    /// Flip the record to verified at the given time
    pub verified_at: Option<DateTime<Utc>>,

    /// Reject the update with [`StoreError::PreconditionFailed`] when the
    /// stored record is already verified
    pub require_unverified: bool,
}

impl UserPatch {
    /// Patch for the single pending → verified transition
    pub fn mark_verified(at: DateTime<Utc>) -> Self {
        Self {
            verified_at: Some(at),
            require_unverified: true,
        }
    }

    /// Apply the patch to an in-memory copy of the record
    pub fn apply(&self, user: &mut User) -> Result<(), StoreError> {
        if self.require_unverified && user.is_verified {
            return Err(StoreError::PreconditionFailed);
        }
        if let Some(at) = self.verified_at {
            user.verify(at);
        }
        Ok(())
    }
}

/// Repository trait for User persistence
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use mv_core::domain::entities::user::User;
/// use mv_core::errors::StoreError;
/// use mv_core::repositories::{UserPatch, UserRepository};
///
/// struct PostgresUserRepository {
///     // connection pool
/// }
///
/// #[async_trait]
/// impl UserRepository for PostgresUserRepository {
///     async fn create(&self, user: User) -> Result<User, StoreError> {
///         Ok(user)
///     }
///
///     async fn find_by_username(&self, _username: &str) -> Result<Option<User>, StoreError> {
///         Ok(None)
///     }
///
///     async fn update(&self, _username: &str, _patch: UserPatch) -> Result<User, StoreError> {
///         Err(StoreError::NotFound)
///     }
/// }
/// ```
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user
    ///
    /// # Returns
    /// * `Ok(User)` - The stored record
    /// * `Err(StoreError::UniqueViolation)` - Username or email already taken
    async fn create(&self, user: User) -> Result<User, StoreError>;

    /// Find a user by username
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user with that username
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError>;

    /// Apply a patch to an existing user
    ///
    /// # Returns
    /// * `Ok(User)` - The record after the patch
    /// * `Err(StoreError::NotFound)` - No user with that username
    /// * `Err(StoreError::PreconditionFailed)` - The patch's precondition did not hold
    async fn update(&self, username: &str, patch: UserPatch) -> Result<User, StoreError>;

    /// Cheap reachability probe used by health checks
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
