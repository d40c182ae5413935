//! MySQL implementation of the UserRepository trait.
//!
//! Uniqueness of `username` and `email` is enforced by the table's keys, so
//! concurrent inserts are serialized by MySQL rather than by this type.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::error::ErrorKind;
use sqlx::mysql::{MySqlDatabaseError, MySqlRow};
use sqlx::{MySqlPool, Row};

use mv_core::domain::entities::user::{User, UserField};
use mv_core::errors::StoreError;
use mv_core::repositories::{UserPatch, UserRepository};

/// `ER_DATA_TOO_LONG`
const MYSQL_DATA_TOO_LONG: u16 = 1406;
/// `ER_TRUNCATED_WRONG_VALUE_FOR_FIELD`
const MYSQL_WRONG_VALUE_FOR_FIELD: u16 = 1366;

const SELECT_USER: &str = r#"
    SELECT username, email, verification_token, is_verified, created_at, verified_at
    FROM users
    WHERE username = ?
    LIMIT 1
"#;

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to User entity
    fn row_to_user(row: &MySqlRow) -> Result<User, StoreError> {
        let column = |name: &str, e: sqlx::Error| {
            StoreError::backend(format!("Failed to get {}: {}", name, e))
        };

        Ok(User {
            username: row.try_get("username").map_err(|e| column("username", e))?,
            email: row.try_get("email").map_err(|e| column("email", e))?,
            verification_token: row
                .try_get("verification_token")
                .map_err(|e| column("verification_token", e))?,
            is_verified: row.try_get("is_verified").map_err(|e| column("is_verified", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| column("created_at", e))?,
            verified_at: row
                .try_get::<Option<DateTime<Utc>>, _>("verified_at")
                .map_err(|e| column("verified_at", e))?,
        })
    }

    async fn fetch(&self, username: &str) -> Result<Option<User>, StoreError> {
        let row = sqlx::query(SELECT_USER)
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(classify_error)?;

        row.as_ref().map(Self::row_to_user).transpose()
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn create(&self, user: User) -> Result<User, StoreError> {
        let query = r#"
            INSERT INTO users (
                username, email, verification_token, is_verified, created_at, verified_at
            ) VALUES (?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(&user.username)
            .bind(&user.email)
            .bind(&user.verification_token)
            .bind(user.is_verified)
            .bind(user.created_at)
            .bind(user.verified_at)
            .execute(&self.pool)
            .await
            .map_err(classify_error)?;

        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        self.fetch(username).await
    }

    async fn update(&self, username: &str, patch: UserPatch) -> Result<User, StoreError> {
        let rows_affected = match patch.verified_at {
            Some(at) => {
                let query = if patch.require_unverified {
                    r#"
                        UPDATE users
                        SET is_verified = TRUE, verified_at = ?
                        WHERE username = ? AND is_verified = FALSE
                    "#
                } else {
                    r#"
                        UPDATE users
                        SET is_verified = TRUE, verified_at = COALESCE(verified_at, ?)
                        WHERE username = ?
                    "#
                };

                sqlx::query(query)
                    .bind(at)
                    .bind(username)
                    .execute(&self.pool)
                    .await
                    .map_err(classify_error)?
                    .rows_affected()
            }
            None => 0,
        };

        let user = self.fetch(username).await?.ok_or(StoreError::NotFound)?;

        if rows_affected == 0 && patch.require_unverified && user.is_verified {
            return Err(StoreError::PreconditionFailed);
        }

        Ok(user)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(classify_error)?;
        Ok(())
    }
}

/// Map a driver error onto the store's failure signals
pub(crate) fn classify_error(err: sqlx::Error) -> StoreError {
    let sqlx::Error::Database(db_err) = &err else {
        return StoreError::backend(err.to_string());
    };

    match db_err.kind() {
        ErrorKind::UniqueViolation => StoreError::UniqueViolation {
            field: unique_field_from_message(db_err.message()),
        },
        ErrorKind::NotNullViolation | ErrorKind::CheckViolation => StoreError::Rejected {
            detail: db_err.message().to_string(),
        },
        _ => {
            let number = db_err
                .try_downcast_ref::<MySqlDatabaseError>()
                .map(MySqlDatabaseError::number);
            match number {
                Some(MYSQL_DATA_TOO_LONG) | Some(MYSQL_WRONG_VALUE_FOR_FIELD) => {
                    StoreError::Rejected {
                        detail: db_err.message().to_string(),
                    }
                }
                _ => StoreError::backend(err.to_string()),
            }
        }
    }
}

/// Pick the colliding field out of a duplicate-key message such as
/// `Duplicate entry 'a@b.c' for key 'users.uk_users_email'`
pub(crate) fn unique_field_from_message(message: &str) -> UserField {
    let key = message
        .rsplit_once("for key")
        .map(|(_, key)| key)
        .unwrap_or(message);

    if key.to_ascii_lowercase().contains("email") {
        UserField::Email
    } else {
        UserField::Username
    }
}
