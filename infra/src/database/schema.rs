//! Schema bootstrap for the record store

use sqlx::MySqlPool;

use crate::InfrastructureError;

/// `users` table. `username` is the primary key; `email` carries its own
/// unique key so duplicate-key errors name the colliding field.
pub const CREATE_USERS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        username VARCHAR(255) NOT NULL,
        email VARCHAR(320) NOT NULL,
        verification_token VARCHAR(64) NOT NULL,
        is_verified BOOLEAN NOT NULL DEFAULT FALSE,
        created_at DATETIME(6) NOT NULL,
        verified_at DATETIME(6) NULL,
        PRIMARY KEY (username),
        UNIQUE KEY uk_users_email (email)
    ) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4 COLLATE=utf8mb4_bin
"#;

/// Create the `users` table if it does not exist yet
pub async fn ensure_schema(pool: &MySqlPool) -> Result<(), InfrastructureError> {
    sqlx::query(CREATE_USERS_TABLE).execute(pool).await?;
    tracing::info!(event = "schema_ready", "Ensured users table exists");
    Ok(())
}
