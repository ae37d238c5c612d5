//! Repository for the `users` table.

use alliswell_core::roles::Role;
use alliswell_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::user::{CreateUser, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, role, is_active, created_at, updated_at";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new (active) user, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (name, email, role)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(input.role)
            .fetch_one(pool)
            .await
    }

    /// Find a user by internal ID, active or not.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by email (case-sensitive).
    pub async fn find_by_email(
        pool: &SqlitePool,
        email: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE email = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// List active users with the given role, ordered by name.
    pub async fn list_active_by_role(
        pool: &SqlitePool,
        role: Role,
    ) -> Result<Vec<User>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM users WHERE role = $1 AND is_active = 1 ORDER BY name"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(role)
            .fetch_all(pool)
            .await
    }

    /// Activate or deactivate a user. Returns `true` if a row was changed.
    pub async fn set_active(
        pool: &SqlitePool,
        id: DbId,
        active: bool,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE users SET is_active = $2, updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
             WHERE id = $1",
        )
        .bind(id)
        .bind(active)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
