//! User entity model and DTOs.

use alliswell_core::roles::Role;
use alliswell_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A user row from the `users` table.
///
/// There are no credentials here; identity verification happens upstream.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new user.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub role: Role,
}
