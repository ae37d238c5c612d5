//! Identity and role resolution.

use alliswell_core::access::{Caller, Principal};
use alliswell_core::types::DbId;
use alliswell_db::repositories::UserRepo;
use alliswell_db::DbPool;

use crate::error::AppResult;

/// Resolve an opaque caller id to the acting user.
///
/// Absent ids, unknown ids and inactive users all resolve to
/// [`Caller::Anonymous`].
pub async fn resolve(pool: &DbPool, user_id: Option<DbId>) -> AppResult<Caller> {
    let Some(id) = user_id else {
        return Ok(Caller::Anonymous);
    };

    match UserRepo::find_by_id(pool, id).await? {
        Some(user) if user.is_active => Ok(Caller::User(Principal {
            id: user.id,
            name: user.name,
            role: user.role,
        })),
        Some(_) => {
            tracing::debug!(user_id = id, "Inactive user treated as anonymous");
            Ok(Caller::Anonymous)
        }
        None => {
            tracing::debug!(user_id = id, "Unknown user treated as anonymous");
            Ok(Caller::Anonymous)
        }
    }
}
