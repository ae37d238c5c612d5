use alliswell_core::access::{Caller, Operation, ResourceFacts};
use alliswell_core::roles::Role;
use alliswell_db::models::user::User;
use alliswell_db::repositories::UserRepo;
use alliswell_db::DbPool;

use super::authorize;
use crate::error::AppResult;

/// Active Delivery Directors, for the acting-director picker.
pub async fn list_directors(pool: &DbPool, caller: &Caller) -> AppResult<Vec<User>> {
    authorize(caller, Operation::ViewDirectory, &ResourceFacts::default(), "User", 0)?;
    Ok(UserRepo::list_active_by_role(pool, Role::DeliveryDirector).await?)
}
