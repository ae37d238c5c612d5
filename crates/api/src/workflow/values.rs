//! Value-ledger operations.

use alliswell_core::access::{Caller, ListScope, Operation, ResourceFacts};
use alliswell_core::error::CoreError;
use alliswell_core::roles::Role;
use alliswell_core::status_report::validate_value_content;
use alliswell_core::types::{DbId, Timestamp};
use alliswell_core::week::DateRange;
use alliswell_db::models::project_value::{CreateProjectValue, ProjectValue};
use alliswell_db::repositories::ProjectValueRepo;
use alliswell_db::DbPool;
use serde::Deserialize;

use super::{authorize, projects};
use crate::error::AppResult;

/// Body of a new value entry.
#[derive(Debug, Clone, Deserialize)]
pub struct NewValue {
    pub content: String,
    /// Backdated creation time, Admin only.
    pub created_at: Option<Timestamp>,
}

/// Record a value entry against a project the caller may write to.
pub async fn create_value(
    pool: &DbPool,
    caller: &Caller,
    project_id: DbId,
    input: &NewValue,
) -> AppResult<ProjectValue> {
    let principal = caller.require_user()?;
    validate_value_content(&input.content)?;

    let project = projects::find(pool, project_id).await?;
    authorize(
        caller,
        Operation::WriteToProject,
        &ResourceFacts::project(project.assigned_director_id),
        "Project",
        project_id,
    )?;
    if input.created_at.is_some() && principal.role != Role::Admin {
        return Err(CoreError::Forbidden("Only Admin may backdate value entries".into()).into());
    }

    let value = ProjectValueRepo::create(
        pool,
        &CreateProjectValue {
            project_id,
            content: input.content.clone(),
            submitted_by: principal.id,
            created_at: input.created_at,
        },
    )
    .await?;
    tracing::info!(value_id = value.id, project_id, user_id = principal.id, "Value recorded");
    Ok(value)
}

/// All entries of a visible project, newest first.
pub async fn list_project_values(
    pool: &DbPool,
    caller: &Caller,
    project_id: DbId,
) -> AppResult<Vec<ProjectValue>> {
    projects::get_project(pool, caller, project_id).await?;
    Ok(ProjectValueRepo::list_for_project(pool, project_id).await?)
}

/// Entries created within `range` (whole days, inclusive), newest first.
pub async fn list_values(
    pool: &DbPool,
    caller: &Caller,
    range: &DateRange,
) -> AppResult<Vec<ProjectValue>> {
    let scope = ListScope::for_caller(caller);
    Ok(ProjectValueRepo::list(pool, scope, range).await?)
}

pub async fn delete_value(pool: &DbPool, caller: &Caller, id: DbId) -> AppResult<()> {
    let value = ProjectValueRepo::find_by_id(pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "ProjectValue",
            id,
        })?;
    authorize(
        caller,
        Operation::DeleteOwned,
        &ResourceFacts::record(value.assigned_director_id, value.submitted_by),
        "ProjectValue",
        id,
    )?;

    if !ProjectValueRepo::delete(pool, id).await? {
        return Err(CoreError::NotFound {
            entity: "ProjectValue",
            id,
        }
        .into());
    }
    tracing::info!(value_id = id, project_id = value.project_id, "Value deleted");
    Ok(())
}
