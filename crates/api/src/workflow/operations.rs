//! Monthly operations figures per project.
//!
//! Reads follow project visibility (out-of-scope projects are not found);
//! saves and deletes follow project write scope.

use alliswell_core::access::{Caller, Operation, ResourceFacts};
use alliswell_core::error::CoreError;
use alliswell_core::operations::{validate_figures, validate_period, OperationsFigures};
use alliswell_core::types::DbId;
use alliswell_db::models::project_operations::{ProjectOperations, UpsertProjectOperations};
use alliswell_db::repositories::OperationsRepo;
use alliswell_db::DbPool;
use serde::Deserialize;

use super::{authorize, projects};
use crate::error::AppResult;

/// A save of one project's figures for one month.
#[derive(Debug, Clone, Deserialize)]
pub struct SaveOperations {
    pub month: u32,
    pub year: i32,
    #[serde(flatten)]
    pub figures: OperationsFigures,
}

/// Every reported month of a visible project, newest first.
pub async fn list_operations(
    pool: &DbPool,
    caller: &Caller,
    project_id: DbId,
) -> AppResult<Vec<ProjectOperations>> {
    projects::get_project(pool, caller, project_id).await?;
    Ok(OperationsRepo::list_for_project(pool, project_id).await?)
}

pub async fn operations_for_month(
    pool: &DbPool,
    caller: &Caller,
    project_id: DbId,
    month: u32,
    year: i32,
) -> AppResult<ProjectOperations> {
    validate_period(month, year)?;
    projects::get_project(pool, caller, project_id).await?;

    OperationsRepo::find_by_month(pool, project_id, month, year)
        .await?
        .ok_or_else(|| {
            CoreError::NoOperationsForMonth {
                project_id,
                month,
                year,
            }
            .into()
        })
}

/// Create or overwrite the figures of a project for a month.
pub async fn upsert_operations(
    pool: &DbPool,
    caller: &Caller,
    project_id: DbId,
    input: &SaveOperations,
) -> AppResult<ProjectOperations> {
    let principal = caller.require_user()?;
    validate_period(input.month, input.year)?;
    validate_figures(&input.figures)?;

    let project = projects::find(pool, project_id).await?;
    authorize(
        caller,
        Operation::WriteToProject,
        &ResourceFacts::project(project.assigned_director_id),
        "Project",
        project_id,
    )?;

    let record = OperationsRepo::upsert(
        pool,
        &UpsertProjectOperations {
            project_id,
            month: input.month,
            year: input.year,
            submitted_by: principal.id,
            figures: input.figures.clone(),
        },
    )
    .await?;

    tracing::info!(
        operations_id = record.id,
        project_id,
        month = input.month,
        year = input.year,
        user_id = principal.id,
        "Operations saved"
    );
    Ok(record)
}

pub async fn delete_operations(
    pool: &DbPool,
    caller: &Caller,
    project_id: DbId,
    id: DbId,
) -> AppResult<()> {
    caller.require_user()?;
    let project = projects::find(pool, project_id).await?;
    authorize(
        caller,
        Operation::WriteToProject,
        &ResourceFacts::project(project.assigned_director_id),
        "Project",
        project_id,
    )?;

    if !OperationsRepo::delete(pool, project_id, id).await? {
        return Err(CoreError::NotFound {
            entity: "ProjectOperations",
            id,
        }
        .into());
    }
    tracing::info!(operations_id = id, project_id, "Operations deleted");
    Ok(())
}
