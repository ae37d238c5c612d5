//! Weekly status store and aggregation operations.

use alliswell_core::access::{Caller, ListScope, Operation, ResourceFacts};
use alliswell_core::error::CoreError;
use alliswell_core::status_report::{validate_status_content, StatusContent};
use alliswell_core::types::DbId;
use alliswell_core::week::{parse_week_ending, validate_week_ending};
use alliswell_db::models::weekly_status::{
    LatestStatusRow, StatusFilter, StatusRecord, UpsertWeeklyStatus,
};
use alliswell_db::repositories::WeeklyStatusRepo;
use alliswell_db::DbPool;
use chrono::NaiveDate;
use serde::Deserialize;

use super::{authorize, projects};
use crate::error::AppResult;

/// A save of the weekly status for one (project, week) pair.
///
/// `week_ending_date` stays raw text so a malformed or non-Friday date is a
/// validation error rather than a body rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct SaveStatus {
    pub project_id: DbId,
    pub week_ending_date: String,
    #[serde(default)]
    pub is_draft: bool,
    #[serde(flatten)]
    pub content: StatusContent,
}

/// A full overwrite of an existing status, addressed by id.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStatus {
    #[serde(default)]
    pub is_draft: bool,
    #[serde(flatten)]
    pub content: StatusContent,
}

/// Create or overwrite the status of a project for a week.
///
/// Drafts may leave `all_is_well` empty; a final save may not. Every
/// content field is replaced, so an omitted optional field is cleared.
pub async fn upsert_status(
    pool: &DbPool,
    caller: &Caller,
    input: &SaveStatus,
) -> AppResult<StatusRecord> {
    let principal = caller.require_user()?;
    let week = parse_week_ending(&input.week_ending_date)?;
    validate_status_content(&input.content, input.is_draft)?;

    let project = projects::find(pool, input.project_id).await?;
    authorize(
        caller,
        Operation::WriteToProject,
        &ResourceFacts::project(project.assigned_director_id),
        "Project",
        project.id,
    )?;

    save(pool, principal.id, project.id, week, input.is_draft, &input.content).await
}

/// Overwrite the status with the given id, with the same semantics as
/// [`upsert_status`] on that row's (project, week).
///
/// A Delivery Director may overwrite a row of an assigned project or a row
/// they submitted, even after the project moved to someone else.
pub async fn update_status(
    pool: &DbPool,
    caller: &Caller,
    id: DbId,
    input: &UpdateStatus,
) -> AppResult<StatusRecord> {
    let principal = caller.require_user()?;
    let current = get_status(pool, caller, id).await?;
    validate_status_content(&input.content, input.is_draft)?;

    authorize(
        caller,
        Operation::WriteToProject,
        &ResourceFacts::record(current.assigned_director_id, current.submitted_by),
        "WeeklyStatus",
        id,
    )?;

    save(
        pool,
        principal.id,
        current.project_id,
        current.week_ending_date,
        input.is_draft,
        &input.content,
    )
    .await
}

async fn save(
    pool: &DbPool,
    user_id: DbId,
    project_id: DbId,
    week: NaiveDate,
    is_draft: bool,
    content: &StatusContent,
) -> AppResult<StatusRecord> {
    let record = WeeklyStatusRepo::upsert(
        pool,
        &UpsertWeeklyStatus {
            project_id,
            week_ending_date: week,
            submitted_by: user_id,
            is_draft,
            content: content.clone(),
        },
    )
    .await?;

    tracing::info!(
        status_id = record.id,
        project_id,
        week = %week,
        is_draft,
        user_id,
        "Status saved"
    );
    Ok(record)
}

/// A single status. Out-of-scope rows are reported as not found.
pub async fn get_status(pool: &DbPool, caller: &Caller, id: DbId) -> AppResult<StatusRecord> {
    let record = find(pool, id).await?;
    authorize(
        caller,
        Operation::ReadStatus,
        &ResourceFacts::record(record.assigned_director_id, record.submitted_by),
        "WeeklyStatus",
        id,
    )?;
    Ok(record)
}

/// Hard-delete a status. Admin may delete any row, everyone else only rows
/// they submitted.
pub async fn delete_status(pool: &DbPool, caller: &Caller, id: DbId) -> AppResult<()> {
    let record = find(pool, id).await?;
    authorize(
        caller,
        Operation::DeleteOwned,
        &ResourceFacts::record(record.assigned_director_id, record.submitted_by),
        "WeeklyStatus",
        id,
    )?;

    if !WeeklyStatusRepo::delete(pool, id).await? {
        return Err(CoreError::NotFound {
            entity: "WeeklyStatus",
            id,
        }
        .into());
    }
    tracing::info!(status_id = id, project_id = record.project_id, "Status deleted");
    Ok(())
}

pub async fn list_statuses(
    pool: &DbPool,
    caller: &Caller,
    filter: &StatusFilter,
) -> AppResult<Vec<StatusRecord>> {
    if let Some(week) = filter.week_ending_date {
        validate_week_ending(week)?;
    }
    let scope = ListScope::for_caller(caller);
    Ok(WeeklyStatusRepo::list(pool, scope, filter).await?)
}

/// Dashboard view: every visible project with its latest final status.
pub async fn latest_statuses(pool: &DbPool, caller: &Caller) -> AppResult<Vec<LatestStatusRow>> {
    let scope = ListScope::for_caller(caller);
    Ok(WeeklyStatusRepo::latest_per_project(pool, scope).await?)
}

/// The most recent final status of a visible project.
pub async fn previous_status(
    pool: &DbPool,
    caller: &Caller,
    project_id: DbId,
) -> AppResult<StatusRecord> {
    projects::get_project(pool, caller, project_id).await?;

    WeeklyStatusRepo::latest_final_for_project(pool, project_id)
        .await?
        .ok_or_else(|| CoreError::NoPreviousStatus { project_id }.into())
}

/// Final statuses for one week, ordered by project name.
pub async fn statuses_for_week(
    pool: &DbPool,
    caller: &Caller,
    week_ending_date: NaiveDate,
) -> AppResult<Vec<StatusRecord>> {
    validate_week_ending(week_ending_date)?;

    let filter = StatusFilter {
        week_ending_date: Some(week_ending_date),
        ..Default::default()
    };
    let scope = ListScope::for_caller(caller);
    Ok(WeeklyStatusRepo::list(pool, scope, &filter).await?)
}

async fn find(pool: &DbPool, id: DbId) -> AppResult<StatusRecord> {
    WeeklyStatusRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| {
            CoreError::NotFound {
                entity: "WeeklyStatus",
                id,
            }
            .into()
        })
}
