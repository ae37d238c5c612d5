//! Project registry operations.

use alliswell_core::access::{Caller, ListScope, Operation, ResourceFacts};
use alliswell_core::error::CoreError;
use alliswell_core::project::{validate_project_fields, ProjectStatus};
use alliswell_core::roles::Role;
use alliswell_core::types::DbId;
use alliswell_db::models::project::{CreateProject, Project, UpdateProject};
use alliswell_db::repositories::{ProjectRepo, UserRepo};
use alliswell_db::DbPool;

use super::authorize;
use crate::error::AppResult;

/// Projects visible to `caller`, optionally filtered by status.
pub async fn list_projects(
    pool: &DbPool,
    caller: &Caller,
    status: Option<ProjectStatus>,
) -> AppResult<Vec<Project>> {
    let scope = ListScope::for_caller(caller);
    Ok(ProjectRepo::list(pool, scope, status).await?)
}

/// A single project. Out-of-scope projects are reported as not found.
pub async fn get_project(pool: &DbPool, caller: &Caller, id: DbId) -> AppResult<Project> {
    let project = find(pool, id).await?;
    authorize(
        caller,
        Operation::ReadProject,
        &ResourceFacts::project(project.assigned_director_id),
        "Project",
        id,
    )?;
    Ok(project)
}

pub async fn create_project(
    pool: &DbPool,
    caller: &Caller,
    input: &CreateProject,
) -> AppResult<Project> {
    authorize(caller, Operation::ManageProjects, &ResourceFacts::default(), "Project", 0)?;
    validate_project_fields(&input.name, &input.client)?;
    if let Some(director_id) = input.assigned_director_id {
        ensure_director(pool, director_id).await?;
    }

    let project = ProjectRepo::create(pool, input).await?;
    tracing::info!(project_id = project.id, name = %project.name, "Project created");
    Ok(project)
}

/// Patch a project. Fields left `None` keep their stored value.
pub async fn update_project(
    pool: &DbPool,
    caller: &Caller,
    id: DbId,
    input: &UpdateProject,
) -> AppResult<Project> {
    authorize(caller, Operation::ManageProjects, &ResourceFacts::default(), "Project", id)?;

    let current = find(pool, id).await?;
    validate_project_fields(
        input.name.as_deref().unwrap_or(&current.name),
        input.client.as_deref().unwrap_or(&current.client),
    )?;
    if let Some(director_id) = input.assigned_director_id {
        ensure_director(pool, director_id).await?;
    }

    let project = ProjectRepo::update(pool, id, input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Project",
            id,
        })?;
    tracing::info!(project_id = id, "Project updated");
    Ok(project)
}

/// Delete a project together with its statuses and value entries.
pub async fn delete_project(pool: &DbPool, caller: &Caller, id: DbId) -> AppResult<()> {
    authorize(caller, Operation::ManageProjects, &ResourceFacts::default(), "Project", id)?;

    if !ProjectRepo::delete(pool, id).await? {
        return Err(CoreError::NotFound {
            entity: "Project",
            id,
        }
        .into());
    }
    tracing::info!(project_id = id, "Project deleted");
    Ok(())
}

pub(crate) async fn find(pool: &DbPool, id: DbId) -> AppResult<Project> {
    ProjectRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| {
            CoreError::NotFound {
                entity: "Project",
                id,
            }
            .into()
        })
}

/// Only an active Delivery Director can be assigned to a project.
async fn ensure_director(pool: &DbPool, user_id: DbId) -> AppResult<()> {
    match UserRepo::find_by_id(pool, user_id).await? {
        Some(user) if user.is_active && user.role == Role::DeliveryDirector => Ok(()),
        _ => Err(CoreError::Validation(format!(
            "User {user_id} is not an active Delivery Director"
        ))
        .into()),
    }
}
