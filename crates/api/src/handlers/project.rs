//! Handlers for the `/projects` resource.

use alliswell_core::types::DbId;
use alliswell_db::models::project::{CreateProject, Project, UpdateProject};
use alliswell_db::models::project_value::ProjectValue;
use alliswell_db::models::weekly_status::StatusRecord;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::AppResult;
use crate::middleware::auth::CurrentCaller;
use crate::query::ProjectListParams;
use crate::state::AppState;
use crate::workflow::{self, NewValue};

/// POST /api/v1/projects
pub async fn create(
    State(state): State<AppState>,
    CurrentCaller(caller): CurrentCaller,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    let project = workflow::create_project(&state.pool, &caller, &input).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/v1/projects
pub async fn list(
    State(state): State<AppState>,
    CurrentCaller(caller): CurrentCaller,
    Query(params): Query<ProjectListParams>,
) -> AppResult<Json<Vec<Project>>> {
    let projects = workflow::list_projects(&state.pool, &caller, params.status).await?;
    Ok(Json(projects))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    CurrentCaller(caller): CurrentCaller,
    Path(id): Path<DbId>,
) -> AppResult<Json<Project>> {
    let project = workflow::get_project(&state.pool, &caller, id).await?;
    Ok(Json(project))
}

/// PUT /api/v1/projects/{id}
pub async fn update(
    State(state): State<AppState>,
    CurrentCaller(caller): CurrentCaller,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<Project>> {
    let project = workflow::update_project(&state.pool, &caller, id, &input).await?;
    Ok(Json(project))
}

/// DELETE /api/v1/projects/{id}
pub async fn delete(
    State(state): State<AppState>,
    CurrentCaller(caller): CurrentCaller,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    workflow::delete_project(&state.pool, &caller, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/projects/{id}/previous-status
pub async fn previous_status(
    State(state): State<AppState>,
    CurrentCaller(caller): CurrentCaller,
    Path(id): Path<DbId>,
) -> AppResult<Json<StatusRecord>> {
    let record = workflow::previous_status(&state.pool, &caller, id).await?;
    Ok(Json(record))
}

/// GET /api/v1/projects/{id}/values
pub async fn list_values(
    State(state): State<AppState>,
    CurrentCaller(caller): CurrentCaller,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<ProjectValue>>> {
    let values = workflow::list_project_values(&state.pool, &caller, id).await?;
    Ok(Json(values))
}

/// POST /api/v1/projects/{id}/values
pub async fn create_value(
    State(state): State<AppState>,
    CurrentCaller(caller): CurrentCaller,
    Path(id): Path<DbId>,
    Json(input): Json<NewValue>,
) -> AppResult<(StatusCode, Json<ProjectValue>)> {
    let value = workflow::create_value(&state.pool, &caller, id, &input).await?;
    Ok((StatusCode::CREATED, Json(value)))
}
