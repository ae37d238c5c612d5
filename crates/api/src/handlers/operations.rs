//! Handlers for `/projects/{id}/operations`.

use alliswell_core::types::DbId;
use alliswell_db::models::project_operations::ProjectOperations;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::AppResult;
use crate::middleware::auth::CurrentCaller;
use crate::state::AppState;
use crate::workflow::{self, SaveOperations};

/// GET /api/v1/projects/{id}/operations
pub async fn list(
    State(state): State<AppState>,
    CurrentCaller(caller): CurrentCaller,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<ProjectOperations>>> {
    let rows = workflow::list_operations(&state.pool, &caller, project_id).await?;
    Ok(Json(rows))
}

/// GET /api/v1/projects/{id}/operations/{month}/{year}
pub async fn for_month(
    State(state): State<AppState>,
    CurrentCaller(caller): CurrentCaller,
    Path((project_id, month, year)): Path<(DbId, u32, i32)>,
) -> AppResult<Json<ProjectOperations>> {
    let row = workflow::operations_for_month(&state.pool, &caller, project_id, month, year).await?;
    Ok(Json(row))
}

/// POST /api/v1/projects/{id}/operations
pub async fn upsert(
    State(state): State<AppState>,
    CurrentCaller(caller): CurrentCaller,
    Path(project_id): Path<DbId>,
    Json(input): Json<SaveOperations>,
) -> AppResult<(StatusCode, Json<ProjectOperations>)> {
    let row = workflow::upsert_operations(&state.pool, &caller, project_id, &input).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// DELETE /api/v1/projects/{id}/operations/{operations_id}
pub async fn delete(
    State(state): State<AppState>,
    CurrentCaller(caller): CurrentCaller,
    Path((project_id, id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    workflow::delete_operations(&state.pool, &caller, project_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
