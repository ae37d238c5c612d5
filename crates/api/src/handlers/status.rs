//! Handlers for the `/statuses` resource.

use alliswell_core::types::DbId;
use alliswell_core::week::parse_date;
use alliswell_db::models::weekly_status::{LatestStatusRow, StatusFilter, StatusRecord};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::AppResult;
use crate::middleware::auth::CurrentCaller;
use crate::state::AppState;
use crate::workflow::{self, SaveStatus, UpdateStatus};

/// POST /api/v1/statuses
///
/// Creates or overwrites the status for the body's (project, week).
pub async fn upsert(
    State(state): State<AppState>,
    CurrentCaller(caller): CurrentCaller,
    Json(input): Json<SaveStatus>,
) -> AppResult<(StatusCode, Json<StatusRecord>)> {
    let record = workflow::upsert_status(&state.pool, &caller, &input).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /api/v1/statuses
pub async fn list(
    State(state): State<AppState>,
    CurrentCaller(caller): CurrentCaller,
    Query(filter): Query<StatusFilter>,
) -> AppResult<Json<Vec<StatusRecord>>> {
    let records = workflow::list_statuses(&state.pool, &caller, &filter).await?;
    Ok(Json(records))
}

/// GET /api/v1/statuses/latest
pub async fn latest(
    State(state): State<AppState>,
    CurrentCaller(caller): CurrentCaller,
) -> AppResult<Json<Vec<LatestStatusRow>>> {
    let rows = workflow::latest_statuses(&state.pool, &caller).await?;
    Ok(Json(rows))
}

/// GET /api/v1/statuses/week/{date}
pub async fn for_week(
    State(state): State<AppState>,
    CurrentCaller(caller): CurrentCaller,
    Path(date): Path<String>,
) -> AppResult<Json<Vec<StatusRecord>>> {
    let week = parse_date(&date)?;
    let records = workflow::statuses_for_week(&state.pool, &caller, week).await?;
    Ok(Json(records))
}

/// GET /api/v1/statuses/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    CurrentCaller(caller): CurrentCaller,
    Path(id): Path<DbId>,
) -> AppResult<Json<StatusRecord>> {
    let record = workflow::get_status(&state.pool, &caller, id).await?;
    Ok(Json(record))
}

/// PUT /api/v1/statuses/{id}
pub async fn update(
    State(state): State<AppState>,
    CurrentCaller(caller): CurrentCaller,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateStatus>,
) -> AppResult<Json<StatusRecord>> {
    let record = workflow::update_status(&state.pool, &caller, id, &input).await?;
    Ok(Json(record))
}

/// DELETE /api/v1/statuses/{id}
pub async fn delete(
    State(state): State<AppState>,
    CurrentCaller(caller): CurrentCaller,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    workflow::delete_status(&state.pool, &caller, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
