use alliswell_core::types::DbId;
use alliswell_db::models::project_value::ProjectValue;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::AppResult;
use crate::middleware::auth::CurrentCaller;
use crate::query::DateRangeParams;
use crate::state::AppState;
use crate::workflow;

/// GET /api/v1/values?from=&to=
pub async fn list(
    State(state): State<AppState>,
    CurrentCaller(caller): CurrentCaller,
    Query(params): Query<DateRangeParams>,
) -> AppResult<Json<Vec<ProjectValue>>> {
    let range = params.into_range()?;
    let values = workflow::list_values(&state.pool, &caller, &range).await?;
    Ok(Json(values))
}

/// DELETE /api/v1/values/{id}
pub async fn delete(
    State(state): State<AppState>,
    CurrentCaller(caller): CurrentCaller,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    workflow::delete_value(&state.pool, &caller, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
