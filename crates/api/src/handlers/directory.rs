use alliswell_db::models::user::User;
use axum::extract::State;
use axum::Json;

use crate::error::AppResult;
use crate::middleware::auth::CurrentCaller;
use crate::state::AppState;
use crate::workflow;

/// GET /api/v1/directors
pub async fn list_directors(
    State(state): State<AppState>,
    CurrentCaller(caller): CurrentCaller,
) -> AppResult<Json<Vec<User>>> {
    let directors = workflow::list_directors(&state.pool, &caller).await?;
    Ok(Json(directors))
}
