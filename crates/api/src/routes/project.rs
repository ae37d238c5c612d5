use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::{operations, project};
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                        -> list
/// POST   /                        -> create
/// GET    /{id}                    -> get_by_id
/// PUT    /{id}                    -> update
/// DELETE /{id}                    -> delete
/// GET    /{id}/previous-status    -> previous_status
/// GET    /{id}/values             -> list_values
/// POST   /{id}/values             -> create_value
/// GET    /{id}/operations         -> operations::list
/// POST   /{id}/operations         -> operations::upsert
/// GET    /{id}/operations/{month}/{year} -> operations::for_month
/// DELETE /{id}/operations/{operations_id} -> operations::delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::create))
        .route(
            "/{id}",
            get(project::get_by_id)
                .put(project::update)
                .delete(project::delete),
        )
        .route("/{id}/previous-status", get(project::previous_status))
        .route(
            "/{id}/values",
            get(project::list_values).post(project::create_value),
        )
        .route(
            "/{id}/operations",
            get(operations::list).post(operations::upsert),
        )
        .route("/{id}/operations/{month}/{year}", get(operations::for_month))
        .route("/{id}/operations/{operations_id}", delete(operations::delete))
}
