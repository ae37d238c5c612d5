use axum::routing::get;
use axum::Router;

use crate::handlers::status;
use crate::state::AppState;

/// Routes mounted at `/statuses`.
///
/// ```text
/// GET    /               -> list
/// POST   /               -> upsert
/// GET    /latest         -> latest
/// GET    /week/{date}    -> for_week
/// GET    /{id}           -> get_by_id
/// PUT    /{id}           -> update
/// DELETE /{id}           -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(status::list).post(status::upsert))
        .route("/latest", get(status::latest))
        .route("/week/{date}", get(status::for_week))
        .route(
            "/{id}",
            get(status::get_by_id)
                .put(status::update)
                .delete(status::delete),
        )
}
