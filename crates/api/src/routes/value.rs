use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::value;
use crate::state::AppState;

/// Routes mounted at `/values`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(value::list))
        .route("/{id}", delete(value::delete))
}
