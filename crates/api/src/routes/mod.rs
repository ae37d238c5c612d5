pub mod health;
pub mod project;
pub mod status;
pub mod value;

use axum::routing::get;
use axum::Router;

use crate::handlers::{directory, me};
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /me                                   resolved caller
/// /directors                            active Delivery Directors
///
/// /projects                             list, create
/// /projects/{id}                        get, update, delete
/// /projects/{id}/previous-status        latest final status
/// /projects/{id}/values                 list, create value entries
///
/// /statuses                             list, upsert
/// /statuses/latest                      latest status per project
/// /statuses/week/{date}                 final statuses of one week
/// /statuses/{id}                        get, overwrite, delete
///
/// /values                               date-range listing
/// /values/{id}                          delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/me", get(me::me))
        .route("/directors", get(directory::list_directors))
        .nest("/projects", project::router())
        .nest("/statuses", status::router())
        .nest("/values", value::router())
}
