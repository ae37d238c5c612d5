use alliswell_core::access::Principal;
use axum::Json;
use serde::Serialize;

use crate::middleware::auth::CurrentCaller;

/// Who the server thinks is calling.
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub authenticated: bool,
    pub user: Option<Principal>,
}

/// GET /api/v1/me
pub async fn me(CurrentCaller(caller): CurrentCaller) -> Json<MeResponse> {
    let user = caller.principal().cloned();
    Json(MeResponse {
        authenticated: user.is_some(),
        user,
    })
}
