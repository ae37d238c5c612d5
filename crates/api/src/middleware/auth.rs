//! Caller extraction for Axum handlers.

use alliswell_core::access::Caller;
use alliswell_core::error::CoreError;
use alliswell_core::types::DbId;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;
use crate::workflow::identity;

/// Header carrying a raw user id in acting-director mode.
pub const USER_ID_HEADER: &str = "x-user-id";

/// The resolved caller of the current request.
///
/// Never rejects a request for lacking credentials: such requests proceed
/// as [`Caller::Anonymous`] and the access policy decides. A credential
/// that is present but malformed or invalid is rejected.
///
/// ```ignore
/// async fn my_handler(CurrentCaller(caller): CurrentCaller) -> AppResult<Json<()>> {
///     tracing::info!(user_id = ?caller.user_id(), "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CurrentCaller(pub Caller);

impl FromRequestParts<AppState> for CurrentCaller {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user_id = caller_id(parts, state)?;
        let caller = identity::resolve(&state.pool, user_id).await?;
        Ok(CurrentCaller(caller))
    }
}

/// Pull the opaque caller id out of the request headers, if any.
fn caller_id(parts: &Parts, state: &AppState) -> Result<Option<DbId>, AppError> {
    if let Some(auth_header) = parts.headers.get("authorization") {
        let token = auth_header
            .to_str()
            .ok()
            .and_then(|v| v.strip_prefix("Bearer "))
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Invalid Authorization format. Expected: Bearer <token>".into(),
                ))
            })?;

        let claims = validate_token(token, &state.config.jwt).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;
        return Ok(Some(claims.sub));
    }

    if !state.config.allow_user_id_header {
        return Ok(None);
    }
    match parts.headers.get(USER_ID_HEADER) {
        None => Ok(None),
        Some(raw) => raw
            .to_str()
            .ok()
            .and_then(|v| v.trim().parse::<DbId>().ok())
            .map(Some)
            .ok_or_else(|| AppError::BadRequest("Invalid X-User-Id header".into())),
    }
}
