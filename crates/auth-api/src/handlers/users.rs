//! User handlers

use auth_service::{AuthService, CurrentUserResponse};
use axum::{extract::State, Json};

use crate::extractors::BearerToken;
use crate::response::ApiResult;
use crate::state::AppState;

/// Get the user the bearer token was issued for
///
/// GET /users/me
pub async fn get_current_user(
    State(state): State<AppState>,
    token: BearerToken,
) -> ApiResult<Json<CurrentUserResponse>> {
    let service = AuthService::new(state.service_context());
    let user = service.whoami(token.token()).await?;
    Ok(Json(user))
}
