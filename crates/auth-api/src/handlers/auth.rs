//! Authentication handlers
//!
//! Endpoints for user registration and token issuance.

use auth_service::{
    AuthService, LoginRequest, RegisterRequest, RegisterResponse, TokenRequest, TokenResponse,
};
use axum::{extract::State, Json};

use crate::extractors::{ValidatedForm, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Register a new user
///
/// POST /register
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> ApiResult<Json<RegisterResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.register(request).await?;
    Ok(Json(response))
}

/// Exchange email and password for a bearer token
///
/// POST /token (form: `username=<email>&password=<password>`)
pub async fn token(
    State(state): State<AppState>,
    ValidatedForm(form): ValidatedForm<TokenRequest>,
) -> ApiResult<Json<TokenResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.login(LoginRequest::from(form)).await?;
    Ok(Json(response))
}
