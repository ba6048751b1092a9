//! Authentication Handlers

use axum::{Json, extract::State};
use shared::client::{CurrentUserResponse, LoginRequest, LoginResponse, RegisterRequest};
use shared::models::PublicUser;

use crate::api::extract::AppJson;
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::utils::AppResult;

/// Login handler
///
/// Returns a bearer token; a wrong password and an unknown username fail
/// the same way.
pub async fn login(
    State(state): State<ServerState>,
    AppJson(req): AppJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let response = state.credentials().login(&req.username, &req.password)?;
    Ok(Json(response))
}

/// Register a new account
pub async fn register(
    State(state): State<ServerState>,
    AppJson(req): AppJson<RegisterRequest>,
) -> AppResult<Json<PublicUser>> {
    let user = state.credentials().register(req)?;
    Ok(Json(user))
}

/// Get current user info, as carried by the token
pub async fn me(user: CurrentUser) -> Json<CurrentUserResponse> {
    Json(CurrentUserResponse {
        id: user.id,
        username: user.username,
        role: user.role,
    })
}
