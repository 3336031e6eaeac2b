//! # REST API for the Current Session
//!
//! Login (which registers on first use), session restore and logout.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use tracing::info;

use shared::LoginRequest;

use super::error_response;
use super::mappers::SessionMapper;
use crate::AppState;

/// Get the session restored from storage
pub async fn get_session(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/session");

    match state.farmer_service.current_session().await {
        Ok(session) => (StatusCode::OK, Json(SessionMapper::to_session_dto(session))).into_response(),
        Err(e) => error_response("Failed to load session", e),
    }
}

/// Log in, registering the farmer if the mobile number is new
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> impl IntoResponse {
    info!("POST /api/session - mobile: {}", request.mobile);

    let command = SessionMapper::to_login_command(request);
    match state.farmer_service.login(command).await {
        Ok(session) => (StatusCode::OK, Json(SessionMapper::to_session_dto(Some(session)))).into_response(),
        Err(e) => error_response("Failed to log in", e),
    }
}

pub async fn logout(State(state): State<AppState>) -> impl IntoResponse {
    info!("DELETE /api/session");

    match state.farmer_service.logout().await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response("Failed to log out", e),
    }
}
