use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use tracing::info;

use super::mappers::HerdMapper;
use super::{error_response, session_for};
use crate::AppState;

/// Cows with a confirmed pregnancy
pub async fn list_pregnancies(
    State(state): State<AppState>,
    Path(farmer_id): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/farmers/{}/pregnancies", farmer_id);

    let session = match session_for(&state, &farmer_id).await {
        Ok(session) => session,
        Err(response) => return response,
    };

    match state.herd_service.pregnancies(&session).await {
        Ok(pregnancies) => {
            (StatusCode::OK, Json(HerdMapper::to_pregnancy_list_dto(pregnancies))).into_response()
        }
        Err(e) => error_response("Failed to list pregnancies", e),
    }
}

/// Pending records due for a heat check
pub async fn list_reminders(
    State(state): State<AppState>,
    Path(farmer_id): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/farmers/{}/reminders", farmer_id);

    let session = match session_for(&state, &farmer_id).await {
        Ok(session) => session,
        Err(response) => return response,
    };

    match state.herd_service.reminders(&session).await {
        Ok(reminders) => (StatusCode::OK, Json(HerdMapper::to_reminder_list_dto(reminders))).into_response(),
        Err(e) => error_response("Failed to list reminders", e),
    }
}
