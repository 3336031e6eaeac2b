//! # REST API for Cow Management

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use tracing::info;

use shared::SaveCowRequest;

use super::mappers::CowMapper;
use super::{error_response, session_for};
use crate::AppState;

pub async fn list_cows(
    State(state): State<AppState>,
    Path(farmer_id): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/farmers/{}/cows", farmer_id);

    let session = match session_for(&state, &farmer_id).await {
        Ok(session) => session,
        Err(response) => return response,
    };

    match state.cow_service.list_cows(&session).await {
        Ok(cows) => (StatusCode::OK, Json(CowMapper::to_cow_list_dto(cows))).into_response(),
        Err(e) => error_response("Failed to list cows", e),
    }
}

pub async fn create_cow(
    State(state): State<AppState>,
    Path(farmer_id): Path<String>,
    Json(request): Json<SaveCowRequest>,
) -> impl IntoResponse {
    info!("POST /api/farmers/{}/cows - tag: {}", farmer_id, request.tag_number);

    let session = match session_for(&state, &farmer_id).await {
        Ok(session) => session,
        Err(response) => return response,
    };

    let command = CowMapper::to_save_command(request);
    match state.cow_service.create_cow(&session, command).await {
        Ok(result) => (StatusCode::CREATED, Json(CowMapper::to_cow_response_dto(result))).into_response(),
        Err(e) => error_response("Failed to create cow", e),
    }
}

pub async fn update_cow(
    State(state): State<AppState>,
    Path((farmer_id, cow_id)): Path<(String, String)>,
    Json(request): Json<SaveCowRequest>,
) -> impl IntoResponse {
    info!("PUT /api/farmers/{}/cows/{}", farmer_id, cow_id);

    let session = match session_for(&state, &farmer_id).await {
        Ok(session) => session,
        Err(response) => return response,
    };

    let command = CowMapper::to_save_command(request);
    match state.cow_service.update_cow(&session, &cow_id, command).await {
        Ok(result) => (StatusCode::OK, Json(CowMapper::to_cow_response_dto(result))).into_response(),
        Err(e) => error_response("Failed to update cow", e),
    }
}

/// Delete a cow and its insemination records
pub async fn delete_cow(
    State(state): State<AppState>,
    Path((farmer_id, cow_id)): Path<(String, String)>,
) -> impl IntoResponse {
    info!("DELETE /api/farmers/{}/cows/{}", farmer_id, cow_id);

    let session = match session_for(&state, &farmer_id).await {
        Ok(session) => session,
        Err(response) => return response,
    };

    match state.cow_service.delete_cow(&session, &cow_id).await {
        Ok(result) => (StatusCode::OK, Json(CowMapper::to_delete_response_dto(result))).into_response(),
        Err(e) => error_response("Failed to delete cow", e),
    }
}
