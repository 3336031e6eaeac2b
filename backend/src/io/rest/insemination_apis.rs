//! # REST API for Insemination Records
//!
//! Listing accepts `status`, `start_date` and `end_date` query parameters.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use tracing::info;

use shared::{CreateInseminationRequest, InseminationFilter};

use super::mappers::InseminationMapper;
use super::{error_response, session_for};
use crate::AppState;

pub async fn list_inseminations(
    State(state): State<AppState>,
    Path(farmer_id): Path<String>,
    Query(filter): Query<InseminationFilter>,
) -> impl IntoResponse {
    info!("GET /api/farmers/{}/inseminations - filter: {:?}", farmer_id, filter);

    let session = match session_for(&state, &farmer_id).await {
        Ok(session) => session,
        Err(response) => return response,
    };

    let query = InseminationMapper::to_list_query(filter);
    match state.insemination_service.list_inseminations(&session, query).await {
        Ok(records) => (StatusCode::OK, Json(InseminationMapper::to_list_dto(records))).into_response(),
        Err(e) => error_response("Failed to list insemination records", e),
    }
}

pub async fn create_insemination(
    State(state): State<AppState>,
    Path(farmer_id): Path<String>,
    Json(request): Json<CreateInseminationRequest>,
) -> impl IntoResponse {
    info!("POST /api/farmers/{}/inseminations - cow: {}", farmer_id, request.cow_id);

    let session = match session_for(&state, &farmer_id).await {
        Ok(session) => session,
        Err(response) => return response,
    };

    let command = InseminationMapper::to_create_command(request);
    match state.insemination_service.create_insemination(&session, command).await {
        Ok(result) => {
            (StatusCode::CREATED, Json(InseminationMapper::to_response_dto(result))).into_response()
        }
        Err(e) => error_response("Failed to record insemination", e),
    }
}

/// Mark a record as a confirmed pregnancy
pub async fn confirm_insemination(
    State(state): State<AppState>,
    Path((farmer_id, record_id)): Path<(String, String)>,
) -> impl IntoResponse {
    info!("POST /api/farmers/{}/inseminations/{}/confirm", farmer_id, record_id);

    let session = match session_for(&state, &farmer_id).await {
        Ok(session) => session,
        Err(response) => return response,
    };

    match state.insemination_service.confirm_insemination(&session, &record_id).await {
        Ok(result) => (StatusCode::OK, Json(InseminationMapper::to_response_dto(result))).into_response(),
        Err(e) => error_response("Failed to confirm insemination", e),
    }
}

pub async fn delete_insemination(
    State(state): State<AppState>,
    Path((farmer_id, record_id)): Path<(String, String)>,
) -> impl IntoResponse {
    info!("DELETE /api/farmers/{}/inseminations/{}", farmer_id, record_id);

    let session = match session_for(&state, &farmer_id).await {
        Ok(session) => session,
        Err(response) => return response,
    };

    match state.insemination_service.delete_insemination(&session, &record_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response("Failed to delete insemination record", e),
    }
}
