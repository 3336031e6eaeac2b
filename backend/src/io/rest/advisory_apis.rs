use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use tracing::info;

use shared::{AdviceRequest, AdviceResponse};

use super::error_response;
use super::mappers::HerdMapper;
use crate::AppState;

/// Ask the assistant. Always answers 200 with text unless the question is empty.
pub async fn get_advice(
    State(state): State<AppState>,
    Json(request): Json<AdviceRequest>,
) -> impl IntoResponse {
    info!("POST /api/advice - {} chars", request.query.len());

    let query = HerdMapper::to_advice_query(request);
    match state.advisory_service.get_advice(query).await {
        Ok(advice) => (StatusCode::OK, Json(AdviceResponse { advice })).into_response(),
        Err(e) => error_response("Failed to get advice", e),
    }
}
