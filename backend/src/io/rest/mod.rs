//! # REST API Interface Layer
//!
//! HTTP endpoints for CowManager. Every farmer-scoped route carries the
//! farmer ID in its path; handlers resolve it to a session before calling a
//! service, so one farmer can never reach another farmer's records.
//!
//! Error mapping:
//! - `DomainError::Validation` → 400 with the message as body
//! - `DomainError::NotFound` → 404
//! - anything else (storage, serialization) → 500

pub mod advisory_apis;
pub mod cow_apis;
pub mod herd_apis;
pub mod insemination_apis;
pub mod logging_apis;
pub mod mappers;
pub mod session_apis;

pub use advisory_apis::*;
pub use cow_apis::*;
pub use herd_apis::*;
pub use insemination_apis::*;
pub use logging_apis::*;
pub use session_apis::*;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, warn};

use crate::domain::errors::DomainError;
use crate::domain::models::session::Session;
use crate::AppState;

/// Translate a service error into a response, logging it on the way
pub fn error_response(context: &str, err: anyhow::Error) -> Response {
    match err.downcast_ref::<DomainError>() {
        Some(DomainError::Validation(message)) => {
            warn!("{}: {}", context, message);
            (StatusCode::BAD_REQUEST, message.clone()).into_response()
        }
        Some(not_found @ DomainError::NotFound { .. }) => {
            warn!("{}: {}", context, not_found);
            (StatusCode::NOT_FOUND, not_found.to_string()).into_response()
        }
        None => {
            error!("{}: {:#}", context, err);
            (StatusCode::INTERNAL_SERVER_ERROR, context.to_string()).into_response()
        }
    }
}

/// Resolve the farmer in the request path, or produce the error response
pub(crate) async fn session_for(state: &AppState, farmer_id: &str) -> Result<Session, Response> {
    state
        .farmer_service
        .resolve_session(farmer_id)
        .await
        .map_err(|e| error_response("Failed to resolve farmer", e))
}
