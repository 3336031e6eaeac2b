use axum::{extract::State, response::Json};
use tracing::{debug, error, info, warn};

use shared::{LogEntry, LogResponse};

use crate::AppState;

/// Re-emit a frontend log line through the backend's subscriber
pub async fn log_message(
    State(_state): State<AppState>,
    Json(entry): Json<LogEntry>,
) -> Json<LogResponse> {
    let component = entry.component.as_deref().unwrap_or("frontend");

    match entry.level.to_lowercase().as_str() {
        "debug" => debug!(component, "{}", entry.message),
        "warn" => warn!(component, "{}", entry.message),
        "error" => error!(component, "{}", entry.message),
        _ => info!(component, "{}", entry.message),
    }

    Json(LogResponse { success: true })
}
