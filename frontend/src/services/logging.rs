use gloo::net::http::Request;
use shared::LogEntry;
use wasm_bindgen_futures::spawn_local;

use super::api::DEFAULT_BASE_URL;

/// Forwards log lines to the backend, which writes them to its own log
pub struct Logger;

impl Logger {
    pub fn debug_with_component(component: &str, message: &str) {
        Self::log("debug", message, Some(component.to_string()));
    }

    pub fn info_with_component(component: &str, message: &str) {
        Self::log("info", message, Some(component.to_string()));
    }

    pub fn warn_with_component(component: &str, message: &str) {
        Self::log("warn", message, Some(component.to_string()));
    }

    pub fn error_with_component(component: &str, message: &str) {
        Self::log("error", message, Some(component.to_string()));
    }

    fn log(level: &str, message: &str, component: Option<String>) {
        let entry = LogEntry {
            level: level.to_string(),
            message: message.to_string(),
            component,
        };

        spawn_local(async move {
            let request = match Request::post(&format!("{}/api/logs", DEFAULT_BASE_URL)).json(&entry) {
                Ok(request) => request,
                Err(e) => {
                    gloo::console::error!("Failed to serialize log entry:", e.to_string());
                    return;
                }
            };
            if let Err(e) = request.send().await {
                gloo::console::warn!("Failed to forward log entry:", e.to_string());
            }
        });
    }
}
