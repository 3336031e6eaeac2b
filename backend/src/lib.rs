//! # CowManager Backend
//!
//! Local server behind the CowManager web UI. It keeps farmers, cows and
//! insemination records in a JSON record store on disk, derives the
//! pregnancy and heat-check views, and forwards assistant questions to
//! Gemini.
//!
//! ## Architecture
//!
//! ```text
//! UI Layer (Yew frontend)
//!     ↓
//! IO Layer (REST handlers, mappers, Gemini client)
//!     ↓
//! Domain Layer (services, business rules)
//!     ↓
//! Storage Layer (record store, repositories)
//! ```

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use anyhow::{Context, Result};
use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::info;

use crate::config::AppConfig;
use crate::domain::{
    AdvisoryService, CowService, FarmerService, HerdService, InseminationService, TextGenerator,
};
use crate::io::GeminiClient;
use crate::storage::{
    CowRepository, FarmerRepository, InseminationRepository, SessionRepository, StoreConnection,
};

/// Uploaded photos travel inline as data URLs
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub farmer_service: FarmerService,
    pub cow_service: CowService,
    pub insemination_service: InseminationService,
    pub herd_service: HerdService,
    pub advisory_service: AdvisoryService,
}

impl AppState {
    /// Wire every service onto one store connection
    pub fn new(connection: StoreConnection, generator: Arc<dyn TextGenerator>) -> Self {
        let farmers = Arc::new(FarmerRepository::new(connection.clone()));
        let session = Arc::new(SessionRepository::new(connection.clone()));
        let cows = Arc::new(CowRepository::new(connection.clone()));
        let records = Arc::new(InseminationRepository::new(connection));

        Self {
            farmer_service: FarmerService::new(farmers, session),
            cow_service: CowService::new(cows.clone()),
            insemination_service: InseminationService::new(records.clone(), cows.clone()),
            herd_service: HerdService::new(cows, records),
            advisory_service: AdvisoryService::new(generator),
        }
    }
}

/// Initialize the backend with all required services
pub fn initialize_backend(config: &AppConfig) -> Result<AppState> {
    info!("Setting up record store");
    let connection = StoreConnection::open_json(&config.data_directory)?;

    info!("Setting up advisory client for model {}", config.advisory.model);
    let generator = Arc::new(GeminiClient::new(config.advisory.clone()));

    Ok(AppState::new(connection, generator))
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, config: &AppConfig) -> Result<Router> {
    let origin = config
        .allowed_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("Invalid allowed origin '{}'", config.allowed_origin))?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/session", get(io::get_session).post(io::login).delete(io::logout))
        .route("/farmers/:farmer_id/cows", get(io::list_cows).post(io::create_cow))
        .route(
            "/farmers/:farmer_id/cows/:cow_id",
            put(io::update_cow).delete(io::delete_cow),
        )
        .route(
            "/farmers/:farmer_id/inseminations",
            get(io::list_inseminations).post(io::create_insemination),
        )
        .route(
            "/farmers/:farmer_id/inseminations/:record_id",
            axum::routing::delete(io::delete_insemination),
        )
        .route(
            "/farmers/:farmer_id/inseminations/:record_id/confirm",
            post(io::confirm_insemination),
        )
        .route("/farmers/:farmer_id/pregnancies", get(io::list_pregnancies))
        .route("/farmers/:farmer_id/reminders", get(io::list_reminders))
        .route("/advice", post(io::get_advice))
        .route("/logs", post(io::log_message));

    Ok(Router::new()
        .nest("/api", api_routes)
        .fallback_service(ServeDir::new(&config.frontend_dist))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(cors)
        .with_state(app_state))
}

/// Build the backend from `config` and serve until the process is stopped
pub async fn run(config: AppConfig) -> Result<()> {
    let app_state = initialize_backend(&config)?;
    let app = create_router(app_state, &config)?;

    let listener = tokio::net::TcpListener::bind(&config.bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_address))?;
    info!("CowManager listening on http://{}", config.bind_address);

    axum::serve(listener, app).await?;
    Ok(())
}
