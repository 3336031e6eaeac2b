use tracing::info;
use tracing_subscriber::EnvFilter;

use cowmanager_backend::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::load()?;
    info!("Using data directory {}", config.data_directory.display());

    cowmanager_backend::run(config).await
}
