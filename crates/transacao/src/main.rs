use anyhow::{Context, Result};
use dotenv::dotenv;
use shared::{config::Config, utils::Logger};
use tracing::info;
use transacao::{handler::AppRouter, state::AppState};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let config = Config::init().context("Failed to load configuration")?;

    let _logger = Logger::new("transacao-service", config.is_dev);

    let state = AppState::new(&config)
        .await
        .context("Failed to create AppState")?;

    AppRouter::serve(config.port, state)
        .await
        .context("Failed to start server")?;

    info!("✅ Transacao service shutdown complete.");

    Ok(())
}
