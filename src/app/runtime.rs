//! Runtime initialization and setup
//!
//! Owns the store handle for the lifetime of the server.

use crate::api::{ApiServer, ApiState};
use crate::app::{config::AppConfig, logging::init_logging};
use crate::store::StoreFactory;
use anyhow::{Context, Result};
use tracing::{info, warn};

/// Initialize logging, connect the store and serve until shutdown
pub async fn run(config: AppConfig) -> Result<()> {
    init_logging(&config);

    let store = StoreFactory::from_config(&config.store)
        .await
        .context("Failed to open document store")?;

    if !config.env.database_url_set {
        warn!("DATABASE_URL not set; submissions will not be stored");
    }

    let state = ApiState::new(store, config.env)?;
    ApiServer::new(state, config.socket_addr()).start().await?;

    info!("Shutdown complete");
    Ok(())
}
