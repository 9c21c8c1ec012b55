//! Event Validator - validates vehicle telemetry batches over HTTP
//!
//! Accepts JSON arrays of telemetry events, reports every field-level problem
//! or returns an aggregate summary of the batch.

use std::sync::Arc;

use event_validator::{api, logging, Config, Result};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment
    let config = Arc::new(Config::from_env()?);

    config.validate()?;

    logging::init_tracing(&config.server.log_level, &config.server.environment)?;

    config.log_config();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting event validator");

    api::server::create_server(config).await?;

    tracing::info!("Event validator shutdown complete");
    Ok(())
}
