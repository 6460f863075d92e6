//! Contact List MCP Server - Main entry point
//!
//! Serves a validated, in-memory contact list over the Model Context
//! Protocol (MCP) on stdio.

use anyhow::Result;
use contact_list_mcp::{Config, ContactListMcpServer};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL from .env is honoured
    let config = Config::from_env();

    // Initialize logging (stderr only to avoid polluting stdout/MCP communication)
    let default_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Starting contact list server (name min {}, city min {}, duplicate policy {})",
        config.name_min_length, config.city_min_length, config.duplicate_policy
    );

    let server = ContactListMcpServer::from_config(&config);

    info!("Starting MCP server with stdio transport");
    contact_list_mcp::server::run_server(server).await?;

    info!("Contact list server shutdown complete");
    Ok(())
}
