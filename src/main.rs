mod config;
mod constants;
mod error;
mod models;
mod moon;
mod service;
mod store;
mod validation;
mod weather;

use anyhow::Result;
use rmcp::ServiceExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::service::StarGazer;

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries the MCP transport; logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mcp_stargazer_server=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting stargazer MCP server");

    let service = StarGazer::new()?;
    let server = service.serve(rmcp::transport::stdio()).await?;
    server.waiting().await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}
