//! Daemon entry point for the talent MCP server.
//!
//! Loads configuration from the environment, builds the read-only dataset
//! services, and serves the MCP protocol over streamable HTTP or stdio.

mod config;
mod datasets;

use std::sync::Arc;

use talent_mcp::server::{McpHttpServerConfig, serve_stdio, serve_streamable_http};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::TalentConfig;
use crate::datasets::build_services;

const DEFAULT_LOG_FILTER: &str =
    "talent_mcpd=info,talent_mcp=info,talent_core=info,talent_store=info";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        // stdout belongs to the stdio transport; logs go to stderr.
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = TalentConfig::from_args();
    let services = Arc::new(build_services(&config)?);

    if config.enable_stdio {
        tracing::info!("serving MCP over stdio");
        serve_stdio(services).await?;
    } else {
        let http_config = McpHttpServerConfig::new(config.mcp_http_addr)
            .with_stateful_mode(config.stateful_mode)
            .with_sse_keep_alive(config.sse_keep_alive)
            .with_sse_retry(config.sse_retry);
        tracing::info!(addr = %config.mcp_http_addr, "serving MCP over streamable HTTP");
        serve_streamable_http(services, http_config).await?;
    }

    Ok(())
}
