//! Vermeer MCP server binary.

use anyhow::Result;
use std::sync::Arc;
use tokio::io::{stdin, stdout};
use tracing_subscriber::{self, EnvFilter};
use vermeer_core::{ServerConfig, VisionConfig};
use vermeer_mcp::{
    ByteTransport, McpError, Router, RouterService, Server, ToolRegistry, VermeerRouter,
};
use vermeer_vision::Analyzer;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    let _ = dotenvy::dotenv();

    // stdout carries the protocol stream, so all logging goes to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_target(false)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Starting Vermeer MCP server");

    // Fail fast on missing or placeholder credentials
    let config = VisionConfig::from_env()
        .map_err(|err| McpError::InitializationFailed(err.to_string()))?;
    let analyzer = Analyzer::new(Arc::new(config));

    let router = VermeerRouter::builder()
        .server(ServerConfig::from_env())
        .tools(ToolRegistry::with_default_tools(analyzer))
        .build();

    tracing::info!(tools = router.list_tools().len(), "Router initialized");

    // Create and run server with stdio transport
    let server = Server::new(RouterService(router));
    let transport = ByteTransport::new(stdin(), stdout());

    tracing::info!("Server ready, listening on stdio");
    server.run(transport).await?;

    Ok(())
}
