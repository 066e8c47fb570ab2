//! Model Context Protocol (MCP) server for Vermeer.
//!
//! This crate exposes Vermeer's vision analysis capabilities as standardized
//! MCP tools: UI-to-artifact conversion, text extraction, error diagnosis,
//! diagram understanding, chart analysis, UI diffing, and general image
//! analysis. Every tool funnels through the shared orchestration pipeline in
//! `vermeer_vision` and returns a uniform reply envelope.
//!
//! # Usage
//!
//! ```no_run
//! use std::sync::Arc;
//! use vermeer_core::{ServerConfig, VisionConfig};
//! use vermeer_mcp::{ByteTransport, RouterService, Server, ToolRegistry, VermeerRouter};
//! use vermeer_vision::Analyzer;
//! use tokio::io::{stdin, stdout};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Arc::new(VisionConfig::from_env()?);
//!     let analyzer = Analyzer::new(config);
//!     let router = VermeerRouter::builder()
//!         .server(ServerConfig::from_env())
//!         .tools(ToolRegistry::with_default_tools(analyzer))
//!         .build();
//!
//!     let server = Server::new(RouterService(router));
//!     let transport = ByteTransport::new(stdin(), stdout());
//!     server.run(transport).await?;
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
pub mod prompts;
mod server;
pub mod tools;

pub use error::{McpError, McpResult};
pub use server::{VermeerRouter, VermeerRouterBuilder};
pub use tools::{
    DataVizTool, DiagramAnalysisTool, ErrorDiagnosisTool, GeneralImageTool, McpTool,
    TextExtractionTool, ToolRegistry, UiDiffTool, UiToArtifactTool,
};

// Re-export key mcp-server types for convenience
pub use mcp_server::router::RouterService;
pub use mcp_server::{ByteTransport, Router, Server};
