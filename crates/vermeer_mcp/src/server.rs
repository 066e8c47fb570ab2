//! MCP router wiring the tool registry to the protocol surface.

use crate::tools::ToolRegistry;
use mcp_server::router::CapabilitiesBuilder;
use mcp_spec::content::Content;
use mcp_spec::handler::{PromptError, ResourceError, ToolError};
use mcp_spec::prompt::Prompt;
use mcp_spec::protocol::ServerCapabilities;
use mcp_spec::resource::Resource;
use mcp_spec::tool::Tool;
use serde_json::Value;
use std::future::Future;
use std::pin::Pin;
use tracing::debug;
use vermeer_core::ServerConfig;

/// MCP router for Vermeer.
///
/// Tool failures are reported in-band as flagged text replies, never as
/// transport-level faults; only an unknown tool name surfaces as a protocol
/// error.
#[derive(Clone)]
pub struct VermeerRouter {
    server: ServerConfig,
    tools: ToolRegistry,
}

impl VermeerRouter {
    /// Creates a new router builder.
    pub fn builder() -> VermeerRouterBuilder {
        VermeerRouterBuilder::default()
    }
}

impl mcp_server::Router for VermeerRouter {
    fn name(&self) -> String {
        self.server.name().clone()
    }

    fn instructions(&self) -> String {
        "Vision analysis tools for screenshots, diagrams, charts, and UI designs. \
         Pass images as local file paths or http(s) URLs."
            .to_string()
    }

    fn capabilities(&self) -> ServerCapabilities {
        CapabilitiesBuilder::new().with_tools(false).build()
    }

    fn list_tools(&self) -> Vec<Tool> {
        self.tools
            .list()
            .into_iter()
            .map(|tool| {
                Tool::new(
                    tool.name().to_string(),
                    tool.description().to_string(),
                    tool.input_schema(),
                )
            })
            .collect()
    }

    fn call_tool(
        &self,
        tool_name: &str,
        arguments: Value,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<Content>, ToolError>> + Send + 'static>> {
        let registry = self.tools.clone();
        let name = tool_name.to_string();
        Box::pin(async move {
            debug!(tool = %name, "Tool call received");
            let reply = registry
                .execute(&name, arguments)
                .await
                .map_err(|err| ToolError::NotFound(err.to_string()))?;
            Ok(reply
                .content
                .into_iter()
                .map(|block| Content::text(block.text))
                .collect())
        })
    }

    fn list_resources(&self) -> Vec<Resource> {
        Vec::new()
    }

    fn read_resource(
        &self,
        uri: &str,
    ) -> Pin<Box<dyn Future<Output = Result<String, ResourceError>> + Send + 'static>> {
        let uri = uri.to_string();
        Box::pin(async move {
            Err(ResourceError::NotFound(format!(
                "Resource not found: {}",
                uri
            )))
        })
    }

    fn list_prompts(&self) -> Vec<Prompt> {
        Vec::new()
    }

    fn get_prompt(
        &self,
        prompt_name: &str,
    ) -> Pin<Box<dyn Future<Output = Result<String, PromptError>> + Send + 'static>> {
        let name = prompt_name.to_string();
        Box::pin(async move {
            Err(PromptError::NotFound(format!(
                "Prompt not found: {}",
                name
            )))
        })
    }
}

/// Builder for the Vermeer router.
#[derive(Default)]
pub struct VermeerRouterBuilder {
    server: Option<ServerConfig>,
    tools: Option<ToolRegistry>,
}

impl VermeerRouterBuilder {
    /// Sets the server identity.
    pub fn server(mut self, server: ServerConfig) -> Self {
        self.server = Some(server);
        self
    }

    /// Sets the tool registry.
    pub fn tools(mut self, tools: ToolRegistry) -> Self {
        self.tools = Some(tools);
        self
    }

    /// Builds the router.
    pub fn build(self) -> VermeerRouter {
        VermeerRouter {
            server: self
                .server
                .unwrap_or_else(|| ServerConfig::from_lookup(|_| None)),
            tools: self.tools.unwrap_or_default(),
        }
    }
}
