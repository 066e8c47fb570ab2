//! Tool implementations for the MCP server.

mod data_viz;
mod diagram_analysis;
mod error_diagnosis;
mod general_image;
mod text_extraction;
mod ui_diff;
mod ui_to_artifact;

pub use data_viz::DataVizTool;
pub use diagram_analysis::DiagramAnalysisTool;
pub use error_diagnosis::ErrorDiagnosisTool;
pub use general_image::GeneralImageTool;
pub use text_extraction::TextExtractionTool;
pub use ui_diff::UiDiffTool;
pub use ui_to_artifact::UiToArtifactTool;

use crate::{McpError, McpResult};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use vermeer_core::{StandardResponse, ToolReply};
use vermeer_error::{VermeerError, VermeerErrorKind};
use vermeer_vision::Analyzer;

/// Base delay for the exponential backoff between analysis retries.
pub(crate) const RETRY_BASE_DELAY: Duration = Duration::from_millis(1000);

/// Trait for MCP tools.
///
/// Execution is infallible at this level: every failure is folded into a
/// flagged reply so callers always receive a well-formed text block.
#[async_trait]
pub trait McpTool: Send + Sync {
    /// Returns the tool name.
    fn name(&self) -> &str;

    /// Returns the tool description for the LLM.
    fn description(&self) -> &str;

    /// Returns the input schema as JSON Schema.
    fn input_schema(&self) -> Value;

    /// Executes the tool with the given input.
    async fn execute(&self, input: Value) -> ToolReply;
}

/// Registry for managing MCP tools.
#[derive(Clone, Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn McpTool>>,
}

impl ToolRegistry {
    /// Creates an empty tool registry.
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Creates a registry with every vision tool registered over the given
    /// analyzer.
    pub fn with_default_tools(analyzer: Analyzer) -> Self {
        let mut registry = Self::new();

        registry.register(Arc::new(UiToArtifactTool::new(analyzer.clone())));
        registry.register(Arc::new(TextExtractionTool::new(analyzer.clone())));
        registry.register(Arc::new(ErrorDiagnosisTool::new(analyzer.clone())));
        registry.register(Arc::new(DiagramAnalysisTool::new(analyzer.clone())));
        registry.register(Arc::new(DataVizTool::new(analyzer.clone())));
        registry.register(Arc::new(UiDiffTool::new(analyzer.clone())));
        registry.register(Arc::new(GeneralImageTool::new(analyzer)));

        tracing::info!("ToolRegistry initialized with {} tools", registry.len());
        registry
    }

    /// Registers a tool.
    pub fn register(&mut self, tool: Arc<dyn McpTool>) {
        self.tools.insert(tool.name().to_string(), tool);
    }

    /// Gets a tool by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn McpTool>> {
        self.tools.get(name).cloned()
    }

    /// Lists all registered tools.
    pub fn list(&self) -> Vec<Arc<dyn McpTool>> {
        self.tools.values().cloned().collect()
    }

    /// Executes a tool by name.
    pub async fn execute(&self, name: &str, input: Value) -> McpResult<ToolReply> {
        let tool = self
            .get(name)
            .ok_or_else(|| McpError::ToolNotFound(name.to_string()))?;

        Ok(tool.execute(input).await)
    }

    /// Gets the number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Returns true if no tools are registered.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

/// Fold an analysis failure into a flagged reply.
///
/// One exhaustive match over the closed error taxonomy produces the
/// category-prefixed message; the file-not-found message already carries its
/// prefix from the construction site. The original cause is embedded in the
/// envelope context.
pub fn failure_reply(err: VermeerError) -> ToolReply {
    let kind = err.into_kind();
    let message = match &kind {
        VermeerErrorKind::FileNotFound(e) => e.message.clone(),
        VermeerErrorKind::Validation(e) => format!("Validation error: {}", e.message),
        VermeerErrorKind::Api(e) => format!("API error: {}", e.message),
        VermeerErrorKind::ToolExecution(e) => format!("Unexpected error: {}", e.message),
    };
    StandardResponse::<String>::error(message, Some(&kind)).into_tool_reply()
}

/// Wrap a successful analysis result for the tool boundary.
pub(crate) fn success_reply(result: String) -> ToolReply {
    StandardResponse::success(result).into_tool_reply()
}

/// Extract a required non-empty string parameter, or produce the flagged
/// reply to return as-is.
pub(crate) fn require_str<'a>(
    input: &'a Value,
    field: &str,
    label: &str,
) -> Result<&'a str, ToolReply> {
    match input.get(field).and_then(Value::as_str) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ToolReply::error(format!(
            "Validation failed: {} cannot be empty",
            label
        ))),
    }
}

/// Extract an optional string parameter, treating blank values as absent.
pub(crate) fn optional_str<'a>(input: &'a Value, field: &str) -> Option<&'a str> {
    input
        .get(field)
        .and_then(Value::as_str)
        .filter(|value| !value.trim().is_empty())
}
