//! General-purpose image analysis tool.

use crate::prompts::GENERAL_IMAGE_ANALYSIS_PROMPT;
use crate::tools::{failure_reply, require_str, success_reply, McpTool, RETRY_BASE_DELAY};
use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::info;
use vermeer_core::{with_retry, ToolReply};
use vermeer_error::VermeerResult;
use vermeer_vision::Analyzer;

const NAME: &str = "analyze_image";

/// Catch-all analysis guided entirely by the caller's prompt.
pub struct GeneralImageTool {
    analyzer: Analyzer,
}

impl GeneralImageTool {
    /// Creates the tool over the given analyzer.
    pub fn new(analyzer: Analyzer) -> Self {
        Self { analyzer }
    }

    async fn analyze(&self, image_source: &str, prompt: &str) -> VermeerResult<String> {
        info!(image_source, "Starting general image analysis");
        self.analyzer.validate_prompt(prompt, NAME)?;
        let image = self.analyzer.resolve_image(image_source).await?;
        // Only the network-calling phase is retried; validation and file
        // failures will not change the second time.
        with_retry(
            || {
                self.analyzer.run_analysis(
                    GENERAL_IMAGE_ANALYSIS_PROMPT,
                    prompt,
                    std::slice::from_ref(&image),
                    NAME,
                )
            },
            *self.analyzer.config().retry_count(),
            RETRY_BASE_DELAY,
        )
        .await
    }
}

#[async_trait]
impl McpTool for GeneralImageTool {
    fn name(&self) -> &str {
        NAME
    }

    fn description(&self) -> &str {
        "General-purpose image analysis for scenarios not covered by specialized tools."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "image_source": {
                    "type": "string",
                    "description": "Local file path or remote URL to the image"
                },
                "prompt": {
                    "type": "string",
                    "description": "Detailed description of what you want to analyze"
                }
            },
            "required": ["image_source", "prompt"]
        })
    }

    async fn execute(&self, input: Value) -> ToolReply {
        let image_source = match require_str(&input, "image_source", "Image source") {
            Ok(value) => value,
            Err(reply) => return reply,
        };
        let prompt = match require_str(&input, "prompt", "Prompt") {
            Ok(value) => value,
            Err(reply) => return reply,
        };

        match self.analyze(image_source, prompt).await {
            Ok(result) => success_reply(result),
            Err(err) => failure_reply(err),
        }
    }
}
