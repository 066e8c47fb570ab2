//! UI-to-artifact conversion tool.

use crate::prompts::ui_to_artifact_prompt;
use crate::tools::{failure_reply, require_str, success_reply, McpTool, RETRY_BASE_DELAY};
use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::info;
use vermeer_core::{with_retry, ToolReply};
use vermeer_error::{ValidationError, VermeerResult};
use vermeer_vision::Analyzer;

const NAME: &str = "ui_to_artifact";

/// Converts UI screenshots into code, prompts, specifications, or
/// descriptions, selected by the `output_type` parameter.
pub struct UiToArtifactTool {
    analyzer: Analyzer,
}

impl UiToArtifactTool {
    /// Creates the tool over the given analyzer.
    pub fn new(analyzer: Analyzer) -> Self {
        Self { analyzer }
    }

    async fn convert(
        &self,
        image_source: &str,
        output_type: &str,
        prompt: &str,
    ) -> VermeerResult<String> {
        info!(image_source, output_type, "Starting UI to artifact conversion");

        let system_prompt = ui_to_artifact_prompt(output_type).ok_or_else(|| {
            ValidationError::new(format!(
                "Invalid output_type '{}'. Must be one of: code, prompt, spec, description",
                output_type
            ))
        })?;

        self.analyzer.validate_prompt(prompt, NAME)?;
        let image = self.analyzer.resolve_image(image_source).await?;
        with_retry(
            || {
                self.analyzer.run_analysis(
                    system_prompt,
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
impl McpTool for UiToArtifactTool {
    fn name(&self) -> &str {
        NAME
    }

    fn description(&self) -> &str {
        "Convert UI screenshots into various artifacts: code, prompts, design specifications, or descriptions."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "image_source": {
                    "type": "string",
                    "description": "Local file path or remote URL to the UI screenshot"
                },
                "output_type": {
                    "type": "string",
                    "enum": ["code", "prompt", "spec", "description"],
                    "description": "The kind of artifact to generate from the screenshot"
                },
                "prompt": {
                    "type": "string",
                    "description": "Specific instructions for the conversion"
                }
            },
            "required": ["image_source", "output_type", "prompt"]
        })
    }

    async fn execute(&self, input: Value) -> ToolReply {
        let image_source = match require_str(&input, "image_source", "Image source") {
            Ok(value) => value,
            Err(reply) => return reply,
        };
        let output_type = match require_str(&input, "output_type", "Output type") {
            Ok(value) => value,
            Err(reply) => return reply,
        };
        let prompt = match require_str(&input, "prompt", "Prompt") {
            Ok(value) => value,
            Err(reply) => return reply,
        };

        match self.convert(image_source, output_type, prompt).await {
            Ok(result) => success_reply(result),
            Err(err) => failure_reply(err),
        }
    }
}
