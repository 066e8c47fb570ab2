//! Error screenshot diagnosis tool.

use crate::prompts::ERROR_DIAGNOSIS_PROMPT;
use crate::tools::{
    failure_reply, optional_str, require_str, success_reply, McpTool, RETRY_BASE_DELAY,
};
use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::info;
use vermeer_core::{with_retry, ToolReply};
use vermeer_error::VermeerResult;
use vermeer_vision::Analyzer;

const NAME: &str = "diagnose_error_screenshot";

/// Root-cause analysis of error, stack-trace, and exception screenshots.
pub struct ErrorDiagnosisTool {
    analyzer: Analyzer,
}

impl ErrorDiagnosisTool {
    /// Creates the tool over the given analyzer.
    pub fn new(analyzer: Analyzer) -> Self {
        Self { analyzer }
    }

    async fn diagnose(
        &self,
        image_source: &str,
        prompt: &str,
        context: Option<&str>,
    ) -> VermeerResult<String> {
        info!(image_source, "Starting error diagnosis");
        self.analyzer.validate_prompt(prompt, NAME)?;

        let enhanced = match context {
            Some(context) => format!(
                "{}\n\n<error_context>This error occurred {}.</error_context>",
                prompt, context
            ),
            None => prompt.to_string(),
        };

        let image = self.analyzer.resolve_image(image_source).await?;
        with_retry(
            || {
                self.analyzer.run_analysis(
                    ERROR_DIAGNOSIS_PROMPT,
                    &enhanced,
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
impl McpTool for ErrorDiagnosisTool {
    fn name(&self) -> &str {
        NAME
    }

    fn description(&self) -> &str {
        "Diagnose and analyze error messages, stack traces, and exception screenshots."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "image_source": {
                    "type": "string",
                    "description": "Local file path or remote URL to the error screenshot"
                },
                "prompt": {
                    "type": "string",
                    "description": "Instructions for the diagnosis"
                },
                "context": {
                    "type": "string",
                    "description": "Optional description of when the error occurred (e.g., 'while running the test suite')"
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
        let context = optional_str(&input, "context");

        match self.diagnose(image_source, prompt, context).await {
            Ok(result) => success_reply(result),
            Err(err) => failure_reply(err),
        }
    }
}
