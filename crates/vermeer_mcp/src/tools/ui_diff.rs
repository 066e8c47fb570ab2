//! UI diff check tool.

use crate::prompts::UI_DIFF_CHECK_PROMPT;
use crate::tools::{failure_reply, require_str, success_reply, McpTool, RETRY_BASE_DELAY};
use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::info;
use vermeer_core::{with_retry, ToolReply};
use vermeer_error::VermeerResult;
use vermeer_vision::Analyzer;

const NAME: &str = "ui_diff_check";

/// Compares an expected/reference screenshot against an actual one.
///
/// The expected image is always sent first; the prompt preamble tells the
/// model which is which, so source order must be preserved end to end.
pub struct UiDiffTool {
    analyzer: Analyzer,
}

impl UiDiffTool {
    /// Creates the tool over the given analyzer.
    pub fn new(analyzer: Analyzer) -> Self {
        Self { analyzer }
    }

    async fn compare(
        &self,
        expected_source: &str,
        actual_source: &str,
        prompt: &str,
    ) -> VermeerResult<String> {
        info!(expected_source, actual_source, "Starting UI diff check");
        self.analyzer.validate_prompt(prompt, NAME)?;

        let enhanced = format!(
            "<images>\n\
             The first image is EXPECTED/REFERENCE design (the target).\n\
             The second image is ACTUAL/CURRENT implementation (what needs to be checked).\n\
             </images>\n\n{}",
            prompt
        );

        let images = self
            .analyzer
            .resolve_images(&[expected_source, actual_source])
            .await?;
        with_retry(
            || self.analyzer.run_analysis(UI_DIFF_CHECK_PROMPT, &enhanced, &images, NAME),
            *self.analyzer.config().retry_count(),
            RETRY_BASE_DELAY,
        )
        .await
    }
}

#[async_trait]
impl McpTool for UiDiffTool {
    fn name(&self) -> &str {
        NAME
    }

    fn description(&self) -> &str {
        "Compare two UI screenshots to identify visual differences and implementation discrepancies."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "expected_image_source": {
                    "type": "string",
                    "description": "Local file path or remote URL to the expected/reference image"
                },
                "actual_image_source": {
                    "type": "string",
                    "description": "Local file path or remote URL to the actual implementation image"
                },
                "prompt": {
                    "type": "string",
                    "description": "Instructions for comparison"
                }
            },
            "required": ["expected_image_source", "actual_image_source", "prompt"]
        })
    }

    async fn execute(&self, input: Value) -> ToolReply {
        let expected = match require_str(&input, "expected_image_source", "Expected image source")
        {
            Ok(value) => value,
            Err(reply) => return reply,
        };
        let actual = match require_str(&input, "actual_image_source", "Actual image source") {
            Ok(value) => value,
            Err(reply) => return reply,
        };
        let prompt = match require_str(&input, "prompt", "Prompt") {
            Ok(value) => value,
            Err(reply) => return reply,
        };

        match self.compare(expected, actual, prompt).await {
            Ok(result) => success_reply(result),
            Err(err) => failure_reply(err),
        }
    }
}
