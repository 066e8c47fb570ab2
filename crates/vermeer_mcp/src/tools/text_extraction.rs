//! Screenshot text extraction tool.

use crate::prompts::TEXT_EXTRACTION_PROMPT;
use crate::tools::{
    failure_reply, optional_str, require_str, success_reply, McpTool, RETRY_BASE_DELAY,
};
use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::info;
use vermeer_core::{with_retry, ToolReply};
use vermeer_error::VermeerResult;
use vermeer_vision::Analyzer;

const NAME: &str = "extract_text_from_screenshot";

/// OCR-style transcription of screenshots, with an optional language hint.
pub struct TextExtractionTool {
    analyzer: Analyzer,
}

impl TextExtractionTool {
    /// Creates the tool over the given analyzer.
    pub fn new(analyzer: Analyzer) -> Self {
        Self { analyzer }
    }

    async fn extract(
        &self,
        image_source: &str,
        prompt: &str,
        programming_language: Option<&str>,
    ) -> VermeerResult<String> {
        info!(image_source, "Starting text extraction");
        self.analyzer.validate_prompt(prompt, NAME)?;

        let enhanced = match programming_language {
            Some(lang) => format!(
                "{}\n\n<language_hint>The code is in {}.</language_hint>",
                prompt, lang
            ),
            None => prompt.to_string(),
        };

        let image = self.analyzer.resolve_image(image_source).await?;
        with_retry(
            || {
                self.analyzer.run_analysis(
                    TEXT_EXTRACTION_PROMPT,
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
impl McpTool for TextExtractionTool {
    fn name(&self) -> &str {
        NAME
    }

    fn description(&self) -> &str {
        "Extract and recognize text from screenshots using advanced OCR capabilities."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "image_source": {
                    "type": "string",
                    "description": "Local file path or remote URL to the screenshot"
                },
                "prompt": {
                    "type": "string",
                    "description": "Instructions for the extraction"
                },
                "programming_language": {
                    "type": "string",
                    "description": "Optional hint about the programming language in the image (e.g., javascript, python, go)"
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
        let language = optional_str(&input, "programming_language");

        match self.extract(image_source, prompt, language).await {
            Ok(result) => success_reply(result),
            Err(err) => failure_reply(err),
        }
    }
}
