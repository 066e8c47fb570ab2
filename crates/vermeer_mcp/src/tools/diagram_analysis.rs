//! Technical diagram understanding tool.

use crate::prompts::DIAGRAM_UNDERSTANDING_PROMPT;
use crate::tools::{
    failure_reply, optional_str, require_str, success_reply, McpTool, RETRY_BASE_DELAY,
};
use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::info;
use vermeer_core::{with_retry, ToolReply};
use vermeer_error::VermeerResult;
use vermeer_vision::Analyzer;

const NAME: &str = "understand_technical_diagram";

/// Interpretation of architecture, flowchart, UML, and ER diagrams.
pub struct DiagramAnalysisTool {
    analyzer: Analyzer,
}

impl DiagramAnalysisTool {
    /// Creates the tool over the given analyzer.
    pub fn new(analyzer: Analyzer) -> Self {
        Self { analyzer }
    }

    async fn analyze(
        &self,
        image_source: &str,
        prompt: &str,
        diagram_type: Option<&str>,
    ) -> VermeerResult<String> {
        info!(image_source, "Starting diagram analysis");
        self.analyzer.validate_prompt(prompt, NAME)?;

        let enhanced = match diagram_type {
            Some(kind) => format!(
                "{}\n\n<diagram_type_hint>This is a {} diagram.</diagram_type_hint>",
                prompt, kind
            ),
            None => prompt.to_string(),
        };

        let image = self.analyzer.resolve_image(image_source).await?;
        with_retry(
            || {
                self.analyzer.run_analysis(
                    DIAGRAM_UNDERSTANDING_PROMPT,
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
impl McpTool for DiagramAnalysisTool {
    fn name(&self) -> &str {
        NAME
    }

    fn description(&self) -> &str {
        "Analyze and explain technical diagrams including architecture diagrams, flowcharts, UML, ER diagrams."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "image_source": {
                    "type": "string",
                    "description": "Local file path or remote URL to the diagram image"
                },
                "prompt": {
                    "type": "string",
                    "description": "Instructions for the analysis"
                },
                "diagram_type": {
                    "type": "string",
                    "description": "Diagram type hint (architecture, flowchart, uml, er-diagram, sequence)"
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
        let diagram_type = optional_str(&input, "diagram_type");

        match self.analyze(image_source, prompt, diagram_type).await {
            Ok(result) => success_reply(result),
            Err(err) => failure_reply(err),
        }
    }
}
