//! Data visualization analysis tool.

use crate::prompts::DATA_VIZ_ANALYSIS_PROMPT;
use crate::tools::{
    failure_reply, optional_str, require_str, success_reply, McpTool, RETRY_BASE_DELAY,
};
use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::info;
use vermeer_core::{with_retry, ToolReply};
use vermeer_error::VermeerResult;
use vermeer_vision::Analyzer;

const NAME: &str = "analyze_data_visualization";

/// Insight extraction from charts, graphs, and dashboards.
pub struct DataVizTool {
    analyzer: Analyzer,
}

impl DataVizTool {
    /// Creates the tool over the given analyzer.
    pub fn new(analyzer: Analyzer) -> Self {
        Self { analyzer }
    }

    async fn analyze(
        &self,
        image_source: &str,
        prompt: &str,
        analysis_focus: Option<&str>,
    ) -> VermeerResult<String> {
        info!(image_source, "Starting data visualization analysis");
        self.analyzer.validate_prompt(prompt, NAME)?;

        let enhanced = match analysis_focus {
            Some(focus) => format!(
                "{}\n\n<analysis_focus>Focus particularly on: {}.</analysis_focus>",
                prompt, focus
            ),
            None => prompt.to_string(),
        };

        let image = self.analyzer.resolve_image(image_source).await?;
        with_retry(
            || {
                self.analyzer.run_analysis(
                    DATA_VIZ_ANALYSIS_PROMPT,
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
impl McpTool for DataVizTool {
    fn name(&self) -> &str {
        NAME
    }

    fn description(&self) -> &str {
        "Analyze data visualizations, charts, graphs, and dashboards to extract insights and trends."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "image_source": {
                    "type": "string",
                    "description": "Local file path or remote URL to the chart or dashboard image"
                },
                "prompt": {
                    "type": "string",
                    "description": "Instructions for the analysis"
                },
                "analysis_focus": {
                    "type": "string",
                    "description": "Optional aspect to emphasize (e.g., 'trends', 'anomalies', 'correlations')"
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
        let focus = optional_str(&input, "analysis_focus");

        match self.analyze(image_source, prompt, focus).await {
            Ok(result) => success_reply(result),
            Err(err) => failure_reply(err),
        }
    }
}
