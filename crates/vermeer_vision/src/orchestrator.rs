//! Analysis orchestration shared by every tool adapter.

use crate::{resolver, ChatClient};
use std::sync::Arc;
use tracing::{error, info, instrument};
use vermeer_core::{ChatMessage, ImageContent, VisionConfig};
use vermeer_error::{ToolExecutionError, VermeerResult};

/// Size limit applied to local image files, in megabytes.
pub const MAX_IMAGE_SIZE_MB: u64 = 20;

/// Orchestrates one vision analysis end-to-end: prompt validation, image
/// resolution, message construction, and the API call.
///
/// Tools hold a clone and call its operations directly; there is no shared
/// mutable state beyond the read-only configuration.
#[derive(Debug, Clone)]
pub struct Analyzer {
    chat: ChatClient,
    max_image_size_mb: u64,
}

impl Analyzer {
    /// Creates an analyzer over the given configuration.
    pub fn new(config: Arc<VisionConfig>) -> Self {
        Self {
            chat: ChatClient::new(config),
            max_image_size_mb: MAX_IMAGE_SIZE_MB,
        }
    }

    /// The configuration the analyzer runs with.
    pub fn config(&self) -> &VisionConfig {
        self.chat.config()
    }

    /// Fail fast on an empty or whitespace-only prompt, before any file or
    /// network I/O is attempted.
    ///
    /// # Errors
    ///
    /// [`ToolExecutionError`] with a `VALIDATION_ERROR` code.
    pub fn validate_prompt(&self, prompt: &str, tool_name: &str) -> VermeerResult<()> {
        if prompt.trim().is_empty() {
            return Err(ToolExecutionError::validation(
                "Prompt is required for image analysis",
                tool_name,
                "validate_prompt",
            ))?;
        }
        Ok(())
    }

    /// Resolve a single image source into ready-to-send content.
    pub async fn resolve_image(&self, source: &str) -> VermeerResult<ImageContent> {
        resolver::resolve_image(source, self.max_image_size_mb).await
    }

    /// Resolve an ordered list of image sources, sequentially.
    ///
    /// Order is preserved: downstream prompts reference "the first image" and
    /// "the second image" positionally.
    pub async fn resolve_images(&self, sources: &[&str]) -> VermeerResult<Vec<ImageContent>> {
        let mut contents = Vec::with_capacity(sources.len());
        for source in sources {
            contents.push(self.resolve_image(source).await?);
        }
        Ok(contents)
    }

    /// Run one vision analysis: a system turn carrying the instruction
    /// template, then a user turn with the image blocks followed by the
    /// prompt text.
    ///
    /// # Errors
    ///
    /// Any client failure is re-raised as a [`ToolExecutionError`] with an
    /// `EXECUTION_ERROR` code, tagged with the tool name and preserving the
    /// original error as cause.
    #[instrument(skip(self, system_prompt, user_prompt, images), fields(tool = tool_name, image_count = images.len()))]
    pub async fn run_analysis(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        images: &[ImageContent],
        tool_name: &str,
    ) -> VermeerResult<String> {
        let messages = vec![
            ChatMessage::system(system_prompt),
            ChatMessage::multimodal(images, user_prompt),
        ];

        match self.chat.send(messages).await {
            Ok(result) => {
                info!(tool = tool_name, "Analysis completed successfully");
                Ok(result)
            }
            Err(err) => {
                error!(tool = tool_name, error = %err, "Analysis failed");
                let kind = err.into_kind();
                let message = format!("{} analysis failed: {}", tool_name, kind.message());
                Err(ToolExecutionError::execution(
                    message,
                    tool_name,
                    "run_analysis",
                    kind,
                ))?
            }
        }
    }
}
