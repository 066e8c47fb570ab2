//! Request and response wire types for the chat completions endpoint.

use crate::ChatMessage;
use serde::{Deserialize, Serialize};

/// Body of a `POST {base}/chat/completions` request.
///
/// # Examples
///
/// ```
/// use vermeer_core::{ChatMessage, ChatRequest};
///
/// let request = ChatRequest {
///     model: "gpt-4o".to_string(),
///     messages: vec![ChatMessage::system("You are a vision assistant.")],
///     temperature: 0.7,
///     top_p: 1.0,
///     max_tokens: 2048,
///     stream: false,
/// };
/// assert!(!request.stream);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Model identifier
    pub model: String,
    /// The conversation messages to send
    pub messages: Vec<ChatMessage>,
    /// Sampling temperature
    pub temperature: f32,
    /// Nucleus sampling parameter
    pub top_p: f32,
    /// Maximum number of tokens to generate
    pub max_tokens: u32,
    /// Streaming is always disabled for tool calls
    pub stream: bool,
}

/// The assistant message inside a response choice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ChoiceMessage {
    /// Generated text; absent or empty payloads are treated as errors
    #[serde(default)]
    pub content: Option<String>,
}

/// One completion choice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ChatChoice {
    /// The generated message
    #[serde(default)]
    pub message: ChoiceMessage,
}

/// Body of a chat completions response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ChatResponse {
    /// Completion choices; only the first is consumed
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

impl ChatResponse {
    /// The first choice's message content, if present and non-empty.
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
            .filter(|content| !content.is_empty())
    }
}
