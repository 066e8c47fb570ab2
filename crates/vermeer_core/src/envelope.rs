//! Uniform success/error envelopes and the tool-protocol reply shape.

use serde::Serialize;
use vermeer_error::VermeerErrorKind;

/// Diagnostic context embedded in an error envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorContext {
    /// Taxonomy name of the originating error
    pub name: String,
    /// Rendered description of the originating error
    pub detail: String,
}

/// The uniform contract every tool call returns, independent of which
/// underlying failure occurred. Exactly one of `data`/`error` is populated.
///
/// # Examples
///
/// ```
/// use vermeer_core::StandardResponse;
///
/// let ok = StandardResponse::success("looks good".to_string());
/// assert!(ok.success);
/// assert_eq!(ok.data.as_deref(), Some("looks good"));
/// assert!(ok.error.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StandardResponse<T> {
    /// Whether the call succeeded
    pub success: bool,
    /// The result value on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Human-readable message on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Milliseconds since the Unix epoch at envelope construction
    pub timestamp: i64,
    /// Diagnostic context from the original cause, when available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<ErrorContext>,
}

impl<T: Serialize> StandardResponse<T> {
    /// Wrap a success value.
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            timestamp: chrono::Utc::now().timestamp_millis(),
            context: None,
        }
    }

    /// Wrap a failure message, optionally embedding the original cause.
    pub fn error(message: impl Into<String>, cause: Option<&VermeerErrorKind>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
            timestamp: chrono::Utc::now().timestamp_millis(),
            context: cause.map(|kind| ErrorContext {
                name: kind.name().to_string(),
                detail: kind.to_string(),
            }),
        }
    }

    /// Adapt the envelope into the shape returned across the tool boundary.
    ///
    /// Success data becomes a single text block (non-string data is
    /// pretty-printed JSON); failures become one `Error: {message}` block
    /// with the error flag set.
    pub fn into_tool_reply(self) -> ToolReply {
        if self.success {
            let text = match serde_json::to_value(&self.data) {
                Ok(serde_json::Value::String(s)) => s,
                Ok(value) => {
                    serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
                }
                Err(e) => return ToolReply::error(format!("Failed to render result: {}", e)),
            };
            ToolReply {
                content: vec![ReplyContent::text(text)],
                is_error: false,
            }
        } else {
            ToolReply::error(self.error.unwrap_or_else(|| "Unknown error".to_string()))
        }
    }
}

/// One content block of a tool-protocol reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplyContent {
    /// Block type; always "text"
    #[serde(rename = "type")]
    pub content_type: String,
    /// The block text
    pub text: String,
}

impl ReplyContent {
    /// Create a text block.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content_type: "text".to_string(),
            text: text.into(),
        }
    }
}

/// The final reply shape returned across the tool boundary, regardless of
/// which internal error type produced a failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolReply {
    /// Ordered content blocks; always exactly one text block
    pub content: Vec<ReplyContent>,
    /// Set when the reply reports a failure
    #[serde(rename = "isError", skip_serializing_if = "std::ops::Not::not")]
    pub is_error: bool,
}

impl ToolReply {
    /// Create a failure reply with a single `Error: {message}` block.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            content: vec![ReplyContent::text(format!("Error: {}", message.into()))],
            is_error: true,
        }
    }
}
