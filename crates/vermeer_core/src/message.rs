//! Message types for multimodal chat requests.

use crate::{ImageContent, Role};
use serde::{Deserialize, Serialize};

/// The `image_url` payload of a content block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageUrlBlock {
    /// Remote address or `data:` URL
    pub url: String,
}

/// One block of user-turn content, serialized as the chat completions wire
/// format expects (`{"type": "text", ...}` / `{"type": "image_url", ...}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    /// Plain text
    Text {
        /// The text content
        text: String,
    },
    /// An image reference
    ImageUrl {
        /// The image address
        image_url: ImageUrlBlock,
    },
}

impl ContentBlock {
    /// Create a text block.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// Create an image block from resolved image content.
    pub fn image(content: &ImageContent) -> Self {
        Self::ImageUrl {
            image_url: ImageUrlBlock {
                url: content.as_image_url(),
            },
        }
    }
}

/// Message content: a plain string (system turns) or an ordered block list
/// (multimodal user turns).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    /// Plain text content
    Text(String),
    /// Ordered multimodal blocks
    Blocks(Vec<ContentBlock>),
}

/// A role-tagged message in a chat completions request.
///
/// # Examples
///
/// ```
/// use vermeer_core::{ChatMessage, ImageContent, Role};
///
/// let image = ImageContent::url("https://example.com/ui.png");
/// let msg = ChatMessage::multimodal(&[image], "describe this");
/// assert_eq!(msg.role, Role::User);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// The role of the message sender
    pub role: Role,
    /// The content of the message (can be multimodal)
    pub content: MessageContent,
}

impl ChatMessage {
    /// Create a system message carrying an instruction template.
    pub fn system(text: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: MessageContent::Text(text.into()),
        }
    }

    /// Create a user message with the image blocks first and exactly one
    /// trailing text block. Image order is preserved; downstream prompts
    /// reference images positionally.
    pub fn multimodal(images: &[ImageContent], prompt: impl Into<String>) -> Self {
        let mut blocks: Vec<ContentBlock> = images.iter().map(ContentBlock::image).collect();
        blocks.push(ContentBlock::text(prompt));
        Self {
            role: Role::User,
            content: MessageContent::Blocks(blocks),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multimodal_places_images_before_trailing_text() {
        let images = vec![
            ImageContent::url("https://example.com/a.png"),
            ImageContent::inline("image/jpeg", "Zm9v"),
        ];
        let msg = ChatMessage::multimodal(&images, "compare these");

        let MessageContent::Blocks(blocks) = &msg.content else {
            panic!("expected block content");
        };
        assert_eq!(blocks.len(), 3);
        assert!(matches!(blocks[0], ContentBlock::ImageUrl { .. }));
        assert!(matches!(blocks[1], ContentBlock::ImageUrl { .. }));
        assert_eq!(blocks[2], ContentBlock::text("compare these"));
    }

    #[test]
    fn wire_format_matches_chat_completions_shape() {
        let msg = ChatMessage::multimodal(
            &[ImageContent::inline("image/png", "aGk=")],
            "what is this",
        );
        let json = serde_json::to_value(&msg).unwrap();

        assert_eq!(json["role"], "user");
        assert_eq!(json["content"][0]["type"], "image_url");
        assert_eq!(
            json["content"][0]["image_url"]["url"],
            "data:image/png;base64,aGk="
        );
        assert_eq!(json["content"][1]["type"], "text");
        assert_eq!(json["content"][1]["text"], "what is this");
    }

    #[test]
    fn system_message_serializes_as_plain_string() {
        let msg = ChatMessage::system("You are a vision assistant.");
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["role"], "system");
        assert_eq!(json["content"], "You are a vision assistant.");
    }
}
