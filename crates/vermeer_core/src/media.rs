//! Resolved image content for multimodal requests.

use serde::{Deserialize, Serialize};

/// A validated, ready-to-send image reference.
///
/// Produced by the source resolver from a raw path-or-URL string and consumed
/// exactly once when building a chat message. Remote references stay as URLs
/// (the provider fetches them); local files become inline base64 payloads.
///
/// # Examples
///
/// ```
/// use vermeer_core::ImageContent;
///
/// let remote = ImageContent::url("https://example.com/shot.png");
/// assert_eq!(remote.as_image_url(), "https://example.com/shot.png");
///
/// let inline = ImageContent::inline("image/png", "iVBORw0KGgo");
/// assert_eq!(inline.as_image_url(), "data:image/png;base64,iVBORw0KGgo");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ImageContent {
    /// Remote http(s) address, passed through to the provider
    Url {
        /// The remote address
        url: String,
    },
    /// Base64-encoded file bytes with their MIME type
    Inline {
        /// MIME type, e.g. "image/png" or "image/jpeg"
        #[serde(rename = "mimeType")]
        mime_type: String,
        /// Base64-encoded content
        #[serde(rename = "base64Data")]
        base64_data: String,
    },
}

impl ImageContent {
    /// Create a remote URL reference.
    pub fn url(url: impl Into<String>) -> Self {
        Self::Url { url: url.into() }
    }

    /// Create an inline base64 reference.
    pub fn inline(mime_type: impl Into<String>, base64_data: impl Into<String>) -> Self {
        Self::Inline {
            mime_type: mime_type.into(),
            base64_data: base64_data.into(),
        }
    }

    /// Render the value the `image_url` content block carries: the remote
    /// address as-is, or a `data:` URL for inline content.
    pub fn as_image_url(&self) -> String {
        match self {
            Self::Url { url } => url.clone(),
            Self::Inline {
                mime_type,
                base64_data,
            } => format!("data:{};base64,{}", mime_type, base64_data),
        }
    }
}
