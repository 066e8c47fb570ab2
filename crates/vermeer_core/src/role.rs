//! Role types for conversation participants.

use serde::{Deserialize, Serialize};

/// Roles are the same across modalities (text, image, etc.)
///
/// Serialized lowercase to match the chat completions wire format.
///
/// # Examples
///
/// ```
/// use vermeer_core::Role;
///
/// let json = serde_json::to_string(&Role::System).unwrap();
/// assert_eq!(json, "\"system\"");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System messages provide context and instructions
    System,
    /// User messages are from the human
    User,
    /// Assistant messages are from the AI
    Assistant,
}
