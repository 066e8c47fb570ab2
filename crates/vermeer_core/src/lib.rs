//! Core data types for the Vermeer vision analysis server.
//!
//! This crate provides the message, envelope, configuration, and retry
//! building blocks shared by every Vermeer tool.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod envelope;
mod media;
mod message;
mod request;
mod retry;
mod role;

pub use config::{ServerConfig, VisionConfig};
pub use envelope::{ErrorContext, ReplyContent, StandardResponse, ToolReply};
pub use media::ImageContent;
pub use message::{ChatMessage, ContentBlock, ImageUrlBlock, MessageContent};
pub use request::{ChatChoice, ChatRequest, ChatResponse, ChoiceMessage};
pub use retry::with_retry;
pub use role::Role;
