//! Image resolution, vision API client, and analysis orchestration.
//!
//! This crate is the shared pathway every Vermeer tool funnels through:
//! a source resolver that validates and encodes image references, an HTTP
//! client for the chat completions endpoint, and an orchestrator that
//! composes instruction templates, prompts, and images into one request.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod orchestrator;
mod resolver;

pub use client::ChatClient;
pub use orchestrator::{Analyzer, MAX_IMAGE_SIZE_MB};
pub use resolver::{download_image, is_url, mime_type_for, resolve_image, DOWNLOAD_LIMIT_MB};
