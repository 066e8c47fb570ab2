//! Error types for the Vermeer vision analysis server.
//!
//! This crate provides the closed error taxonomy used throughout the Vermeer
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - Leaf error structs (`ApiError`, `ValidationError`, ...) carry a message
//!   plus source location captured via `#[track_caller]`
//! - `VermeerErrorKind` is the exhaustive enum over the taxonomy
//! - `VermeerError` boxes the kind for cheap propagation through `?`
//!
//! # Examples
//!
//! ```
//! use vermeer_error::{ApiError, VermeerResult};
//!
//! fn call_api() -> VermeerResult<String> {
//!     Err(ApiError::new("Connection refused"))?
//! }
//!
//! match call_api() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod api;
mod error;
mod file_not_found;
mod tool_execution;
mod validation;

pub use api::ApiError;
pub use error::{VermeerError, VermeerErrorKind, VermeerResult};
pub use file_not_found::FileNotFoundError;
pub use tool_execution::{ToolErrorCode, ToolExecutionError};
pub use validation::ValidationError;
