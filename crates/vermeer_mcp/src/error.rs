//! Error types for the MCP server layer.
//!
//! Tool failures never surface here: they are reported in-band as flagged
//! replies. This type covers the protocol-level failures that remain.

/// Errors that can occur in the MCP server.
#[derive(Debug, Clone, derive_more::Display)]
pub enum McpError {
    /// Tool not found
    #[display("Tool not found: {}", _0)]
    ToolNotFound(String),

    /// Server initialization failed
    #[display("Server initialization failed: {}", _0)]
    InitializationFailed(String),
}

impl std::error::Error for McpError {}

/// Result type for MCP operations.
pub type McpResult<T> = Result<T, McpError>;
