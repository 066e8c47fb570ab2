//! Orchestration-level error types.

use crate::VermeerErrorKind;

/// Discriminates validation failures from execution failures inside the
/// orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ToolErrorCode {
    /// Bad tool input caught before any I/O was attempted
    #[display("VALIDATION_ERROR")]
    Validation,
    /// A resolver or API failure surfaced while running the analysis
    #[display("EXECUTION_ERROR")]
    Execution,
}

/// Error wrapping an orchestration failure with the tool name, operation,
/// and the original cause.
///
/// Constructed by the orchestrator and propagated unchanged to the tool
/// adapter boundary, where it is rendered into a standard response.
#[derive(Debug, Clone, derive_more::Display)]
#[display("Tool Execution Error [{}/{}]: {} at line {} in {}", tool_name, code, message, line, file)]
pub struct ToolExecutionError {
    /// The underlying error message
    pub message: String,
    /// Name of the tool whose invocation failed
    pub tool_name: String,
    /// The operation that failed (e.g., "run_analysis")
    pub operation: String,
    /// Whether the failure was a validation or execution failure
    pub code: ToolErrorCode,
    /// The original error, when the failure wraps an inner layer
    pub cause: Option<Box<VermeerErrorKind>>,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl std::error::Error for ToolExecutionError {}

impl ToolExecutionError {
    /// Create a validation-flavored error raised before any I/O.
    ///
    /// # Examples
    ///
    /// ```
    /// use vermeer_error::{ToolErrorCode, ToolExecutionError};
    ///
    /// let err = ToolExecutionError::validation(
    ///     "Prompt is required for image analysis",
    ///     "analyze_image",
    ///     "validate_prompt",
    /// );
    /// assert_eq!(err.code, ToolErrorCode::Validation);
    /// assert!(err.cause.is_none());
    /// ```
    #[track_caller]
    pub fn validation(
        message: impl Into<String>,
        tool_name: impl Into<String>,
        operation: impl Into<String>,
    ) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            tool_name: tool_name.into(),
            operation: operation.into(),
            code: ToolErrorCode::Validation,
            cause: None,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Create an execution-flavored error preserving the original cause.
    #[track_caller]
    pub fn execution(
        message: impl Into<String>,
        tool_name: impl Into<String>,
        operation: impl Into<String>,
        cause: VermeerErrorKind,
    ) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            tool_name: tool_name.into(),
            operation: operation.into(),
            code: ToolErrorCode::Execution,
            cause: Some(Box::new(cause)),
            line: location.line(),
            file: location.file(),
        }
    }

    /// The original error this failure wraps, if any.
    pub fn cause(&self) -> Option<&VermeerErrorKind> {
        self.cause.as_deref()
    }
}
