//! Input validation error types.

/// Error for bad input shape, size, or format. Fatal for the call but
/// user-correctable.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Validation Error: {} at line {} in {}", message, line, file)]
pub struct ValidationError {
    /// The underlying error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ValidationError {
    /// Create a new ValidationError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use vermeer_error::ValidationError;
    ///
    /// let err = ValidationError::new("Unsupported image format: .gif");
    /// assert!(err.message.contains(".gif"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
