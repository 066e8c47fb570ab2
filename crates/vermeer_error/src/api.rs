//! API error types.

/// Error for any network, HTTP, or protocol anomaly with the model provider.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("API Error: {} at line {} in {}", message, line, file)]
pub struct ApiError {
    /// The underlying error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ApiError {
    /// Create a new ApiError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use vermeer_error::ApiError;
    ///
    /// let err = ApiError::new("HTTP 500: internal server error");
    /// assert!(err.message.contains("HTTP 500"));
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
