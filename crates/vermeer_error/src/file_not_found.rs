//! Missing local resource error types.

/// Error for a local image path that does not exist.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("File Not Found: {} at line {} in {}", message, line, file)]
pub struct FileNotFoundError {
    /// The underlying error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl FileNotFoundError {
    /// Create a new FileNotFoundError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use vermeer_error::FileNotFoundError;
    ///
    /// let err = FileNotFoundError::new("Image file not found: logo.png");
    /// assert!(err.message.contains("logo.png"));
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
