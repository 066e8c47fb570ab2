//! Top-level error wrapper types.

use crate::{ApiError, FileNotFoundError, ToolExecutionError, ValidationError};

/// The closed error taxonomy for Vermeer.
///
/// Every failure a tool call can produce is one of these four kinds. Call
/// sites that translate errors into user-visible messages match exhaustively
/// over this enum rather than probing message text.
///
/// # Examples
///
/// ```
/// use vermeer_error::{ApiError, VermeerError, VermeerErrorKind};
///
/// let err: VermeerError = ApiError::new("Connection failed").into();
/// assert!(matches!(err.kind(), VermeerErrorKind::Api(_)));
/// ```
#[derive(Debug, Clone, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum VermeerErrorKind {
    /// Missing local resource, fatal for that call
    #[from(FileNotFoundError)]
    FileNotFound(FileNotFoundError),
    /// Bad input shape, size, or format; user-correctable
    #[from(ValidationError)]
    Validation(ValidationError),
    /// Network, HTTP, or protocol anomaly with the model provider
    #[from(ApiError)]
    Api(ApiError),
    /// Orchestration failure carrying tool name and original cause
    #[from(ToolExecutionError)]
    ToolExecution(ToolExecutionError),
}

impl VermeerErrorKind {
    /// Stable taxonomy name, used when embedding a cause in a response
    /// envelope.
    pub fn name(&self) -> &'static str {
        match self {
            Self::FileNotFound(_) => "FileNotFoundError",
            Self::Validation(_) => "ValidationError",
            Self::Api(_) => "ApiError",
            Self::ToolExecution(_) => "ToolExecutionError",
        }
    }

    /// The bare failure message, without the location suffix `Display` adds.
    pub fn message(&self) -> &str {
        match self {
            Self::FileNotFound(e) => &e.message,
            Self::Validation(e) => &e.message,
            Self::Api(e) => &e.message,
            Self::ToolExecution(e) => &e.message,
        }
    }
}

/// Vermeer error with kind discrimination.
///
/// # Examples
///
/// ```
/// use vermeer_error::{ValidationError, VermeerResult};
///
/// fn check_extension(path: &str) -> VermeerResult<()> {
///     if !path.ends_with(".png") {
///         Err(ValidationError::new("Unsupported image format"))?;
///     }
///     Ok(())
/// }
///
/// assert!(check_extension("photo.gif").is_err());
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Vermeer Error: {}", _0)]
pub struct VermeerError(Box<VermeerErrorKind>);

impl VermeerError {
    /// Create a new error from a kind.
    pub fn new(kind: VermeerErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &VermeerErrorKind {
        &self.0
    }

    /// Consume the wrapper, yielding the kind.
    pub fn into_kind(self) -> VermeerErrorKind {
        *self.0
    }
}

// Generic From implementation for any type that converts to VermeerErrorKind
impl<T> From<T> for VermeerError
where
    T: Into<VermeerErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Vermeer operations.
///
/// # Examples
///
/// ```
/// use vermeer_error::{ApiError, VermeerResult};
///
/// fn fetch_data() -> VermeerResult<String> {
///     Err(ApiError::new("404 Not Found"))?
/// }
/// ```
pub type VermeerResult<T> = std::result::Result<T, VermeerError>;
