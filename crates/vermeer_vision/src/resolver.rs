//! Image source resolution and validation.
//!
//! A source string is either an `http(s)://` URL or a local path. Remote
//! sources get a cheap syntactic check here and pass through as URLs;
//! byte-level validation (content type, size) is deferred to download time.
//! Local files are validated (existence, size, extension) and encoded to
//! base64 inline content.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use std::path::Path;
use tokio::fs;
use tracing::{debug, instrument};
use vermeer_core::ImageContent;
use vermeer_error::{FileNotFoundError, ValidationError, VermeerResult};

/// Extensions accepted for local image files.
const SUPPORTED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Fixed ceiling for downloaded content, independent of the per-call local
/// file limit.
pub const DOWNLOAD_LIMIT_MB: f64 = 20.0;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Whether a source string is a remote `http(s)` URL.
///
/// Anything that fails URL parsing or uses another scheme is treated as a
/// local path by [`resolve_image`].
///
/// # Examples
///
/// ```
/// use vermeer_vision::is_url;
///
/// assert!(is_url("https://example.com/shot.png"));
/// assert!(is_url("http://localhost:8080/a.jpg"));
/// assert!(!is_url("screenshots/shot.png"));
/// assert!(!is_url("ftp://example.com/shot.png"));
/// assert!(!is_url("file:///tmp/shot.png"));
/// ```
pub fn is_url(source: &str) -> bool {
    match reqwest::Url::parse(source) {
        Ok(url) => matches!(url.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

/// MIME type for an image file extension, falling back to `image/png` for
/// anything unknown.
pub fn mime_type_for(extension: &str) -> &'static str {
    match extension {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "webp" => "image/webp",
        "gif" => "image/gif",
        _ => "image/png",
    }
}

/// Resolve an image reference into ready-to-send content.
///
/// Remote URLs pass through as [`ImageContent::Url`] after scheme
/// validation. Local paths must exist, fit under `max_size_mb`, and carry a
/// supported extension; their bytes are read and base64-encoded.
///
/// # Errors
///
/// - [`FileNotFoundError`] when a local path does not exist
/// - [`ValidationError`] for oversized files or unsupported extensions
#[instrument]
pub async fn resolve_image(source: &str, max_size_mb: u64) -> VermeerResult<ImageContent> {
    if is_url(source) {
        return Ok(ImageContent::url(source));
    }

    let path = Path::new(source);
    let metadata = fs::metadata(path)
        .await
        .map_err(|_| FileNotFoundError::new(format!("Image file not found: {}", source)))?;

    let max_size_bytes = max_size_mb * 1024 * 1024;
    if metadata.len() > max_size_bytes {
        return Err(ValidationError::new(format!(
            "Image file too large: {:.2}MB. Maximum allowed: {}MB",
            metadata.len() as f64 / BYTES_PER_MB,
            max_size_mb
        )))?;
    }

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
        .unwrap_or_default();
    if !SUPPORTED_EXTENSIONS.contains(&extension.as_str()) {
        return Err(ValidationError::new(format!(
            "Unsupported image format: .{}. Supported formats: .jpg, .jpeg, .png",
            extension
        )))?;
    }

    let bytes = fs::read(path).await.map_err(|e| {
        ValidationError::new(format!("Failed to read image file {}: {}", source, e))
    })?;
    let mime_type = mime_type_for(&extension);
    debug!(source, mime_type, size = bytes.len(), "Encoded local image to base64");

    Ok(ImageContent::inline(mime_type, BASE64.encode(&bytes)))
}

/// Download a remote image and encode it to inline base64 content.
///
/// Validates HTTP status, the `content-type` header, the declared
/// `content-length`, and the actually-downloaded byte count (headers can be
/// missing or wrong) against the fixed [`DOWNLOAD_LIMIT_MB`] ceiling.
///
/// # Errors
///
/// [`ValidationError`] for every download anomaly.
#[instrument(skip(client))]
pub async fn download_image(client: &reqwest::Client, url: &str) -> VermeerResult<ImageContent> {
    debug!(url, "Downloading image from URL");

    let response = client.get(url).send().await.map_err(|e| {
        ValidationError::new(format!(
            "Failed to download image from URL: {}. Error: {}",
            url, e
        ))
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(ValidationError::new(format!(
            "Failed to download image: HTTP {} {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("")
        )))?;
    }

    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("none")
        .to_string();
    if !content_type.starts_with("image/") {
        return Err(ValidationError::new(format!(
            "Invalid content type: {}. Expected image/*",
            content_type
        )))?;
    }

    if let Some(declared) = response.content_length() {
        let declared_mb = declared as f64 / BYTES_PER_MB;
        if declared_mb > DOWNLOAD_LIMIT_MB {
            return Err(ValidationError::new(format!(
                "Downloaded image too large: {:.2}MB. Maximum allowed: {}MB",
                declared_mb, DOWNLOAD_LIMIT_MB
            )))?;
        }
    }

    let bytes = response.bytes().await.map_err(|e| {
        ValidationError::new(format!(
            "Failed to download image from URL: {}. Error: {}",
            url, e
        ))
    })?;

    // The declared length can be absent or wrong; check the real byte count.
    let actual_mb = bytes.len() as f64 / BYTES_PER_MB;
    if actual_mb > DOWNLOAD_LIMIT_MB {
        return Err(ValidationError::new(format!(
            "Downloaded image too large: {:.2}MB. Maximum allowed: {}MB",
            actual_mb, DOWNLOAD_LIMIT_MB
        )))?;
    }

    debug!(url, content_type, size_mb = actual_mb, "Downloaded and encoded image");
    Ok(ImageContent::inline(content_type, BASE64.encode(&bytes)))
}
