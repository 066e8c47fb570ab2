//! Process configuration resolved once at startup.
//!
//! Both a preferred `VISION_MCP_*` and a legacy `OPENAI_*` variable exist for
//! every setting; the preferred prefix wins. The loaded value is immutable
//! and passed explicitly to the components that need it; there is no hidden
//! global lookup.

use derive_getters::Getters;
use vermeer_error::{ApiError, VermeerResult};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o";
const DEFAULT_TEMPERATURE: &str = "0.7";
const DEFAULT_TOP_P: &str = "1.0";
const DEFAULT_MAX_TOKENS: &str = "2048";
const DEFAULT_TIMEOUT_MS: &str = "60000";
const DEFAULT_RETRY_COUNT: &str = "2";

/// Vision API configuration, loaded once and shared read-only.
///
/// # Examples
///
/// ```
/// use vermeer_core::VisionConfig;
///
/// let config = VisionConfig::from_lookup(|key| match key {
///     "VISION_MCP_API_KEY" => Some("sk-test-123".to_string()),
///     _ => None,
/// })
/// .unwrap();
///
/// assert_eq!(config.model(), "gpt-4o");
/// assert_eq!(config.url(), "https://api.openai.com/v1/chat/completions");
/// ```
#[derive(Debug, Clone, Getters)]
pub struct VisionConfig {
    /// Model identifier
    model: String,
    /// Fully-qualified chat completions endpoint
    url: String,
    /// Sampling temperature
    temperature: f32,
    /// Nucleus sampling parameter
    top_p: f32,
    /// Maximum tokens to generate
    max_tokens: u32,
    /// Request timeout in milliseconds
    timeout_ms: u64,
    /// Number of retries after the initial attempt
    retry_count: u32,
    /// Bearer credential forwarded to the provider
    api_key: String,
}

impl VisionConfig {
    /// Load configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Fails when the API key is absent, blank, or a placeholder, or when a
    /// numeric variable does not parse.
    pub fn from_env() -> VermeerResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an explicit variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> VermeerResult<Self> {
        let api_key = pick(&lookup, "VISION_MCP_API_KEY", "OPENAI_API_KEY")
            .unwrap_or_default();

        if api_key.trim().is_empty() {
            return Err(ApiError::new(
                "VISION_MCP_API_KEY or OPENAI_API_KEY environment variable is required",
            ))?;
        }

        let lowered = api_key.to_lowercase();
        if lowered.contains("your_")
            || lowered.contains("api_key")
            || lowered.contains("sk-your-openai-api-key")
        {
            return Err(ApiError::new(
                "API key appears to be a placeholder. Please set your actual API key.",
            ))?;
        }

        let base_url = pick(&lookup, "VISION_MCP_API_URL", "OPENAI_BASE_URL")
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        // A base URL may already point at the completions route.
        let url = if base_url.contains("/chat/completions") {
            base_url
        } else {
            format!("{}/chat/completions", base_url)
        };

        let model = pick(&lookup, "VISION_MCP_MODEL", "OPENAI_VISION_MODEL")
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        Ok(Self {
            model,
            url,
            temperature: parse(
                &lookup,
                "VISION_MCP_TEMPERATURE",
                "OPENAI_MODEL_TEMPERATURE",
                DEFAULT_TEMPERATURE,
            )?,
            top_p: parse(
                &lookup,
                "VISION_MCP_TOP_P",
                "OPENAI_MODEL_TOP_P",
                DEFAULT_TOP_P,
            )?,
            max_tokens: parse(
                &lookup,
                "VISION_MCP_MAX_TOKENS",
                "OPENAI_MODEL_MAX_TOKENS",
                DEFAULT_MAX_TOKENS,
            )?,
            timeout_ms: parse(
                &lookup,
                "VISION_MCP_TIMEOUT",
                "OPENAI_TIMEOUT",
                DEFAULT_TIMEOUT_MS,
            )?,
            retry_count: parse(
                &lookup,
                "VISION_MCP_RETRY_COUNT",
                "OPENAI_RETRY_COUNT",
                DEFAULT_RETRY_COUNT,
            )?,
            api_key,
        })
    }
}

/// Server identity configuration.
#[derive(Debug, Clone, Getters)]
pub struct ServerConfig {
    /// Server name advertised during the MCP handshake
    name: String,
    /// Server version
    version: String,
}

impl ServerConfig {
    /// Load server identity from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load server identity through an explicit variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            name: pick(&lookup, "VISION_MCP_SERVER_NAME", "SERVER_NAME")
                .unwrap_or_else(|| "vermeer-mcp".to_string()),
            version: pick(&lookup, "VISION_MCP_SERVER_VERSION", "SERVER_VERSION")
                .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string()),
        }
    }
}

fn pick(
    lookup: &impl Fn(&str) -> Option<String>,
    preferred: &str,
    legacy: &str,
) -> Option<String> {
    lookup(preferred)
        .filter(|v| !v.is_empty())
        .or_else(|| lookup(legacy).filter(|v| !v.is_empty()))
}

fn parse<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    preferred: &str,
    legacy: &str,
    default: &str,
) -> VermeerResult<T> {
    let raw = pick(lookup, preferred, legacy).unwrap_or_else(|| default.to_string());
    raw.parse().map_err(|_| {
        ApiError::new(format!(
            "Invalid value '{}' for {} (or {})",
            raw, preferred, legacy
        ))
        .into()
    })
}
