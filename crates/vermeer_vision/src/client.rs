//! HTTP client for the vision chat completions endpoint.

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, instrument};
use vermeer_core::{ChatMessage, ChatRequest, ChatResponse, VisionConfig};
use vermeer_error::{ApiError, VermeerError, VermeerResult};

/// Client for the configured chat completions endpoint.
///
/// Every network, HTTP, or payload anomaly surfaces as a typed [`ApiError`];
/// transient failures are retried by the caller, not here.
#[derive(Debug, Clone)]
pub struct ChatClient {
    http: reqwest::Client,
    config: Arc<VisionConfig>,
}

impl ChatClient {
    /// Creates a new client over the given configuration.
    pub fn new(config: Arc<VisionConfig>) -> Self {
        debug!(model = %config.model(), url = %config.url(), "Creating vision chat client");
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// The configuration this client sends with.
    pub fn config(&self) -> &VisionConfig {
        &self.config
    }

    /// The underlying HTTP client, shared with image downloads.
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Send a multimodal conversation and return the assistant's reply text.
    ///
    /// # Errors
    ///
    /// [`ApiError`] on timeout, transport failure, non-2xx status, or a
    /// response with missing/empty content.
    #[instrument(skip(self, messages), fields(model = %self.config.model(), message_count = messages.len()))]
    pub async fn send(&self, messages: Vec<ChatMessage>) -> VermeerResult<String> {
        let request = ChatRequest {
            model: self.config.model().clone(),
            messages,
            temperature: *self.config.temperature(),
            top_p: *self.config.top_p(),
            max_tokens: *self.config.max_tokens(),
            stream: false,
        };

        info!("Requesting chat completions for vision analysis");

        let response = self
            .http
            .post(self.config.url())
            .bearer_auth(self.config.api_key())
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .timeout(Duration::from_millis(*self.config.timeout_ms()))
            .json(&request)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Vision API returned error status");
            return Err(ApiError::new(format!("HTTP {}: {}", status.as_u16(), body)))?;
        }

        let parsed: ChatResponse = response.json().await.map_err(|e| {
            error!(error = %e, "Failed to parse vision API response");
            ApiError::new(format!("Failed to parse API response: {}", e))
        })?;

        // A 2xx with an empty payload is still an error, not an empty answer.
        match parsed.first_content() {
            Some(content) => {
                info!("Chat completions request successful");
                Ok(content.to_string())
            }
            None => Err(ApiError::new("Invalid API response: missing content"))?,
        }
    }

    fn transport_error(&self, err: reqwest::Error) -> VermeerError {
        if err.is_timeout() {
            error!(timeout_ms = self.config.timeout_ms(), "Vision API request timed out");
            ApiError::new(format!(
                "Request timeout after {}ms when calling {}",
                self.config.timeout_ms(),
                self.config.url()
            ))
            .into()
        } else if err.is_connect() {
            error!(error = %err, "Failed to connect to vision API");
            ApiError::new(format!(
                "Network error: Failed to connect to {}. Original error: {}",
                self.config.url(),
                err
            ))
            .into()
        } else {
            error!(error = %err, "Vision API request failed");
            ApiError::new(format!("Network error: {}", err)).into()
        }
    }
}
