//! HTTP client for the Mistral chat-completion API.

use super::{ChatCompletionRequest, ChatCompletionResponse};
use arbiter_error::{ModelError, ModelErrorKind};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::env;
use tracing::{debug, error, instrument, warn};

const MISTRAL_API_URL: &str = "https://api.mistral.ai/v1/chat/completions";

/// Chat-completion operations a provider client must expose.
///
/// The adapter in this crate is generic over this trait so tests can stand
/// in a scripted stub for the real HTTP client. Both operations carry the
/// same request and response shapes; only the execution model differs.
#[async_trait]
pub trait ChatApi: Send + Sync {
    /// Send one chat-completion request, suspending while in flight.
    async fn chat(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, ModelError>;

    /// Send one chat-completion request, blocking the calling thread.
    fn chat_blocking(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, ModelError>;
}

/// Mistral API client.
///
/// HTTP 429 responses are normalized to [`ModelErrorKind::RateLimited`] so
/// the rate limiter can discriminate them; every other non-success status
/// propagates as [`ModelErrorKind::Api`] with the response body attached.
#[derive(Debug, Clone)]
pub struct MistralClient {
    client: reqwest::Client,
    api_key: String,
    endpoint: String,
}

impl MistralClient {
    /// Creates a new Mistral client with an explicit API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        debug!("Creating new Mistral client");
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            endpoint: MISTRAL_API_URL.to_string(),
        }
    }

    /// Creates a client from the `MISTRAL_API_KEY` environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`ModelErrorKind::MissingApiKey`] when the variable is unset;
    /// construction is the only place this surfaces, so a misconfigured
    /// environment fails fast rather than at the first evaluation call.
    pub fn from_env() -> Result<Self, ModelError> {
        let api_key = env::var("MISTRAL_API_KEY")
            .map_err(|_| ModelError::new(ModelErrorKind::MissingApiKey))?;
        Ok(Self::new(api_key))
    }

    /// Override the endpoint URL (for self-hosted or proxy deployments).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    fn classify_status(status: StatusCode, body: String) -> ModelError {
        if status == StatusCode::TOO_MANY_REQUESTS {
            warn!("Mistral API reported rate limit (HTTP 429)");
            ModelError::new(ModelErrorKind::RateLimited)
        } else {
            error!(status = %status, body = %body, "Mistral API returned error");
            ModelError::new(ModelErrorKind::Api {
                status_code: status.as_u16(),
                message: body,
            })
        }
    }
}

#[async_trait]
impl ChatApi for MistralClient {
    #[instrument(skip(self, request), fields(model = %request.model()))]
    async fn chat(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, ModelError> {
        debug!("Sending chat completion request to Mistral API");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send request to Mistral API");
                ModelError::new(ModelErrorKind::Http(format!("request failed: {e}")))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::classify_status(status, body));
        }

        response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse Mistral response");
            ModelError::new(ModelErrorKind::Parse(format!("failed to parse response: {e}")))
        })
    }

    #[instrument(skip(self, request), fields(model = %request.model()))]
    fn chat_blocking(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, ModelError> {
        debug!("Sending blocking chat completion request to Mistral API");

        // The blocking client cannot be constructed inside an async runtime,
        // so it is built per call rather than stored on the struct.
        let client = reqwest::blocking::Client::builder().build().map_err(|e| {
            ModelError::new(ModelErrorKind::Http(format!("client setup failed: {e}")))
        })?;

        let response = client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .map_err(|e| {
                error!(error = ?e, "Failed to send request to Mistral API");
                ModelError::new(ModelErrorKind::Http(format!("request failed: {e}")))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(Self::classify_status(status, body));
        }

        response.json().map_err(|e| {
            error!(error = ?e, "Failed to parse Mistral response");
            ModelError::new(ModelErrorKind::Parse(format!("failed to parse response: {e}")))
        })
    }
}
