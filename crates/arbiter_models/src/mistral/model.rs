//! The Mistral evaluation model adapter.

use super::{
    ChatApi, ChatCompletionRequest, ChatCompletionResponse, MistralClient, MistralMessage,
    MistralResponseFormat,
};
use arbiter_core::{ContentType, InvocationOverrides, Prompt, ResponseFormat};
use arbiter_error::{ArbiterResult, ModelError, ModelErrorKind};
use arbiter_interface::{BlockingEvalModel, EvalModel};
use arbiter_rate_limit::{AdaptiveRateLimiter, RateLimitConfig};
use async_trait::async_trait;
use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Use the latest large Mistral model by default.
pub const DEFAULT_MISTRAL_MODEL: &str = "mistral-large-latest";

/// Construction-time configuration for [`MistralModel`].
///
/// Everything is optional except the model name, which defaults to the
/// provider's large variant. Parameters left `None` are never sent to the
/// API.
///
/// # Examples
///
/// ```
/// use arbiter_models::MistralConfig;
///
/// let config = MistralConfig::builder()
///     .temperature(0.2)
///     .top_p(Some(0.9))
///     .build()
///     .unwrap();
/// assert_eq!(config.model(), "mistral-large-latest");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into), default)]
pub struct MistralConfig {
    /// Model identifier
    model: String,
    /// Sampling temperature
    temperature: f64,
    /// Nucleus sampling probability mass
    top_p: Option<f64>,
    /// Random seed for sampling
    random_seed: Option<u64>,
    /// Response format constraint
    response_format: Option<ResponseFormat>,
    /// Safe-mode flag
    safe_mode: bool,
    /// Safe-prompt flag
    safe_prompt: bool,
    /// Seed for the adaptive requests-per-second limit
    initial_rate_limit: f64,
}

impl MistralConfig {
    /// Creates a new builder for `MistralConfig`.
    pub fn builder() -> MistralConfigBuilder {
        MistralConfigBuilder::default()
    }
}

impl Default for MistralConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MISTRAL_MODEL.to_string(),
            temperature: 0.0,
            top_p: None,
            random_seed: None,
            response_format: None,
            safe_mode: false,
            safe_prompt: false,
            initial_rate_limit: 5.0,
        }
    }
}

/// An evaluation model backed by the Mistral chat-completion API.
///
/// Calls are dynamically throttled when encountering rate-limit errors: a
/// shared [`AdaptiveRateLimiter`] paces both the async and blocking paths
/// and retries rate-limited calls up to its configured budget.
///
/// The adapter is generic over [`ChatApi`] so the vendor client can be
/// stubbed in tests; production code uses [`MistralClient`].
///
/// # Examples
///
/// ```no_run
/// use arbiter_core::{InvocationOverrides, Prompt};
/// use arbiter_interface::EvalModel;
/// use arbiter_models::MistralModel;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// // Set the MISTRAL_API_KEY environment variable first.
/// let model = MistralModel::new()?;
/// let prompt = Prompt::from_string("Is the sky blue? A) yes B) no");
/// let answer = model.generate(&prompt, &InvocationOverrides::default()).await?;
/// println!("{answer}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct MistralModel<C = MistralClient> {
    config: MistralConfig,
    client: C,
    limiter: AdaptiveRateLimiter,
}

impl MistralModel<MistralClient> {
    /// Create an adapter with default configuration.
    ///
    /// Reads the API key from the `MISTRAL_API_KEY` environment variable.
    ///
    /// # Errors
    ///
    /// Fails with `MissingApiKey` when the environment variable is unset.
    pub fn new() -> ArbiterResult<Self> {
        Self::from_config(MistralConfig::default())
    }

    /// Create an adapter from configuration.
    ///
    /// # Errors
    ///
    /// Fails with `MissingApiKey` when the environment variable is unset.
    #[instrument(name = "mistral_model_from_config", skip(config), fields(model = %config.model()))]
    pub fn from_config(config: MistralConfig) -> ArbiterResult<Self> {
        let client = MistralClient::from_env()?;
        Ok(Self::with_client(config, client))
    }
}

impl<C: ChatApi> MistralModel<C> {
    /// Create an adapter around an explicit client implementation.
    pub fn with_client(config: MistralConfig, client: C) -> Self {
        let rate = *config.initial_rate_limit();
        let limiter = AdaptiveRateLimiter::new(RateLimitConfig::with_initial_rate(rate));
        Self {
            config,
            client,
            limiter,
        }
    }

    /// The adapter's rate limiter, shared between the sync and async paths.
    pub fn limiter(&self) -> &AdaptiveRateLimiter {
        &self.limiter
    }

    /// Format prompt parts as user messages, rejecting non-text content.
    fn format_prompt(prompt: &Prompt) -> Result<Vec<MistralMessage>, ModelError> {
        prompt
            .parts()
            .iter()
            .map(|part| match part.content_type {
                ContentType::Text => Ok(MistralMessage::user(part.content.clone())),
                other => Err(ModelError::new(ModelErrorKind::UnsupportedContent(
                    other.to_string(),
                ))),
            })
            .collect()
    }

    /// Build the wire request from configured parameters and per-call
    /// overrides.
    ///
    /// Overrides win over configured values. The framework-only
    /// `instruction` override has no Mistral equivalent and is dropped here.
    fn request_for(
        &self,
        prompt: &Prompt,
        overrides: &InvocationOverrides,
    ) -> Result<ChatCompletionRequest, ModelError> {
        let messages = Self::format_prompt(prompt)?;

        if overrides.instruction().is_some() {
            debug!("Dropping instruction override, not accepted by the Mistral API");
        }

        let temperature = overrides.temperature().unwrap_or(*self.config.temperature());
        let response_format = overrides
            .response_format()
            .or(*self.config.response_format())
            .map(MistralResponseFormat::from);

        ChatCompletionRequest::builder()
            .model(self.config.model().clone())
            .messages(messages)
            .temperature(Some(temperature))
            .top_p(overrides.top_p().or(*self.config.top_p()))
            .random_seed(overrides.random_seed().or(*self.config.random_seed()))
            .safe_mode(overrides.safe_mode().unwrap_or(*self.config.safe_mode()))
            .safe_prompt(overrides.safe_prompt().unwrap_or(*self.config.safe_prompt()))
            .response_format(response_format)
            .build()
            .map_err(|e| ModelError::new(ModelErrorKind::Parse(format!("invalid request: {e}"))))
    }

    /// Text content of the first completion choice, string-coerced.
    fn extract_text(response: &ChatCompletionResponse) -> Result<String, ModelError> {
        response
            .first_content()
            .map(str::to_string)
            .ok_or_else(|| {
                ModelError::new(ModelErrorKind::Parse(
                    "response contained no choices".to_string(),
                ))
            })
    }

    async fn generate_internal(
        &self,
        prompt: &Prompt,
        overrides: &InvocationOverrides,
    ) -> Result<String, ModelError> {
        let request = self.request_for(prompt, overrides)?;
        let response = self
            .limiter
            .run(|| async { self.client.chat(&request).await })
            .await?;
        Self::extract_text(&response)
    }

    fn generate_blocking_internal(
        &self,
        prompt: &Prompt,
        overrides: &InvocationOverrides,
    ) -> Result<String, ModelError> {
        let request = self.request_for(prompt, overrides)?;
        let response = self
            .limiter
            .run_blocking(|| self.client.chat_blocking(&request))?;
        Self::extract_text(&response)
    }
}

#[async_trait]
impl<C: ChatApi> EvalModel for MistralModel<C> {
    async fn generate(
        &self,
        prompt: &Prompt,
        overrides: &InvocationOverrides,
    ) -> ArbiterResult<String> {
        self.generate_internal(prompt, overrides)
            .await
            .map_err(Into::into)
    }

    fn provider_name(&self) -> &'static str {
        "mistral"
    }

    fn model_name(&self) -> &str {
        self.config.model()
    }
}

impl<C: ChatApi> BlockingEvalModel for MistralModel<C> {
    fn generate_blocking(
        &self,
        prompt: &Prompt,
        overrides: &InvocationOverrides,
    ) -> ArbiterResult<String> {
        self.generate_blocking_internal(prompt, overrides)
            .map_err(Into::into)
    }
}
