//! Mistral chat-completion wire types.

use arbiter_core::ResponseFormat;
use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Mistral message role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MistralRole {
    /// System message
    System,
    /// User message
    User,
    /// Assistant message
    Assistant,
}

/// Mistral message in a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct MistralMessage {
    /// Message role
    role: MistralRole,
    /// Message content
    content: String,
}

impl MistralMessage {
    /// Creates a new builder for `MistralMessage`.
    pub fn builder() -> MistralMessageBuilder {
        MistralMessageBuilder::default()
    }

    /// Convenience constructor for a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MistralRole::User,
            content: content.into(),
        }
    }
}

/// Response-format constraint on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MistralResponseFormat {
    /// Format discriminator ("text" or "json_object")
    #[serde(rename = "type")]
    kind: String,
}

impl From<ResponseFormat> for MistralResponseFormat {
    fn from(format: ResponseFormat) -> Self {
        let kind = match format {
            ResponseFormat::Text => "text",
            ResponseFormat::JsonObject => "json_object",
        };
        Self {
            kind: kind.to_string(),
        }
    }
}

/// Mistral chat-completion request parameters.
///
/// Optional sampling parameters left unset are omitted from the serialized
/// body entirely; the API rejects null placeholders. The safety flags are
/// always sent, matching the provider's documented defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct ChatCompletionRequest {
    /// Model identifier
    model: String,
    /// Conversation messages
    messages: Vec<MistralMessage>,
    /// Sampling temperature
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f64>,
    /// Nucleus sampling probability mass
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f64>,
    /// Random seed for sampling
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    random_seed: Option<u64>,
    /// Safe-mode flag
    #[builder(default = "false")]
    safe_mode: bool,
    /// Safe-prompt flag
    #[builder(default = "false")]
    safe_prompt: bool,
    /// Response format constraint
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<MistralResponseFormat>,
}

impl ChatCompletionRequest {
    /// Creates a new builder for `ChatCompletionRequest`.
    pub fn builder() -> ChatCompletionRequestBuilder {
        ChatCompletionRequestBuilder::default()
    }
}

/// Token usage statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct ChatUsage {
    /// Input tokens consumed
    #[serde(default)]
    prompt_tokens: u32,
    /// Output tokens generated
    #[serde(default)]
    completion_tokens: u32,
    /// Total tokens billed
    #[serde(default)]
    total_tokens: u32,
}

/// One completion choice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct ChatChoice {
    /// Position of this choice in the response
    #[builder(default)]
    #[serde(default)]
    index: u32,
    /// The generated message
    message: MistralMessage,
    /// Why generation stopped, if reported
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    finish_reason: Option<String>,
}

impl ChatChoice {
    /// Creates a new builder for `ChatChoice`.
    pub fn builder() -> ChatChoiceBuilder {
        ChatChoiceBuilder::default()
    }
}

/// Mistral chat-completion response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct ChatCompletionResponse {
    /// Response identifier
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    /// Model that produced the response
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    model: Option<String>,
    /// Completion choices
    choices: Vec<ChatChoice>,
    /// Token usage, if reported
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    usage: Option<ChatUsage>,
}

impl ChatCompletionResponse {
    /// Creates a new builder for `ChatCompletionResponse`.
    pub fn builder() -> ChatCompletionResponseBuilder {
        ChatCompletionResponseBuilder::default()
    }

    /// Text content of the first choice, if any.
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()
            .map(|choice| choice.message().content().as_str())
    }
}
