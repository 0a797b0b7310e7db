//! Mistral AI adapter.
//!
//! Wraps the Mistral chat-completion API for use as an evaluation model.
//! Calls are dynamically throttled: the adapter shares one adaptive rate
//! limiter across its sync and async paths, so rate-limit rejections on
//! either path shrink the permitted rate for both.

mod client;
mod dto;
mod model;

pub use client::{ChatApi, MistralClient};
pub use dto::{
    ChatChoice, ChatCompletionRequest, ChatCompletionResponse, ChatUsage, MistralMessage,
    MistralResponseFormat, MistralRole,
};
pub use model::{DEFAULT_MISTRAL_MODEL, MistralConfig, MistralConfigBuilder, MistralModel};
