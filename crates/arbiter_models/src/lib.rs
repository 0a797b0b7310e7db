//! LLM provider adapters for the Arbiter evaluation library.
//!
//! Each provider module bridges the evaluation framework's prompt
//! abstraction to one vendor's chat-completion API, wrapping the network
//! call with the adaptive rate limiter from `arbiter_rate_limit`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod mistral;

pub use mistral::{
    ChatApi, ChatChoice, ChatCompletionRequest, ChatCompletionResponse, ChatUsage,
    DEFAULT_MISTRAL_MODEL, MistralClient, MistralConfig, MistralConfigBuilder, MistralMessage,
    MistralModel, MistralResponseFormat, MistralRole,
};
