//! Trait definitions for evaluation model adapters.

use arbiter_core::{InvocationOverrides, Prompt};
use arbiter_error::ArbiterResult;
use async_trait::async_trait;

/// Core trait that all evaluation model adapters implement.
///
/// This is the concurrent execution model: the adapter may suspend while
/// pacing or awaiting the provider, so many logical calls interleave on one
/// executor. Implementations share rate-limit state per adapter instance.
#[async_trait]
pub trait EvalModel: Send + Sync {
    /// Generate the textual completion for a prompt.
    ///
    /// `overrides` are merged on top of the adapter's configured invocation
    /// parameters for this call only; fields left unset fall back to the
    /// configured values.
    async fn generate(
        &self,
        prompt: &Prompt,
        overrides: &InvocationOverrides,
    ) -> ArbiterResult<String>;

    /// Provider name (e.g., "mistral").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "mistral-large-latest").
    fn model_name(&self) -> &str;
}

/// Blocking counterpart to [`EvalModel`].
///
/// One call occupies the calling thread for its wait plus work duration.
/// Not for use inside an async runtime.
pub trait BlockingEvalModel: Send + Sync {
    /// Generate the textual completion for a prompt, blocking the caller.
    fn generate_blocking(
        &self,
        prompt: &Prompt,
        overrides: &InvocationOverrides,
    ) -> ArbiterResult<String>;
}
