//! Per-call parameter overrides passed alongside a prompt.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Desired response format for providers that support constrained output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseFormat {
    /// Free-form text output
    Text,
    /// Provider-enforced JSON object output
    JsonObject,
}

/// Vendor-neutral per-call overrides for a generate call.
///
/// The evaluation driver merges these on top of the adapter's configured
/// invocation parameters. Fields left `None` are omitted entirely from the
/// request sent to the provider, never serialized as null placeholders.
///
/// The `instruction` field is injected by evaluation templates for providers
/// that accept a separate instruction channel; adapters whose vendor API has
/// no such parameter strip it before building the request.
///
/// # Examples
///
/// ```
/// use arbiter_core::InvocationOverrides;
///
/// let overrides = InvocationOverrides::builder()
///     .temperature(Some(0.7))
///     .build()
///     .unwrap();
/// assert_eq!(overrides.temperature(), &Some(0.7));
/// assert_eq!(overrides.top_p(), &None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters, Default)]
#[builder(setter(into), default)]
pub struct InvocationOverrides {
    /// Framework-only instruction text, stripped by adapters that cannot use it
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    instruction: Option<String>,
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
    /// Desired response format
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
    /// Provider safe-mode flag
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    safe_mode: Option<bool>,
    /// Provider safe-prompt flag
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    safe_prompt: Option<bool>,
}

impl InvocationOverrides {
    /// Creates a new builder for `InvocationOverrides`.
    pub fn builder() -> InvocationOverridesBuilder {
        InvocationOverridesBuilder::default()
    }
}
