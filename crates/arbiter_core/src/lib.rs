//! Core data types for the Arbiter LLM evaluation library.
//!
//! This crate provides the foundation data types used across all Arbiter
//! interfaces: the prompt abstraction consumed by model adapters and the
//! vendor-neutral per-call parameter overrides.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod overrides;
mod part;
mod prompt;
mod telemetry;

pub use overrides::{InvocationOverrides, InvocationOverridesBuilder, ResponseFormat};
pub use part::{ContentType, PromptPart};
pub use prompt::Prompt;
pub use telemetry::init_telemetry;
