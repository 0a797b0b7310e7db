//! Arbiter - LLM evaluation model adapters.
//!
//! Arbiter wraps vendor chat-completion APIs behind a uniform evaluation
//! interface, pacing outgoing calls with an adaptive rate limiter that learns
//! provider quotas from rate-limit rejections instead of static configuration.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use arbiter::{EvalModel, InvocationOverrides, MistralModel, Prompt};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Reads MISTRAL_API_KEY from the environment.
//!     let model = MistralModel::new()?;
//!
//!     let prompt = Prompt::from_string("Is the sky blue? A) yes B) no");
//!     let answer = model.generate(&prompt, &InvocationOverrides::default()).await?;
//!     println!("{answer}");
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Arbiter is organized as a workspace with focused crates:
//!
//! - `arbiter_core` - Prompt and override data types
//! - `arbiter_interface` - EvalModel trait definitions
//! - `arbiter_error` - Error types and the rate-limit signal
//! - `arbiter_rate_limit` - Adaptive rate limiting and retry logic
//! - `arbiter_models` - LLM provider implementations
//!
//! This crate (`arbiter`) re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use arbiter_core::*;
pub use arbiter_error::*;
pub use arbiter_interface::*;
pub use arbiter_models::*;
pub use arbiter_rate_limit::{AdaptiveRateLimiter, RateEstimator, RateLimitConfig};
