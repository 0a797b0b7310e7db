//! Adaptive rate limiting for LLM API calls.
//!
//! This crate throttles outgoing requests to comply with provider quotas that
//! are not known in advance. Instead of configuring static limits, the
//! limiter holds an adaptive requests-per-second estimate that shrinks on
//! provider rate-limit rejections and slowly recovers on sustained success.
//!
//! The limiter wraps a unit of work (typically one completion call) and
//! retries it a bounded number of times when the work reports a rate-limit
//! condition through the [`RateLimitSignal`] trait from `arbiter_error`:
//!
//! ```ignore
//! use arbiter_rate_limit::{AdaptiveRateLimiter, RateLimitConfig};
//!
//! let limiter = AdaptiveRateLimiter::new(RateLimitConfig::default());
//! let response = limiter.run(|| async { client.chat(&request).await }).await?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod estimator;
mod limiter;

pub use arbiter_error::RateLimitSignal;
pub use config::{RateLimitConfig, RateLimitConfigBuilder};
pub use estimator::RateEstimator;
pub use limiter::AdaptiveRateLimiter;
