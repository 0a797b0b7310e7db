//! Trait for errors that can signal a provider rate limit.

/// Trait for errors that may represent a rate-limit rejection.
///
/// The adaptive rate limiter retries work whose error reports
/// `is_rate_limited() == true` and propagates every other error untouched.
/// Discrimination happens on the error kind, never on error identity.
///
/// # Examples
///
/// ```
/// use arbiter_error::{ModelError, ModelErrorKind, RateLimitSignal};
///
/// let err = ModelError::new(ModelErrorKind::RateLimited);
/// assert!(err.is_rate_limited());
///
/// let err = ModelError::new(ModelErrorKind::Http("connection reset".to_string()));
/// assert!(!err.is_rate_limited());
/// ```
pub trait RateLimitSignal {
    /// Returns true if the provider rejected the request for exceeding
    /// allowed throughput (HTTP 429 or equivalent).
    fn is_rate_limited(&self) -> bool;
}
