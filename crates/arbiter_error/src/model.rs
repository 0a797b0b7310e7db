//! Model-adapter error types and rate-limit discrimination.

use crate::RateLimitSignal;

/// Model-adapter error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ModelErrorKind {
    /// API key not found in environment
    #[display(
        "MISTRAL_API_KEY environment variable not set; export a key from your provider console"
    )]
    MissingApiKey,
    /// Prompt contained a part the provider cannot accept
    #[display("Unsupported content type: {}", _0)]
    UnsupportedContent(String),
    /// The provider rejected the request for exceeding allowed throughput
    #[display("Provider rate limit exceeded (HTTP 429)")]
    RateLimited,
    /// Provider returned a non-success status other than 429
    #[display("Provider API error: HTTP {} {}", status_code, message)]
    Api {
        /// HTTP status code
        status_code: u16,
        /// Response body or error description
        message: String,
    },
    /// Transport-level failure before a status was received
    #[display("HTTP request failed: {}", _0)]
    Http(String),
    /// Response body could not be decoded
    #[display("Failed to parse provider response: {}", _0)]
    Parse(String),
}

/// Model error with source location tracking.
///
/// # Examples
///
/// ```
/// use arbiter_error::{ModelError, ModelErrorKind};
///
/// let err = ModelError::new(ModelErrorKind::MissingApiKey);
/// assert!(format!("{}", err).contains("MISTRAL_API_KEY"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Model Error: {} at line {} in {}", kind, line, file)]
pub struct ModelError {
    /// The kind of error that occurred
    pub kind: ModelErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ModelError {
    /// Create a new ModelError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ModelErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl RateLimitSignal for ModelError {
    fn is_rate_limited(&self) -> bool {
        matches!(self.kind, ModelErrorKind::RateLimited)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_limited_kind_signals_retry() {
        assert!(ModelError::new(ModelErrorKind::RateLimited).is_rate_limited());
    }

    #[test]
    fn other_kinds_do_not_signal_retry() {
        let api = ModelError::new(ModelErrorKind::Api {
            status_code: 500,
            message: "internal error".to_string(),
        });
        assert!(!api.is_rate_limited());
        assert!(!ModelError::new(ModelErrorKind::MissingApiKey).is_rate_limited());
        assert!(
            !ModelError::new(ModelErrorKind::UnsupportedContent("image".to_string()))
                .is_rate_limited()
        );
    }
}
