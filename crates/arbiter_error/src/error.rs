//! Top-level error wrapper types.

use crate::{ConfigError, ModelError, RateLimitSignal};

/// This is the foundation error enum. Additional variants will be added
/// as other arbiter crates grow new error domains.
///
/// # Examples
///
/// ```
/// use arbiter_error::{ArbiterError, ModelError, ModelErrorKind};
///
/// let model_err = ModelError::new(ModelErrorKind::MissingApiKey);
/// let err: ArbiterError = model_err.into();
/// assert!(format!("{}", err).contains("Model Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum ArbiterErrorKind {
    /// Model adapter error
    #[from(ModelError)]
    Model(ModelError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
}

/// Arbiter error with kind discrimination.
///
/// # Examples
///
/// ```
/// use arbiter_error::{ArbiterResult, ConfigError};
///
/// fn might_fail() -> ArbiterResult<()> {
///     Err(ConfigError::new("missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("success"),
///     Err(e) => println!("error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Arbiter Error: {}", _0)]
pub struct ArbiterError(Box<ArbiterErrorKind>);

impl ArbiterError {
    /// Create a new error from a kind.
    pub fn new(kind: ArbiterErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ArbiterErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to ArbiterErrorKind
impl<T> From<T> for ArbiterError
where
    T: Into<ArbiterErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

impl RateLimitSignal for ArbiterError {
    fn is_rate_limited(&self) -> bool {
        match self.kind() {
            ArbiterErrorKind::Model(e) => e.is_rate_limited(),
            ArbiterErrorKind::Config(_) => false,
        }
    }
}

/// Result type for Arbiter operations.
///
/// # Examples
///
/// ```
/// use arbiter_error::{ArbiterResult, ModelError, ModelErrorKind};
///
/// fn fetch_completion() -> ArbiterResult<String> {
///     Err(ModelError::new(ModelErrorKind::Parse("empty body".to_string())))?
/// }
/// ```
pub type ArbiterResult<T> = std::result::Result<T, ArbiterError>;
