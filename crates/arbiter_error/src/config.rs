//! Configuration error type.

/// Error raised when builder or configuration input is invalid.
///
/// # Examples
///
/// ```
/// use arbiter_error::ConfigError;
///
/// let err = ConfigError::new("initial rate must be positive");
/// assert!(format!("{}", err).contains("initial rate"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", message, line, file)]
pub struct ConfigError {
    /// Description of the invalid configuration
    pub message: String,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError with automatic location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}

// Lets builders report missing fields and failed validation as ConfigError.
impl From<derive_builder::UninitializedFieldError> for ConfigError {
    #[track_caller]
    fn from(err: derive_builder::UninitializedFieldError) -> Self {
        Self::new(err.to_string())
    }
}
