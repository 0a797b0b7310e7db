//! Configuration for the adaptive rate limiter.

use arbiter_error::ConfigError;
use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Tuning knobs for the adaptive rate limiter.
///
/// Every heuristic the limiter applies is an explicit field here rather than
/// a hard-coded constant, so callers can tighten or relax recovery behavior
/// per provider.
///
/// # Examples
///
/// ```
/// use arbiter_rate_limit::RateLimitConfig;
///
/// let config = RateLimitConfig::builder()
///     .initial_per_second_rate(2.0)
///     .max_rate_limit_retries(5u32)
///     .build()
///     .unwrap();
/// assert_eq!(*config.initial_per_second_rate(), 2.0);
/// assert_eq!(*config.max_rate_limit_retries(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters)]
#[builder(
    setter(into),
    default,
    build_fn(validate = "Self::validate", error = "ConfigError")
)]
pub struct RateLimitConfig {
    /// Seed for the permitted requests-per-second estimate.
    ///
    /// Also serves as the ceiling the rate recovers toward after throttling.
    initial_per_second_rate: f64,
    /// Floor below which the estimate never drops, regardless of how many
    /// rate-limit rejections occur.
    minimum_rate: f64,
    /// Multiplier applied to the estimate on each rate-limit rejection.
    backoff_factor: f64,
    /// Multiplier applied to the estimate on each recovery step.
    growth_factor: f64,
    /// Consecutive successes required before one recovery step is taken.
    recovery_threshold: u32,
    /// Rolling window over which a recent rate-limit event blocks recovery.
    enforcement_window: Duration,
    /// Rate-limit rejections tolerated within one logical call before the
    /// rate-limit error surfaces to the caller.
    max_rate_limit_retries: u32,
}

impl RateLimitConfig {
    /// Creates a new builder for `RateLimitConfig`.
    pub fn builder() -> RateLimitConfigBuilder {
        RateLimitConfigBuilder::default()
    }

    /// Default configuration with a different initial rate seed.
    pub fn with_initial_rate(rate: f64) -> Self {
        Self {
            initial_per_second_rate: rate,
            ..Self::default()
        }
    }
}

impl RateLimitConfigBuilder {
    /// Rejects values that would break the estimator's arithmetic: the rate
    /// fields feed a `1.0 / rate` interval computation, so both must stay
    /// strictly positive, the backoff factor must actually shrink the rate,
    /// and the growth factor must not shrink it.
    fn validate(&self) -> Result<(), ConfigError> {
        fn positive(name: &str, value: Option<f64>) -> Result<(), ConfigError> {
            match value {
                Some(v) if v <= 0.0 => Err(ConfigError::new(format!(
                    "{name} must be positive, got {v}"
                ))),
                _ => Ok(()),
            }
        }
        positive("initial_per_second_rate", self.initial_per_second_rate)?;
        positive("minimum_rate", self.minimum_rate)?;
        positive("backoff_factor", self.backoff_factor)?;
        positive("growth_factor", self.growth_factor)?;
        if let Some(factor) = self.backoff_factor {
            if factor >= 1.0 {
                return Err(ConfigError::new(format!(
                    "backoff_factor must be below 1.0 to shrink the rate, got {factor}"
                )));
            }
        }
        if let Some(factor) = self.growth_factor {
            if factor < 1.0 {
                return Err(ConfigError::new(format!(
                    "growth_factor must be at least 1.0, got {factor}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            initial_per_second_rate: 5.0,
            minimum_rate: 0.1,
            backoff_factor: 0.5,
            growth_factor: 1.25,
            recovery_threshold: 8,
            enforcement_window: Duration::from_secs(60),
            max_rate_limit_retries: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = RateLimitConfig::default();
        assert_eq!(*config.initial_per_second_rate(), 5.0);
        assert_eq!(*config.minimum_rate(), 0.1);
        assert_eq!(*config.backoff_factor(), 0.5);
        assert_eq!(*config.growth_factor(), 1.25);
        assert_eq!(*config.recovery_threshold(), 8);
        assert_eq!(*config.enforcement_window(), Duration::from_secs(60));
        assert_eq!(*config.max_rate_limit_retries(), 10);
    }

    #[test]
    fn builder_overrides_selected_fields() {
        let config = RateLimitConfig::builder()
            .minimum_rate(1.0)
            .enforcement_window(Duration::from_secs(30))
            .build()
            .unwrap();
        assert_eq!(*config.minimum_rate(), 1.0);
        assert_eq!(*config.enforcement_window(), Duration::from_secs(30));
        // Untouched fields keep their defaults
        assert_eq!(*config.max_rate_limit_retries(), 10);
    }

    #[test]
    fn zero_rates_are_rejected() {
        let result = RateLimitConfig::builder()
            .initial_per_second_rate(0.0)
            .minimum_rate(0.0)
            .build();
        let err = result.expect_err("zero rates must not build");
        assert!(format!("{err}").contains("initial_per_second_rate"));
    }

    #[test]
    fn negative_floor_is_rejected() {
        let result = RateLimitConfig::builder().minimum_rate(-1.0).build();
        assert!(result.is_err());
    }

    #[test]
    fn degenerate_factors_are_rejected() {
        assert!(RateLimitConfig::builder().backoff_factor(1.0).build().is_err());
        assert!(RateLimitConfig::builder().backoff_factor(0.0).build().is_err());
        assert!(RateLimitConfig::builder().growth_factor(0.9).build().is_err());
    }
}
