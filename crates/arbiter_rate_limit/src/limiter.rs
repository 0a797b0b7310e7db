//! Rate-limit enforcement and retry around a unit of work.

use crate::{RateEstimator, RateLimitConfig};
use arbiter_error::RateLimitSignal;
use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::{debug, warn};

/// Wraps completion calls with adaptive pacing and rate-limit retry.
///
/// One limiter instance guards one model instance. The estimator state is
/// shared across clones and across concurrent callers, so every in-flight
/// call observes rate updates made by the others. The mutex is held only for
/// the reservation arithmetic and state updates, never across a wait or the
/// wrapped work itself.
///
/// Both execution models share identical semantics:
/// - [`AdaptiveRateLimiter::run`] suspends on the pacing delay so other
///   tasks on the same executor proceed while one call waits;
/// - [`AdaptiveRateLimiter::run_blocking`] occupies the calling thread for
///   the wait plus the work.
///
/// Work errors whose [`RateLimitSignal::is_rate_limited`] reports true shrink
/// the estimated rate and are retried until the retry budget is exhausted,
/// at which point the rate-limit error surfaces to the caller as an ordinary
/// failure. Every other error propagates immediately without retry.
#[derive(Debug, Clone)]
pub struct AdaptiveRateLimiter {
    estimator: Arc<Mutex<RateEstimator>>,
    max_retries: u32,
}

impl AdaptiveRateLimiter {
    /// Create a limiter from configuration.
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            estimator: Arc::new(Mutex::new(RateEstimator::new(&config))),
            max_retries: *config.max_rate_limit_retries(),
        }
    }

    /// The current permitted requests per second.
    ///
    /// Useful for monitoring and tests; callers never need to consult this
    /// to pace themselves.
    pub fn current_rate(&self) -> f64 {
        self.estimator
            .lock()
            .expect("estimator mutex poisoned")
            .rate()
    }

    fn reserve(&self) -> Duration {
        self.estimator
            .lock()
            .expect("estimator mutex poisoned")
            .reserve()
    }

    fn record_rate_limited(&self) {
        self.estimator
            .lock()
            .expect("estimator mutex poisoned")
            .on_rate_limited();
    }

    fn record_success(&self) {
        self.estimator
            .lock()
            .expect("estimator mutex poisoned")
            .on_success();
    }

    /// Run a unit of async work under the rate limit, retrying on rate-limit
    /// errors.
    ///
    /// The pacing wait is a suspension point: concurrent invocations against
    /// the same limiter interleave on one executor while collectively
    /// respecting the shared rate estimate.
    ///
    /// # Errors
    ///
    /// Returns the work's error unchanged, either immediately for
    /// non-rate-limit errors or after the retry budget is exhausted for
    /// rate-limit errors.
    pub async fn run<T, E, F, Fut>(&self, work: F) -> Result<T, E>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: RateLimitSignal + std::fmt::Display,
    {
        let mut remaining = self.max_retries;
        loop {
            let wait = self.reserve();
            if !wait.is_zero() {
                tokio::time::sleep(wait).await;
            }
            match work().await {
                Ok(value) => {
                    self.record_success();
                    return Ok(value);
                }
                Err(e) if e.is_rate_limited() => {
                    self.record_rate_limited();
                    if remaining <= 1 {
                        warn!(error = %e, "Rate-limit retry budget exhausted");
                        return Err(e);
                    }
                    remaining -= 1;
                    warn!(error = %e, remaining, "Rate limited, will retry");
                }
                Err(e) => {
                    debug!(error = %e, "Non-rate-limit error, failing immediately");
                    return Err(e);
                }
            }
        }
    }

    /// Run a unit of blocking work under the rate limit, retrying on
    /// rate-limit errors.
    ///
    /// Identical semantics to [`AdaptiveRateLimiter::run`], but the pacing
    /// wait blocks the calling thread. Do not call from within an async
    /// runtime.
    ///
    /// # Errors
    ///
    /// Returns the work's error unchanged, either immediately for
    /// non-rate-limit errors or after the retry budget is exhausted for
    /// rate-limit errors.
    pub fn run_blocking<T, E, F>(&self, mut work: F) -> Result<T, E>
    where
        F: FnMut() -> Result<T, E>,
        E: RateLimitSignal + std::fmt::Display,
    {
        let mut remaining = self.max_retries;
        loop {
            let wait = self.reserve();
            if !wait.is_zero() {
                std::thread::sleep(wait);
            }
            match work() {
                Ok(value) => {
                    self.record_success();
                    return Ok(value);
                }
                Err(e) if e.is_rate_limited() => {
                    self.record_rate_limited();
                    if remaining <= 1 {
                        warn!(error = %e, "Rate-limit retry budget exhausted");
                        return Err(e);
                    }
                    remaining -= 1;
                    warn!(error = %e, remaining, "Rate limited, will retry");
                }
                Err(e) => {
                    debug!(error = %e, "Non-rate-limit error, failing immediately");
                    return Err(e);
                }
            }
        }
    }
}
