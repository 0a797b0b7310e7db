//! Adaptive requests-per-second estimation.

use crate::RateLimitConfig;
use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// Tracks the permitted call rate for one model instance.
///
/// The estimate shrinks multiplicatively on every rate-limit rejection and
/// grows back toward the initially configured rate after sustained success
/// with no rejection inside the enforcement window. All transitions are pure
/// state updates; the estimator performs no I/O and never fails.
///
/// Pacing uses virtual-time slot reservation: [`RateEstimator::reserve`]
/// returns the delay required to respect the current rate and advances the
/// shared next-allowed slot, so concurrent callers sharing one estimator
/// queue up collectively rather than each pacing independently.
#[derive(Debug, Clone)]
pub struct RateEstimator {
    /// Permitted requests per second, always >= minimum_rate
    rate: f64,
    /// Recovery ceiling (the initially configured rate)
    ceiling: f64,
    minimum_rate: f64,
    backoff_factor: f64,
    growth_factor: f64,
    recovery_threshold: u32,
    enforcement_window: Duration,
    /// Successes since the last rate-limit event or recovery step
    consecutive_successes: u32,
    /// Most recent rate-limit event, if any
    last_throttle: Option<Instant>,
    /// End of the most recently reserved pacing slot
    next_slot: Option<Instant>,
}

impl RateEstimator {
    /// Create an estimator seeded from the configured initial rate.
    pub fn new(config: &RateLimitConfig) -> Self {
        let rate = config
            .initial_per_second_rate()
            .max(*config.minimum_rate());
        debug!(rate, "Seeding rate estimator");
        Self {
            rate,
            ceiling: rate,
            minimum_rate: *config.minimum_rate(),
            backoff_factor: *config.backoff_factor(),
            growth_factor: *config.growth_factor(),
            recovery_threshold: *config.recovery_threshold(),
            enforcement_window: *config.enforcement_window(),
            consecutive_successes: 0,
            last_throttle: None,
            next_slot: None,
        }
    }

    /// The current permitted requests per second.
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Reserve the next pacing slot and return the delay to wait before it.
    ///
    /// Returns zero when the previous slot has already elapsed. The caller
    /// must perform the wait itself; the estimator only does the arithmetic.
    pub fn reserve(&mut self) -> Duration {
        let now = Instant::now();
        let interval = Duration::from_secs_f64(1.0 / self.rate);
        let start = match self.next_slot {
            Some(slot) if slot > now => slot,
            _ => now,
        };
        self.next_slot = Some(start + interval);
        let wait = start.duration_since(now);
        trace!(?wait, rate = self.rate, "Reserved pacing slot");
        wait
    }

    /// Record a rate-limit rejection: shrink the rate and restart recovery.
    pub fn on_rate_limited(&mut self) {
        self.rate = (self.rate * self.backoff_factor).max(self.minimum_rate);
        self.last_throttle = Some(Instant::now());
        self.consecutive_successes = 0;
        debug!(rate = self.rate, "Rate limited, decreased permitted rate");
    }

    /// Record a success; may take one recovery step toward the ceiling.
    ///
    /// A step is taken once `recovery_threshold` consecutive successes have
    /// accumulated and no rate-limit event occurred inside the enforcement
    /// window. The success count restarts after every step so recovery stays
    /// gradual.
    pub fn on_success(&mut self) {
        self.consecutive_successes += 1;
        if self.consecutive_successes < self.recovery_threshold {
            return;
        }
        self.consecutive_successes = 0;
        let throttled_recently = self
            .last_throttle
            .is_some_and(|at| at.elapsed() < self.enforcement_window);
        if throttled_recently {
            return;
        }
        if self.rate < self.ceiling {
            self.rate = (self.rate * self.growth_factor).min(self.ceiling);
            debug!(rate = self.rate, "Sustained success, increased permitted rate");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(initial: f64, minimum: f64, window: Duration) -> RateLimitConfig {
        RateLimitConfig::builder()
            .initial_per_second_rate(initial)
            .minimum_rate(minimum)
            .enforcement_window(window)
            .build()
            .unwrap()
    }

    #[test]
    fn rate_never_drops_below_floor() {
        let mut estimator = RateEstimator::new(&config(5.0, 0.5, Duration::from_secs(60)));
        for _ in 0..100 {
            estimator.on_rate_limited();
            assert!(estimator.rate() >= 0.5);
        }
        assert_eq!(estimator.rate(), 0.5);
    }

    #[test]
    fn recovery_blocked_inside_enforcement_window() {
        let mut estimator = RateEstimator::new(&config(8.0, 0.1, Duration::from_secs(60)));
        estimator.on_rate_limited();
        let backed_off = estimator.rate();
        for _ in 0..50 {
            estimator.on_success();
        }
        assert_eq!(estimator.rate(), backed_off);
    }

    #[test]
    fn recovery_grows_toward_ceiling_outside_window() {
        let mut estimator = RateEstimator::new(&config(8.0, 0.1, Duration::ZERO));
        estimator.on_rate_limited();
        estimator.on_rate_limited();
        let backed_off = estimator.rate();
        assert_eq!(backed_off, 2.0);
        // Enough success batches to recover fully
        for _ in 0..200 {
            estimator.on_success();
        }
        assert_eq!(estimator.rate(), 8.0);
    }

    #[test]
    fn recovery_never_exceeds_initial_rate() {
        let mut estimator = RateEstimator::new(&config(4.0, 0.1, Duration::ZERO));
        for _ in 0..100 {
            estimator.on_success();
        }
        assert_eq!(estimator.rate(), 4.0);
    }

    #[test]
    fn throttle_resets_success_count() {
        let mut estimator = RateEstimator::new(&config(8.0, 0.1, Duration::ZERO));
        estimator.on_rate_limited();
        // Seven successes, then a throttle, then seven more: no recovery step
        // should fire because the count never reaches eight consecutively.
        for _ in 0..7 {
            estimator.on_success();
        }
        estimator.on_rate_limited();
        let backed_off = estimator.rate();
        for _ in 0..7 {
            estimator.on_success();
        }
        assert_eq!(estimator.rate(), backed_off);
    }

    #[test]
    fn first_reservation_is_immediate() {
        let mut estimator = RateEstimator::new(&config(10.0, 0.1, Duration::from_secs(60)));
        assert_eq!(estimator.reserve(), Duration::ZERO);
    }

    #[test]
    fn consecutive_reservations_space_by_interval() {
        let mut estimator = RateEstimator::new(&config(10.0, 0.1, Duration::from_secs(60)));
        let first = estimator.reserve();
        let second = estimator.reserve();
        assert_eq!(first, Duration::ZERO);
        // Second slot starts one interval (100ms) after the first
        assert!(second > Duration::from_millis(80), "second wait {second:?}");
        assert!(second <= Duration::from_millis(100), "second wait {second:?}");
    }

    #[test]
    fn backoff_lengthens_future_reservations() {
        let mut estimator = RateEstimator::new(&config(10.0, 0.1, Duration::from_secs(60)));
        let _ = estimator.reserve();
        estimator.on_rate_limited();
        // Rate halved to 5 rps, so the third slot is ~200ms after the second
        let _ = estimator.reserve();
        let third = estimator.reserve();
        assert!(third > Duration::from_millis(150), "third wait {third:?}");
    }
}
