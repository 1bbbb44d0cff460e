//! Inter-keyword pacing.

use std::time::Duration;

use async_trait::async_trait;

/// Pause inserted after every keyword, successful or not.
#[async_trait]
pub trait Throttle: Send + Sync {
    async fn pause(&self);
}

/// Sleeps for a fixed interval. Not a back-off: the delay never changes.
#[derive(Debug, Clone, Copy)]
pub struct FixedInterval {
    interval: Duration,
}

impl FixedInterval {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }
}

#[async_trait]
impl Throttle for FixedInterval {
    async fn pause(&self) {
        if !self.interval.is_zero() {
            tokio::time::sleep(self.interval).await;
        }
    }
}

/// Never waits.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoThrottle;

#[async_trait]
impl Throttle for NoThrottle {
    async fn pause(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn fixed_interval_sleeps_for_configured_duration() {
        let throttle = FixedInterval::from_millis(2_000);
        let start = tokio::time::Instant::now();
        throttle.pause().await;
        assert!(start.elapsed() >= Duration::from_millis(2_000));
    }

    #[tokio::test(start_paused = true)]
    async fn zero_interval_does_not_sleep() {
        let start = tokio::time::Instant::now();
        FixedInterval::from_millis(0).pause().await;
        NoThrottle.pause().await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }
}
