//! Minimum-spacing throttle for outbound calls to one third-party service.
//!
//! Advisory self-throttling for a single client: no per-key or per-host
//! budgets. The lock is held across the sleep so concurrent callers queue
//! up and are released one interval apart.

use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::{sleep_until, Instant};

/// Default spacing between outbound calls: 1 second.
pub const DEFAULT_MIN_INTERVAL: Duration = Duration::from_millis(1000);

pub struct RateLimiter {
    min_interval: Duration,
    last_call: Mutex<Option<Instant>>,
}

impl RateLimiter {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_call: Mutex::new(None),
        }
    }

    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// Wait until `min_interval` has passed since the previous call returned.
    /// The first call never waits. Cannot fail.
    pub async fn throttle(&self) {
        let mut last_call = self.last_call.lock().await;
        if let Some(previous) = *last_call {
            let ready_at = previous + self.min_interval;
            if Instant::now() < ready_at {
                log::debug!(
                    "rate limiter: delaying {:?}",
                    ready_at.saturating_duration_since(Instant::now())
                );
                sleep_until(ready_at).await;
            }
        }
        *last_call = Some(Instant::now());
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_INTERVAL)
    }
}
