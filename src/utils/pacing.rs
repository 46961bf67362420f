//! Randomized courtesy delay between requests to the same host.

use std::time::Duration;

/// Sleeps for a uniformly random time in `[min, max]` milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacer {
    min_ms: u64,
    max_ms: u64,
}

impl Pacer {
    /// Create a pacer; the bounds are swapped if given in the wrong order
    pub fn new(min_ms: u64, max_ms: u64) -> Self {
        Self {
            min_ms: min_ms.min(max_ms),
            max_ms: min_ms.max(max_ms),
        }
    }

    /// A pacer that never sleeps
    pub fn disabled() -> Self {
        Self::new(0, 0)
    }

    pub fn is_disabled(&self) -> bool {
        self.max_ms == 0
    }

    /// Draw the next delay
    pub fn next_delay(&self) -> Duration {
        Duration::from_millis(fastrand::u64(self.min_ms..=self.max_ms))
    }

    /// Sleep for a freshly drawn delay
    pub async fn pause(&self) {
        if self.is_disabled() {
            return;
        }
        let delay = self.next_delay();
        tracing::trace!(?delay, "pacing");
        tokio::time::sleep(delay).await;
    }
}

impl Default for Pacer {
    fn default() -> Self {
        Self::new(500, 1500)
    }
}
