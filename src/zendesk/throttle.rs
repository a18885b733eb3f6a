use tokio::time::{sleep, Duration};

/// Fixed courtesy delay between consecutive requests of the same kind.
/// Zendesk rate limits are generous for sequential clients, so an
/// unconditional pause is enough; adaptive backoff from rate-limit headers
/// is out of scope.
pub const REQUEST_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone)]
pub struct Throttle {
    delay: Duration,
}

impl Throttle {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub async fn pause(&self) {
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }
    }
}

impl Default for Throttle {
    fn default() -> Self {
        Self::new(REQUEST_DELAY)
    }
}
