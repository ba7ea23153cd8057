use tokio::time::{interval, Duration};

use crate::limiter::rate_limiter::ContactRateLimiter;

const EVICTION_INTERVAL: Duration = Duration::from_secs(5 * 60);

pub async fn start_limiter_eviction_task(limiter: ContactRateLimiter) {
    let mut interval = interval(EVICTION_INTERVAL);

    loop {
        interval.tick().await;

        let evicted = limiter.evict_idle();
        if evicted > 0 {
            tracing::info!(
                "Evicted {} idle contact rate-limit windows ({} still tracked)",
                evicted,
                limiter.tracked_keys()
            );
        }
    }
}
