use std::{
    sync::Arc,
    time::{Duration, Instant},
};
use dashmap::DashMap;

const ONE_HOUR: Duration = Duration::from_secs(60 * 60);

/// Sliding window counter. The previous window's count is weighted by how
/// much of it still overlaps the trailing `window_size`.
#[derive(Debug)]
struct SlidingWindow {
    window_size: Duration,
    limit: u64,
    current_window_start: Instant,
    current_count: u64,
    prev_count: u64,
    last_seen: Instant,
}

impl SlidingWindow {
    fn new(window_size: Duration, limit: u64, now: Instant) -> Self {
        Self {
            window_size,
            limit,
            current_window_start: now,
            current_count: 0,
            prev_count: 0,
            last_seen: now,
        }
    }

    fn roll(&mut self, now: Instant) {
        let elapsed = now.duration_since(self.current_window_start);
        if elapsed < self.window_size {
            return;
        }

        let windows_passed = (elapsed.as_secs_f64() / self.window_size.as_secs_f64()) as u32;
        self.prev_count = if windows_passed == 1 { self.current_count } else { 0 };
        self.current_count = 0;
        self.current_window_start += self.window_size * windows_passed;
    }

    fn effective_count(&self, now: Instant) -> f64 {
        let elapsed = now.duration_since(self.current_window_start);
        let overlap = 1.0 - elapsed.as_secs_f64() / self.window_size.as_secs_f64();
        (self.prev_count as f64) * overlap.max(0.0) + (self.current_count as f64)
    }

    fn allow(&mut self, now: Instant) -> bool {
        self.roll(now);
        self.last_seen = now;

        if self.effective_count(now) < self.limit as f64 {
            self.current_count += 1;
            true
        } else {
            false
        }
    }
}

/// Per-key limiter for contact form submissions, keyed by normalized email.
#[derive(Clone)]
pub struct ContactRateLimiter {
    windows: Arc<DashMap<String, SlidingWindow>>,
    window_size: Duration,
    limit: u64,
}

impl ContactRateLimiter {
    pub fn new(limit: u64, window_size: Duration) -> Self {
        Self {
            windows: Arc::new(DashMap::new()),
            window_size,
            limit,
        }
    }

    pub fn per_hour(limit: u64) -> Self {
        Self::new(limit, ONE_HOUR)
    }

    /// Normalizes an email address into a limiter key.
    pub fn key_for(email: &str) -> String {
        email.trim().to_lowercase()
    }

    /// Records an attempt for `key`; returns false when it is over the limit.
    pub fn check(&self, key: &str) -> bool {
        self.check_at(key, Instant::now())
    }

    fn check_at(&self, key: &str, now: Instant) -> bool {
        let mut window = self
            .windows
            .entry(key.to_string())
            .or_insert_with(|| SlidingWindow::new(self.window_size, self.limit, now));

        window.allow(now)
    }

    /// Drops windows idle for two full periods; their counts no longer matter.
    pub fn evict_idle(&self) -> usize {
        let now = Instant::now();
        let ttl = self.window_size * 2;
        let before = self.windows.len();

        self.windows
            .retain(|_, window| now.duration_since(window.last_seen) <= ttl);

        before.saturating_sub(self.windows.len())
    }

    pub fn tracked_keys(&self) -> usize {
        self.windows.len()
    }
}
