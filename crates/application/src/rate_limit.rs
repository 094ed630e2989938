//! Sliding-window rate limiter
//!
//! Bounds requests per client within a trailing time interval. Each client
//! key owns an ordered sequence of request timestamps; a check evicts
//! timestamps that fell out of the window, rejects when the remainder is at
//! the limit, and appends the current timestamp otherwise.

use std::{
    collections::{HashMap, VecDeque},
    time::{Duration, Instant},
};

use parking_lot::RwLock;

/// Rate limiter configuration
#[derive(Clone, Debug)]
pub struct RateLimiterConfig {
    /// Maximum requests per window
    pub max_requests: u32,
    /// Window length in seconds
    pub window_secs: u64,
}

impl Default for RateLimiterConfig {
    fn default() -> Self {
        Self {
            max_requests: 20,
            window_secs: 60,
        }
    }
}

/// Process-wide sliding-window rate limiter, keyed by client identity
///
/// The ledger is the only state shared between concurrent requests. Checks
/// never suspend: the critical section is a sync lock around one
/// append/evict pass, so the gate can run before any async work starts.
#[derive(Debug)]
pub struct SlidingWindowRateLimiter {
    ledger: RwLock<HashMap<String, VecDeque<Instant>>>,
    max_requests: usize,
    window: Duration,
}

impl SlidingWindowRateLimiter {
    /// Create a new rate limiter
    #[must_use]
    pub fn new(config: &RateLimiterConfig) -> Self {
        Self {
            ledger: RwLock::new(HashMap::new()),
            max_requests: config.max_requests as usize,
            window: Duration::from_secs(config.window_secs),
        }
    }

    /// Check if a request from the given client is allowed
    ///
    /// On rejection, returns the number of seconds until the oldest
    /// retained timestamp leaves the window.
    ///
    /// # Errors
    ///
    /// Returns `Err(retry_after_secs)` when the client is at its limit.
    pub fn check(&self, client_key: &str) -> Result<(), u64> {
        let now = Instant::now();
        let mut ledger = self.ledger.write();

        let timestamps = ledger.entry(client_key.to_string()).or_default();

        while let Some(oldest) = timestamps.front() {
            if now.duration_since(*oldest) >= self.window {
                timestamps.pop_front();
            } else {
                break;
            }
        }

        if timestamps.len() >= self.max_requests {
            // Oldest entry is guaranteed present: max_requests is at least 1
            // for any config that can reject.
            let retry_after = timestamps
                .front()
                .map_or(Duration::ZERO, |oldest| {
                    self.window.saturating_sub(now.duration_since(*oldest))
                });
            return Err(retry_after.as_secs());
        }

        timestamps.push_back(now);
        Ok(())
    }

    /// Drop ledger entries for clients idle longer than the window
    pub fn cleanup(&self) {
        let now = Instant::now();
        let window = self.window;
        let mut ledger = self.ledger.write();

        ledger.retain(|_, timestamps| {
            timestamps
                .back()
                .is_some_and(|newest| now.duration_since(*newest) < window)
        });
    }

    /// Number of clients currently tracked
    #[must_use]
    pub fn tracked_clients(&self) -> usize {
        self.ledger.read().len()
    }
}
