//! In-memory rate limiting for sign-in attempts.
//!
//! DESIGN
//! ======
//! Sliding-window counters backed by `HashMap<String, VecDeque<Instant>>`,
//! keyed by normalized email. Every attempt reserves a slot before the
//! password is checked; a successful sign-in clears the key, so in steady
//! state only failures remain counted. Expired keys are dropped on each
//! reservation. The lock is never held across an `.await`.
//!
//! TRADE-OFFS
//! ==========
//! State is per-process and lost on restart, which is acceptable for
//! throttling online guessing against a single instance.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("too many sign-in attempts, retry in {retry_after_secs}s")]
pub struct RateLimitError {
    pub retry_after_secs: u64,
}

#[derive(Clone)]
pub struct RateLimiter {
    inner: Arc<Mutex<HashMap<String, VecDeque<Instant>>>>,
    limit: usize,
    window: Duration,
}

impl RateLimiter {
    #[must_use]
    pub fn new(limit: usize, window: Duration) -> Self {
        Self { inner: Arc::new(Mutex::new(HashMap::new())), limit, window }
    }

    /// Reserve one sign-in attempt for `key`, failing if the window is full.
    ///
    /// The check and the record happen under one lock, so concurrent attempts
    /// cannot all slip past the limit before any of them is counted. A
    /// successful sign-in should `reset` the key afterwards.
    pub fn check_and_record(&self, key: &str) -> Result<(), RateLimitError> {
        self.check_and_record_at(key, Instant::now())
    }

    fn check_and_record_at(&self, key: &str, now: Instant) -> Result<(), RateLimitError> {
        let mut inner = self.inner.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        // Drop keys whose attempts have all aged out.
        inner.retain(|_, deque| {
            prune_window(deque, now, self.window);
            !deque.is_empty()
        });

        let deque = inner.entry(key.to_owned()).or_default();
        if deque.len() >= self.limit {
            let oldest = deque.front().copied().unwrap_or(now);
            let remaining = self.window.saturating_sub(now.duration_since(oldest));
            return Err(RateLimitError { retry_after_secs: remaining.as_secs().max(1) });
        }
        deque.push_back(now);
        Ok(())
    }

    /// Forget all recorded attempts for `key`.
    pub fn reset(&self, key: &str) {
        let mut inner = self.inner.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        inner.remove(key);
    }

    #[cfg(test)]
    fn tracked_keys(&self) -> usize {
        self.inner.lock().unwrap_or_else(std::sync::PoisonError::into_inner).len()
    }
}

fn prune_window(deque: &mut VecDeque<Instant>, now: Instant, window: Duration) {
    while let Some(&front) = deque.front() {
        if now.duration_since(front) > window {
            deque.pop_front();
        } else {
            break;
        }
    }
}

#[cfg(test)]
#[path = "rate_limit_test.rs"]
mod tests;
