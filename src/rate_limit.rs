use std::time::{Duration, Instant};

use dashmap::DashMap;

const WINDOW: Duration = Duration::from_secs(15 * 60);
const MAX_FAILURES: u32 = 5;

/// Per-email login brute force limiter: 5 failures per 15 minutes.
pub struct LoginRateLimiter {
    /// email -> (failed_count, window_start)
    entries: DashMap<String, (u32, Instant)>,
}

impl LoginRateLimiter {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Check if a login attempt is allowed. Returns Err with retry-after
    /// seconds when the email is locked out. Does NOT increment the
    /// counter — call `record_failure()` on invalid password.
    pub fn check(&self, email: &str) -> Result<(), u64> {
        let now = Instant::now();

        let entry = self.entries.get(&email.to_lowercase());
        let Some(entry) = entry else {
            return Ok(());
        };

        let (count, start) = entry.value();

        if now.duration_since(*start) > WINDOW {
            return Ok(());
        }

        if *count >= MAX_FAILURES {
            let elapsed = now.duration_since(*start).as_secs();
            return Err(WINDOW.as_secs().saturating_sub(elapsed));
        }

        Ok(())
    }

    /// Record a failed login attempt for the given email.
    pub fn record_failure(&self, email: &str) {
        let now = Instant::now();

        let mut entry = self.entries.entry(email.to_lowercase()).or_insert((0, now));
        let (count, start) = entry.value_mut();

        if now.duration_since(*start) > WINDOW {
            *count = 1;
            *start = now;
        } else {
            *count += 1;
        }
    }

    /// Remove stale entries older than the given duration.
    pub fn cleanup(&self, max_age: Duration) {
        let now = Instant::now();
        self.entries
            .retain(|_, (_, start)| now.duration_since(*start) < max_age);
    }
}

impl Default for LoginRateLimiter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allows_until_failure_threshold() {
        let limiter = LoginRateLimiter::new();
        for _ in 0..4 {
            limiter.record_failure("user@test.com");
        }
        assert!(limiter.check("user@test.com").is_ok());

        limiter.record_failure("user@test.com");
        assert!(limiter.check("user@test.com").is_err());
    }

    #[test]
    fn emails_are_case_insensitive() {
        let limiter = LoginRateLimiter::new();
        for _ in 0..5 {
            limiter.record_failure("User@Test.com");
        }
        assert!(limiter.check("user@test.com").is_err());
    }

    #[test]
    fn other_emails_unaffected() {
        let limiter = LoginRateLimiter::new();
        for _ in 0..5 {
            limiter.record_failure("locked@test.com");
        }
        assert!(limiter.check("fine@test.com").is_ok());
    }
}
