use crate::config::RetryConfig;
use std::time::Duration;

/// Decision returned by the retry policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    /// Do not retry; the attempt budget is spent.
    NoRetry,
    /// Retry after the given delay.
    RetryAfter(Duration),
}

/// Fixed-delay retry policy.
///
/// Every failure is considered retryable; the only stop condition is the
/// attempt cap. Defaults mirror [`RetryConfig::default`].
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Maximum number of attempts (including the first).
    pub max_attempts: u32,
    /// Fixed delay between attempts.
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from_config(&RetryConfig::default())
    }
}

impl RetryPolicy {
    pub fn from_config(cfg: &RetryConfig) -> Self {
        Self {
            max_attempts: cfg.max_attempts,
            delay: Duration::from_secs(cfg.delay_secs),
        }
    }

    /// Decide whether to retry after a failed attempt.
    ///
    /// `attempt` is 1-based (1 = first attempt). Returns
    /// `RetryDecision::NoRetry` once the budget is spent.
    pub fn decide(&self, attempt: u32) -> RetryDecision {
        if attempt >= self.max_attempts {
            RetryDecision::NoRetry
        } else {
            RetryDecision::RetryAfter(self.delay)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delay_is_fixed_across_attempts() {
        let p = RetryPolicy {
            max_attempts: 10,
            delay: Duration::from_millis(50),
        };
        for attempt in 1..10 {
            assert_eq!(
                p.decide(attempt),
                RetryDecision::RetryAfter(Duration::from_millis(50))
            );
        }
    }

    #[test]
    fn respects_max_attempts() {
        let p = RetryPolicy {
            max_attempts: 3,
            delay: Duration::ZERO,
        };
        assert!(matches!(p.decide(1), RetryDecision::RetryAfter(_)));
        assert!(matches!(p.decide(2), RetryDecision::RetryAfter(_)));
        assert_eq!(p.decide(3), RetryDecision::NoRetry);
        assert_eq!(p.decide(4), RetryDecision::NoRetry);
    }

    #[test]
    fn default_matches_config_defaults() {
        let p = RetryPolicy::default();
        assert_eq!(p.max_attempts, 5000);
        assert_eq!(p.delay, Duration::from_secs(2));
    }
}
