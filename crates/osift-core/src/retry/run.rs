//! Retry loop: run a closure until success or the attempt budget is spent.

use super::policy::{RetryDecision, RetryPolicy};

/// Runs a closure until it succeeds or the policy says to stop.
/// On failure, sleeps for the fixed delay then tries again. Returns the last
/// error once the budget is exhausted.
pub fn run_with_retry<T, E, F>(policy: &RetryPolicy, mut f: F) -> Result<T, E>
where
    F: FnMut(u32) -> Result<T, E>,
    E: std::fmt::Display,
{
    let mut attempt = 1u32;
    loop {
        match f(attempt) {
            Ok(v) => return Ok(v),
            Err(e) => match policy.decide(attempt) {
                RetryDecision::NoRetry => return Err(e),
                RetryDecision::RetryAfter(d) => {
                    tracing::debug!("attempt {} failed ({}), retrying in {:?}", attempt, e, d);
                    std::thread::sleep(d);
                    attempt += 1;
                }
            },
        }
    }
}
