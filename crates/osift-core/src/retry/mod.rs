//! Bounded retry with a fixed delay.
//!
//! The fetch stage treats every failure identically: there is no error
//! classification and no backoff, just "try again after a fixed pause, up to
//! a cap". The policy lives here as an explicit value (not process-wide
//! constants) so tests can run with small attempt budgets and zero delay.

mod policy;
mod run;

pub use policy::{RetryDecision, RetryPolicy};
pub use run::run_with_retry;
