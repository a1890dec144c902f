//! CLI command handlers, one file per pipeline entry point.

mod fetch;
mod report;
mod search;
mod unpack;

pub use fetch::run_fetch;
pub use search::run_search;
pub use unpack::run_unpack;
