//! The fetch capability: retrieve a URL to a local path.
//!
//! The pipeline only cares about pass/fail per attempt, so the capability is
//! a trait; production uses libcurl through a SOCKS proxy, tests substitute
//! scripted fetchers with no network.

mod curl_fetch;

pub use curl_fetch::CurlFetcher;

use std::path::Path;
use thiserror::Error;

/// Error from a single fetch attempt. All variants are retried identically.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Curl reported an error (timeout, connection, proxy, etc.).
    #[error("{0}")]
    Curl(#[from] curl::Error),
    /// HTTP response had a non-2xx status.
    #[error("HTTP {0}")]
    Http(u32),
    /// Local write to the output file failed.
    #[error("write: {0}")]
    Io(#[from] std::io::Error),
}

/// Network-fetch capability: retrieve `url` into the file at `dest`.
///
/// A failed attempt may leave a partial file at `dest`; a subsequent attempt
/// truncates and rewrites it.
pub trait Fetch {
    fn fetch(&self, url: &str, dest: &Path) -> Result<(), FetchError>;
}
