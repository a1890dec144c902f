//! Single-stream HTTP GET via libcurl, routed through a SOCKS proxy.
//!
//! Stands in for the original `torsocks wget -O` invocation: the body is
//! written sequentially to the destination path, and any non-2xx status is a
//! failed attempt.

use super::{Fetch, FetchError};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

/// Fetcher backed by the curl easy interface.
#[derive(Debug, Clone, Default)]
pub struct CurlFetcher {
    /// SOCKS proxy URL, e.g. `socks5h://127.0.0.1:9050` (None = direct).
    pub proxy: Option<String>,
}

impl CurlFetcher {
    pub fn new(proxy: Option<String>) -> Self {
        Self { proxy }
    }
}

impl Fetch for CurlFetcher {
    fn fetch(&self, url: &str, dest: &Path) -> Result<(), FetchError> {
        let mut out = File::create(dest)?;
        let mut write_err: Option<std::io::Error> = None;

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        easy.connect_timeout(Duration::from_secs(30))?;
        // A stalled circuit counts as a failed attempt rather than hanging forever.
        easy.low_speed_limit(1024)?;
        easy.low_speed_time(Duration::from_secs(60))?;
        if let Some(proxy) = &self.proxy {
            easy.proxy(proxy)?;
        }

        let performed = {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| match out.write_all(data) {
                Ok(()) => Ok(data.len()),
                Err(e) => {
                    write_err = Some(e);
                    Ok(0) // abort transfer
                }
            })?;
            transfer.perform()
        };

        // A local write failure aborts the transfer, which curl then reports
        // as a write error; surface the underlying IO error instead.
        if let Some(e) = write_err {
            return Err(FetchError::Io(e));
        }
        performed?;
        out.flush()?;

        let code = easy.response_code()?;
        if !(200..300).contains(&code) {
            return Err(FetchError::Http(code));
        }
        Ok(())
    }
}
