//! `osift fetch` / menu option 1 – download, stage, unpack, search.

use super::report;
use crate::cli::prompt;
use anyhow::{Context, Result};
use osift_core::acquire::AcquireSpec;
use osift_core::config::OsiftConfig;
use osift_core::fetch::CurlFetcher;
use osift_core::pipeline;
use osift_core::retry::RetryPolicy;
use osift_core::search::parse_keywords;
use std::path::PathBuf;

pub fn run_fetch(
    cfg: &OsiftConfig,
    url: Option<String>,
    download_dir: Option<PathBuf>,
    name: Option<String>,
    keywords: Option<String>,
) -> Result<()> {
    let url = match url {
        Some(u) => u,
        None => prompt::prompt("Enter the URL: ")?,
    };
    let download_dir = match download_dir {
        Some(d) => d,
        None => PathBuf::from(prompt::prompt_or_default(
            "Enter the download directory",
            &cfg.download_dir.to_string_lossy(),
        )?),
    };
    let final_name = match name {
        Some(n) => n,
        None => prompt::prompt("Enter the new file name (including the file format, e.g., file.zip): ")?,
    };
    let keywords = match keywords {
        Some(k) => k,
        None => prompt::prompt("Enter keywords to search for (comma-separated): ")?,
    };

    let spec = AcquireSpec {
        url,
        download_dir,
        final_name,
    };
    let policy = RetryPolicy::from_config(&cfg.retry.clone().unwrap_or_default());
    let fetcher = CurlFetcher::new(cfg.proxy.clone());

    println!("Downloading: {}", spec.url);
    println!("Download directory: {}", spec.download_dir.display());
    println!("New file name: {}", spec.final_name);

    let outcome = pipeline::run_full(&spec, &parse_keywords(&keywords), &fetcher, &policy)
        .context("max retries reached, download failed")?;

    println!("Download successful!");
    report::print_outcome(&spec.download_dir, &outcome);
    Ok(())
}
