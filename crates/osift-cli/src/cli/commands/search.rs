//! `osift search` / menu option 3 – search a directory directly.

use super::report;
use crate::cli::prompt;
use anyhow::Result;
use osift_core::pipeline;
use osift_core::search::parse_keywords;
use std::path::PathBuf;

pub fn run_search(dir: Option<PathBuf>, keywords: Option<String>) -> Result<()> {
    let dir = match dir {
        Some(d) => d,
        None => PathBuf::from(prompt::prompt("Enter the directory to search in: ")?),
    };
    let keywords = match keywords {
        Some(k) => k,
        None => prompt::prompt("Enter keywords to search for (comma-separated): ")?,
    };

    println!("Searching for keywords in directory: {}", dir.display());
    let outcome = pipeline::run_from_search(&dir, &parse_keywords(&keywords));
    report::print_outcome(&dir, &outcome);
    Ok(())
}
