//! `osift unpack` / menu option 2 – process an existing file.

use super::report;
use crate::cli::prompt;
use anyhow::Result;
use osift_core::config::OsiftConfig;
use osift_core::pipeline;
use osift_core::search::parse_keywords;
use std::path::PathBuf;

/// Returns true when the pipeline reached the search stage, false when
/// extraction failed (the menu re-presents itself in that case).
pub fn run_unpack(
    cfg: &OsiftConfig,
    file: Option<PathBuf>,
    dir: Option<PathBuf>,
    keywords: Option<String>,
) -> Result<bool> {
    let file = match file {
        Some(f) => f,
        None => PathBuf::from(prompt::prompt(
            "Enter the path of the file to process (including the file name): ",
        )?),
    };
    let dir = match dir {
        Some(d) => d,
        None => PathBuf::from(prompt::prompt_or_default(
            "Enter the directory for extracted files",
            &cfg.download_dir.to_string_lossy(),
        )?),
    };
    let keywords = match keywords {
        Some(k) => k,
        None => prompt::prompt("Enter keywords to search for (comma-separated): ")?,
    };

    let outcome = pipeline::run_from_unpack(&file, &dir, &parse_keywords(&keywords));
    Ok(report::print_outcome(&dir, &outcome))
}
