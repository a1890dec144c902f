//! Search stage: case-insensitive keyword scan over a directory tree.
//!
//! One result file per keyword is written into the searched directory
//! itself, named `search_results_<keyword>.txt`. The file is created (and
//! truncated) before scanning, so a keyword never matches its own stale
//! results from a previous run; result files written for earlier keywords in
//! the same run are scanned like any other file.

mod keywords;
mod walk;

pub use keywords::parse_keywords;

use regex::RegexBuilder;
use std::fs;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Prefix and suffix for per-keyword result files.
const RESULT_PREFIX: &str = "search_results_";
const RESULT_SUFFIX: &str = ".txt";

/// Per-keyword scan outcome. Unreadable files are logged and skipped and
/// never turn a scan into an error; only failing to walk the directory
/// itself does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeywordOutcome {
    /// At least one line matched; `matches` lines were written.
    Found { matches: usize },
    /// No line in any readable file matched.
    NotFound,
}

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("walk {dir}: {source}")]
    Walk {
        dir: PathBuf,
        source: std::io::Error,
    },
    #[error("write results: {0}")]
    Write(std::io::Error),
    /// Keyword too large for the regex engine's size limit.
    #[error("pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Name of the result file for a keyword.
///
/// Keywords containing filesystem-unsafe characters collide or fail at file
/// creation; that mirrors the original tool and is not papered over here.
pub fn result_file_name(keyword: &str) -> String {
    format!("{RESULT_PREFIX}{keyword}{RESULT_SUFFIX}")
}

/// Scans every file under `dir` for case-insensitive substring matches of
/// `keyword` and writes matching lines (prefixed with their file path) to
/// the keyword's result file inside `dir`.
///
/// The result file is always created, and is empty when nothing matched.
pub fn search_keyword(dir: &Path, keyword: &str) -> Result<KeywordOutcome, SearchError> {
    // Literal substring semantics: the keyword is escaped, only the
    // case-insensitivity comes from the regex engine.
    let pattern = RegexBuilder::new(&regex::escape(keyword))
        .case_insensitive(true)
        .build()?;

    let result_path = dir.join(result_file_name(keyword));
    let mut out = File::create(&result_path).map_err(SearchError::Write)?;

    let files = walk::files_under(dir).map_err(|source| SearchError::Walk {
        dir: dir.to_path_buf(),
        source,
    })?;

    let mut matches = 0usize;
    for file in files {
        if file == result_path {
            continue; // just truncated, nothing to see
        }
        let content = match fs::read_to_string(&file) {
            Ok(c) => c,
            Err(e) => {
                tracing::warn!("skipping unreadable file {}: {}", file.display(), e);
                continue;
            }
        };
        for line in content.lines() {
            if pattern.is_match(line) {
                writeln!(out, "{}:{}", file.display(), line).map_err(SearchError::Write)?;
                matches += 1;
            }
        }
    }

    if matches > 0 {
        Ok(KeywordOutcome::Found { matches })
    } else {
        Ok(KeywordOutcome::NotFound)
    }
}

/// Runs [`search_keyword`] for each keyword, strictly in order, with no
/// deduplication and no early exit. Returns `(keyword, outcome)` pairs.
pub fn search_all(
    dir: &Path,
    keywords: &[String],
) -> Result<Vec<(String, KeywordOutcome)>, SearchError> {
    tracing::info!("searching {} for {} keyword(s)", dir.display(), keywords.len());
    let mut results = Vec::with_capacity(keywords.len());
    for keyword in keywords {
        let outcome = search_keyword(dir, keyword)?;
        results.push((keyword.clone(), outcome));
    }
    Ok(results)
}
