//! The linear pipeline: acquire, unpack, search.
//!
//! Three entry points matching the menu: the full chain, unpack-then-search
//! for an existing file, and search alone. Only acquisition failure is a
//! hard error; extraction and search failures are carried in the outcome so
//! the caller can report them without changing the process exit code.

use crate::acquire::{self, AcquireError, AcquireSpec};
use crate::fetch::Fetch;
use crate::retry::RetryPolicy;
use crate::search::{self, KeywordOutcome, SearchError};
use crate::unpack::{self, UnpackError, UnpackOutcome};
use std::path::{Path, PathBuf};

/// Everything the completed pipeline produced.
#[derive(Debug)]
pub struct PipelineReport {
    /// Path of the staged (renamed) download, when the run included acquire.
    pub staged: Option<PathBuf>,
    /// What the unpack stage did, when the run included it.
    pub unpacked: Option<UnpackOutcome>,
    /// Per-keyword outcomes, in input order.
    pub results: Vec<(String, KeywordOutcome)>,
}

/// Terminal state of a pipeline run that got past acquisition.
#[derive(Debug)]
pub enum PipelineOutcome {
    Completed(PipelineReport),
    /// Extraction failed; search never ran. Not fatal to the process.
    UnpackFailed { staged: PathBuf, error: UnpackError },
    /// The directory walk or a result write failed. Not fatal to the process.
    SearchFailed(SearchError),
}

/// Full chain: fetch with retry, stage, unpack, search.
///
/// `Err` means the retry budget was exhausted (or staging failed) and the
/// process should exit non-zero.
pub fn run_full<F: Fetch>(
    spec: &AcquireSpec,
    keywords: &[String],
    fetcher: &F,
    policy: &RetryPolicy,
) -> Result<PipelineOutcome, AcquireError> {
    let staged = acquire::run(spec, fetcher, policy)?;
    Ok(unpack_then_search(&staged, &spec.download_dir, keywords))
}

/// Menu option 2: unpack an existing file, then search its directory.
pub fn run_from_unpack(file: &Path, target_dir: &Path, keywords: &[String]) -> PipelineOutcome {
    unpack_then_search(file, target_dir, keywords)
}

/// Menu option 3: search a directory directly.
pub fn run_from_search(target_dir: &Path, keywords: &[String]) -> PipelineOutcome {
    match search::search_all(target_dir, keywords) {
        Ok(results) => PipelineOutcome::Completed(PipelineReport {
            staged: None,
            unpacked: None,
            results,
        }),
        Err(e) => PipelineOutcome::SearchFailed(e),
    }
}

fn unpack_then_search(file: &Path, target_dir: &Path, keywords: &[String]) -> PipelineOutcome {
    let unpacked = match unpack::unpack(file, target_dir) {
        Ok(o) => o,
        Err(error) => {
            return PipelineOutcome::UnpackFailed {
                staged: file.to_path_buf(),
                error,
            }
        }
    };

    match search::search_all(target_dir, keywords) {
        Ok(results) => PipelineOutcome::Completed(PipelineReport {
            staged: Some(file.to_path_buf()),
            unpacked: Some(unpacked),
            results,
        }),
        Err(e) => PipelineOutcome::SearchFailed(e),
    }
}
