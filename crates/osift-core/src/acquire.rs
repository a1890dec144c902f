//! Acquire-and-stage: fetch a URL with retry, then rename to the chosen name.

use crate::fetch::{Fetch, FetchError};
use crate::retry::{run_with_retry, RetryPolicy};
use crate::url_model::remote_filename;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

/// What to acquire and where to stage it.
#[derive(Debug, Clone)]
pub struct AcquireSpec {
    /// Resource URL; passed to the fetcher opaquely, no validation.
    pub url: String,
    /// Directory the download lands in; created if missing.
    pub download_dir: PathBuf,
    /// Final name the fetched file is renamed to, inside `download_dir`.
    pub final_name: String,
}

#[derive(Debug, Error)]
pub enum AcquireError {
    /// Every attempt failed; fatal to the whole pipeline.
    #[error("download failed after {attempts} attempts: {last}")]
    RetriesExhausted { attempts: u32, last: FetchError },
    /// Directory creation or the final rename failed.
    #[error("stage: {0}")]
    Io(#[from] std::io::Error),
}

/// Fetches `spec.url` into `spec.download_dir` under its remote name,
/// retrying per `policy`, then renames it to `spec.final_name`.
///
/// Returns the staged path. Any pre-existing file at either path is
/// overwritten without confirmation.
pub fn run<F: Fetch>(
    spec: &AcquireSpec,
    fetcher: &F,
    policy: &RetryPolicy,
) -> Result<PathBuf, AcquireError> {
    fs::create_dir_all(&spec.download_dir)?;

    let fetched_path = spec.download_dir.join(remote_filename(&spec.url));
    let staged_path = spec.download_dir.join(&spec.final_name);

    tracing::info!("downloading {} to {}", spec.url, fetched_path.display());

    let mut attempts = 0u32;
    run_with_retry(policy, |attempt| {
        attempts = attempt;
        tracing::info!("attempt {}", attempt);
        fetcher.fetch(&spec.url, &fetched_path)
    })
    .map_err(|last| AcquireError::RetriesExhausted { attempts, last })?;

    fs::rename(&fetched_path, &staged_path)?;
    tracing::info!("staged download as {}", staged_path.display());
    Ok(staged_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::FetchError;
    use std::cell::Cell;
    use std::path::Path;
    use std::time::Duration;

    /// Fetcher that fails a scripted number of times, then writes `body`.
    struct FlakyFetcher {
        failures: u32,
        body: &'static [u8],
        calls: Cell<u32>,
    }

    impl Fetch for FlakyFetcher {
        fn fetch(&self, _url: &str, dest: &Path) -> Result<(), FetchError> {
            let call = self.calls.get() + 1;
            self.calls.set(call);
            if call <= self.failures {
                return Err(FetchError::Http(503));
            }
            fs::write(dest, self.body)?;
            Ok(())
        }
    }

    fn fast_policy(max_attempts: u32) -> RetryPolicy {
        RetryPolicy {
            max_attempts,
            delay: Duration::ZERO,
        }
    }

    fn spec_in(dir: &Path) -> AcquireSpec {
        AcquireSpec {
            url: "https://example.com/payload.bin".to_string(),
            download_dir: dir.join("downloads"),
            final_name: "renamed.bin".to_string(),
        }
    }

    #[test]
    fn fetch_failing_r_times_stages_after_r_plus_one_attempts() {
        let tmp = tempfile::tempdir().unwrap();
        let spec = spec_in(tmp.path());
        let fetcher = FlakyFetcher {
            failures: 2,
            body: b"content",
            calls: Cell::new(0),
        };

        let staged = run(&spec, &fetcher, &fast_policy(10)).unwrap();

        assert_eq!(fetcher.calls.get(), 3);
        assert_eq!(staged, spec.download_dir.join("renamed.bin"));
        assert_eq!(fs::read(&staged).unwrap(), b"content");
        // The original-name file was moved, not copied.
        assert!(!spec.download_dir.join("payload.bin").exists());
    }

    #[test]
    fn exhausted_retries_leave_no_staged_file() {
        let tmp = tempfile::tempdir().unwrap();
        let spec = spec_in(tmp.path());
        let fetcher = FlakyFetcher {
            failures: u32::MAX,
            body: b"",
            calls: Cell::new(0),
        };

        let err = run(&spec, &fetcher, &fast_policy(4)).unwrap_err();
        match err {
            AcquireError::RetriesExhausted { attempts, .. } => assert_eq!(attempts, 4),
            other => panic!("expected RetriesExhausted, got {other}"),
        }
        assert_eq!(fetcher.calls.get(), 4);
        assert!(!spec.download_dir.join("renamed.bin").exists());
    }

    #[test]
    fn creates_missing_download_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let spec = spec_in(&tmp.path().join("deeply/nested"));
        let fetcher = FlakyFetcher {
            failures: 0,
            body: b"x",
            calls: Cell::new(0),
        };
        let staged = run(&spec, &fetcher, &fast_policy(1)).unwrap();
        assert!(staged.exists());
    }

    #[test]
    fn overwrites_existing_staged_file() {
        let tmp = tempfile::tempdir().unwrap();
        let spec = spec_in(tmp.path());
        fs::create_dir_all(&spec.download_dir).unwrap();
        fs::write(spec.download_dir.join("renamed.bin"), b"old").unwrap();

        let fetcher = FlakyFetcher {
            failures: 0,
            body: b"new",
            calls: Cell::new(0),
        };
        let staged = run(&spec, &fetcher, &fast_policy(1)).unwrap();
        assert_eq!(fs::read(&staged).unwrap(), b"new");
    }
}
