//! Integration test: full acquire → unpack → search chain with an
//! in-process fetcher serving a zip payload, no network required.

use osift_core::acquire::{AcquireError, AcquireSpec};
use osift_core::fetch::{Fetch, FetchError};
use osift_core::pipeline::{self, PipelineOutcome};
use osift_core::retry::RetryPolicy;
use osift_core::search::{parse_keywords, KeywordOutcome};
use osift_core::unpack::UnpackOutcome;
use std::cell::Cell;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::time::Duration;
use tempfile::tempdir;

/// Serves a fixed byte payload, failing a scripted number of attempts first.
struct PayloadFetcher {
    payload: Vec<u8>,
    failures: u32,
    calls: Cell<u32>,
}

impl Fetch for PayloadFetcher {
    fn fetch(&self, _url: &str, dest: &Path) -> Result<(), FetchError> {
        let call = self.calls.get() + 1;
        self.calls.set(call);
        if call <= self.failures {
            return Err(FetchError::Http(502));
        }
        fs::write(dest, &self.payload)?;
        Ok(())
    }
}

fn zip_payload(files: &[(&str, &str)]) -> Vec<u8> {
    let mut cursor = std::io::Cursor::new(Vec::new());
    {
        let mut w = zip::ZipWriter::new(&mut cursor);
        let opts = zip::write::SimpleFileOptions::default();
        for (name, body) in files {
            w.start_file(*name, opts).unwrap();
            w.write_all(body.as_bytes()).unwrap();
        }
        w.finish().unwrap();
    }
    cursor.into_inner()
}

fn fast_policy(max_attempts: u32) -> RetryPolicy {
    RetryPolicy {
        max_attempts,
        delay: Duration::ZERO,
    }
}

#[test]
fn full_pipeline_stages_extracts_and_finds_keyword() {
    let tmp = tempdir().unwrap();
    let download_dir = tmp.path().join("drops");
    let spec = AcquireSpec {
        url: "https://example.com/leaks/dump.zip".to_string(),
        download_dir: download_dir.clone(),
        final_name: "evidence.zip".to_string(),
    };
    let fetcher = PayloadFetcher {
        payload: zip_payload(&[
            ("report.txt", "the alpha keyword is right here\n"),
            ("misc/readme.md", "nothing of note\n"),
        ]),
        failures: 2,
        calls: Cell::new(0),
    };

    let outcome = pipeline::run_full(
        &spec,
        &parse_keywords("alpha,beta"),
        &fetcher,
        &fast_policy(10),
    )
    .expect("pipeline should complete");

    // Two failures then success: exactly three fetch attempts.
    assert_eq!(fetcher.calls.get(), 3);

    let report = match outcome {
        PipelineOutcome::Completed(r) => r,
        other => panic!("expected Completed, got {other:?}"),
    };

    // Staged under the user-chosen name; the remote name is gone.
    let staged = report.staged.as_deref().unwrap();
    assert_eq!(staged, download_dir.join("evidence.zip"));
    assert!(staged.exists());
    assert!(!download_dir.join("dump.zip").exists());

    // Archive contents extracted next to it.
    assert_eq!(report.unpacked, Some(UnpackOutcome::Extracted { entries: 2 }));
    assert!(download_dir.join("report.txt").exists());
    assert!(download_dir.join("misc/readme.md").exists());

    // One result file per keyword, in input order.
    assert_eq!(report.results.len(), 2);
    assert_eq!(report.results[0].1, KeywordOutcome::Found { matches: 1 });
    assert_eq!(report.results[1].1, KeywordOutcome::NotFound);

    let alpha = fs::read_to_string(download_dir.join("search_results_alpha.txt")).unwrap();
    assert!(alpha.contains("the alpha keyword is right here"));
    let beta = fs::read_to_string(download_dir.join("search_results_beta.txt")).unwrap();
    assert!(beta.is_empty());
}

#[test]
fn exhausted_retry_budget_is_fatal_and_stages_nothing() {
    let tmp = tempdir().unwrap();
    let download_dir = tmp.path().join("drops");
    let spec = AcquireSpec {
        url: "https://example.com/unreachable.zip".to_string(),
        download_dir: download_dir.clone(),
        final_name: "never.zip".to_string(),
    };
    let fetcher = PayloadFetcher {
        payload: Vec::new(),
        failures: u32::MAX,
        calls: Cell::new(0),
    };

    let err = pipeline::run_full(&spec, &parse_keywords("alpha"), &fetcher, &fast_policy(5))
        .expect_err("retry budget must exhaust");

    assert!(matches!(
        err,
        AcquireError::RetriesExhausted { attempts: 5, .. }
    ));
    assert_eq!(fetcher.calls.get(), 5);
    assert!(!download_dir.join("never.zip").exists());
    assert!(!download_dir.join("search_results_alpha.txt").exists());
}

#[test]
fn non_archive_download_goes_straight_to_search() {
    let tmp = tempdir().unwrap();
    let download_dir = tmp.path().join("drops");
    let spec = AcquireSpec {
        url: "https://example.com/notes.txt".to_string(),
        download_dir: download_dir.clone(),
        final_name: "notes.txt".to_string(),
    };
    let fetcher = PayloadFetcher {
        payload: b"alpha seen here\n".to_vec(),
        failures: 0,
        calls: Cell::new(0),
    };

    let outcome =
        pipeline::run_full(&spec, &parse_keywords("alpha"), &fetcher, &fast_policy(1)).unwrap();

    let report = match outcome {
        PipelineOutcome::Completed(r) => r,
        other => panic!("expected Completed, got {other:?}"),
    };
    assert_eq!(report.unpacked, Some(UnpackOutcome::NotArchive));
    assert_eq!(report.results[0].1, KeywordOutcome::Found { matches: 1 });
}
