//! Unpack stage: extract `.zip` archives, pass everything else through.

use std::fs::File;
use std::path::Path;
use thiserror::Error;

/// Archive suffix; matched case-sensitively, single extension form only.
const ZIP_SUFFIX: &str = ".zip";

/// Result of the unpack stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnpackOutcome {
    /// The file was a zip archive; `entries` entries were extracted.
    Extracted { entries: usize },
    /// Not an archive; the file is forwarded untouched.
    NotArchive,
}

#[derive(Debug, Error)]
pub enum UnpackError {
    #[error("open archive: {0}")]
    Open(#[from] std::io::Error),
    #[error("extract: {0}")]
    Zip(#[from] zip::result::ZipError),
}

/// True when the file name ends in `.zip`.
///
/// The name alone decides; content is never inspected, so a mislabeled
/// non-archive with this suffix will fail extraction rather than fall
/// through to search.
pub fn is_zip_archive(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.ends_with(ZIP_SUFFIX))
}

/// Extracts `path` into `target_dir` if it looks like a zip archive,
/// overwriting existing entries without confirmation.
///
/// On `Err` the caller must not proceed to the search stage; the failure is
/// reported but does not set a process exit code.
pub fn unpack(path: &Path, target_dir: &Path) -> Result<UnpackOutcome, UnpackError> {
    if !is_zip_archive(path) {
        tracing::info!("{} is not a zip archive, skipping extraction", path.display());
        return Ok(UnpackOutcome::NotArchive);
    }

    tracing::info!("extracting {} into {}", path.display(), target_dir.display());
    let file = File::open(path)?;
    let mut archive = zip::ZipArchive::new(file)?;
    let entries = archive.len();
    archive.extract(target_dir)?;
    tracing::info!("extracted {} entries", entries);
    Ok(UnpackOutcome::Extracted { entries })
}
