//! Recursive file listing for the search stage.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Collects every regular file under `dir`, depth-first, sorted within each
/// directory for deterministic scan order. Symlinks are not followed.
pub fn files_under(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    collect(dir, &mut files)?;
    Ok(files)
}

fn collect(dir: &Path, files: &mut Vec<PathBuf>) -> io::Result<()> {
    let mut entries: Vec<_> = fs::read_dir(dir)?.collect::<io::Result<_>>()?;
    entries.sort_by_key(|e| e.file_name());

    for entry in entries {
        let ft = entry.file_type()?;
        if ft.is_dir() {
            collect(&entry.path(), files)?;
        } else if ft.is_file() {
            files.push(entry.path());
        }
    }
    Ok(())
}
