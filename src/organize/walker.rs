//! Recursive file discovery.

use crate::error::Result;
use std::path::{Path, PathBuf};
use tracing::trace;
use walkdir::WalkDir;

/// Collect every regular file under `source`, sorted by path so
/// downstream planning is deterministic. Unreadable entries surface
/// as errors rather than being skipped.
pub fn discover_files(source: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(source) {
        let entry = entry?;
        if entry.file_type().is_file() {
            trace!("found {}", entry.path().display());
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}
