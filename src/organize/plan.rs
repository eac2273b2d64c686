//! Pure copy planning: bucket names and collision-free destinations.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Bucket that collects files with no usable extension.
pub const NO_EXTENSION_BUCKET: &str = "no_extension";

/// A single planned copy: where a file comes from and where it lands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyJob {
    pub source: PathBuf,
    pub bucket: String,
    pub dest: PathBuf,
}

/// Bucket name for a file: its final extension with the dot stripped,
/// lowercased. Extensionless files, including dotfiles, fall into
/// [`NO_EXTENSION_BUCKET`].
pub fn bucket_for(path: &Path) -> String {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if !ext.is_empty() => ext.to_lowercase(),
        _ => NO_EXTENSION_BUCKET.to_string(),
    }
}

/// Plan a destination for each discovered file. `files` must already
/// be sorted; duplicate destination names get `_1`, `_2`, ... suffixes
/// in that order, so the same file set always yields the same layout
/// and re-running over an existing output overwrites it in place.
pub fn build_plan(files: &[PathBuf], output: &Path) -> Vec<CopyJob> {
    let mut taken = HashSet::new();
    let mut jobs = Vec::with_capacity(files.len());

    for source in files {
        let Some(name) = source.file_name().and_then(|n| n.to_str()) else {
            warn!("skipping file with non-UTF-8 name: {}", source.display());
            continue;
        };

        let bucket = bucket_for(source);
        let mut dest = output.join(&bucket).join(name);
        let mut serial = 1;
        while !taken.insert(dest.clone()) {
            dest = output.join(&bucket).join(numbered_name(name, serial));
            serial += 1;
        }

        jobs.push(CopyJob {
            source: source.clone(),
            bucket,
            dest,
        });
    }

    jobs
}

/// `report.txt` -> `report_1.txt`; names without an extension get the
/// suffix appended directly.
fn numbered_name(name: &str, serial: u32) -> String {
    let path = Path::new(name);
    match (
        path.file_stem().and_then(|s| s.to_str()),
        path.extension().and_then(|e| e.to_str()),
    ) {
        (Some(stem), Some(ext)) => format!("{stem}_{serial}.{ext}"),
        _ => format!("{name}_{serial}"),
    }
}
