//! Defaults and per-command configuration types.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// URL fetched when neither `--url` nor `GLEANER_URL` is given.
pub const DEFAULT_URL: &str = "https://www.britannica.com/science/psychology";

/// Number of chunks the fetched document is split into.
pub const DEFAULT_CHUNKS: usize = 4;

/// Number of ranked words handed to the renderer.
pub const DEFAULT_TOP: usize = 10;

/// Default cap on concurrently running tasks.
pub const DEFAULT_MAX_PARALLEL: usize = 10;

/// Configuration for the word-frequency pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordfreqConfig {
    /// URL the document is fetched from
    pub url: String,
    /// Number of chunks the document is partitioned into
    pub chunks: usize,
    /// Number of top-ranked words to keep
    pub top: usize,
    /// Maximum number of chunks mapped concurrently
    pub max_parallel: usize,
}

impl Default for WordfreqConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            chunks: DEFAULT_CHUNKS,
            top: DEFAULT_TOP,
            max_parallel: DEFAULT_MAX_PARALLEL,
        }
    }
}

/// Configuration for one organize run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizeConfig {
    /// Folder whose files are discovered recursively
    pub source: PathBuf,
    /// Folder that gains one subdirectory per file extension
    pub output: PathBuf,
    /// Maximum number of copies in flight at once
    pub max_parallel: usize,
    /// Collect copy failures into the summary instead of failing the run
    pub continue_on_error: bool,
}
