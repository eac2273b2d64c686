//! Extension-keyed file organizing
//!
//! Discovers every file under a source tree, plans a destination for
//! each (one bucket directory per extension), creates the bucket
//! directories, then copies all files concurrently with a bounded
//! number in flight.

pub mod plan;
pub mod walker;

use crate::config::OrganizeConfig;
use crate::error::Error;
use anyhow::{anyhow, Context, Result};
use futures::future::join_all;
use indicatif::{ProgressBar, ProgressStyle};
use self::plan::CopyJob;
use std::collections::BTreeSet;
use std::path::Path;
use std::sync::Arc;
use tokio::fs;
use tokio::sync::Semaphore;
use tracing::{debug, info, warn};

/// Outcome of one organize run.
#[derive(Debug, Clone, Default)]
pub struct OrganizeSummary {
    pub discovered: usize,
    pub copied: usize,
    pub failed: usize,
    pub errors: Vec<String>,
}

/// Copy every file under the source folder into an extension-keyed
/// subdirectory of the output folder.
///
/// A missing source folder is reported and treated as a successful
/// empty run. Copy failures either fail the run or are collected into
/// the summary, depending on `continue_on_error`.
pub async fn run(config: &OrganizeConfig) -> Result<OrganizeSummary> {
    if !config.source.exists() {
        println!(
            "Source folder '{}' does not exist.",
            config.source.display()
        );
        warn!(
            "source folder {} missing, nothing to do",
            config.source.display()
        );
        return Ok(OrganizeSummary::default());
    }

    fs::create_dir_all(&config.output).await.with_context(|| {
        format!(
            "Failed to create output folder {}",
            config.output.display()
        )
    })?;

    let files = walker::discover_files(&config.source)?;
    info!(
        "discovered {} files under {}",
        files.len(),
        config.source.display()
    );
    if files.is_empty() {
        return Ok(OrganizeSummary::default());
    }

    let jobs = plan::build_plan(&files, &config.output);
    create_bucket_dirs(&config.output, &jobs).await?;

    let total = jobs.len();
    let progress_bar = create_progress_bar(total);
    progress_bar.set_message("Copying files");

    let semaphore = Arc::new(Semaphore::new(config.max_parallel.max(1)));
    let mut futures = Vec::with_capacity(total);
    for job in jobs {
        let semaphore = semaphore.clone();
        let progress = progress_bar.clone();
        futures.push(async move {
            let _permit = semaphore.acquire().await.unwrap();
            let result = copy_file(&job).await;
            progress.inc(1);
            result.map_err(|e| format!("{}: {}", job.source.display(), e))
        });
    }

    let results = join_all(futures).await;

    let mut summary = OrganizeSummary {
        discovered: total,
        ..Default::default()
    };
    for result in results {
        match result {
            Ok(()) => summary.copied += 1,
            Err(message) => {
                warn!("copy failed: {}", message);
                summary.failed += 1;
                summary.errors.push(message);
            }
        }
    }

    progress_bar.finish_with_message(format!(
        "Completed: {} copied, {} failed",
        summary.copied, summary.failed
    ));
    info!(
        "organize completed: {} total, {} copied, {} failed",
        total, summary.copied, summary.failed
    );

    if summary.failed > 0 && !config.continue_on_error {
        return Err(anyhow!(
            "{} of {} copies failed: {}",
            summary.failed,
            total,
            summary.errors.join(", ")
        ));
    }

    Ok(summary)
}

/// Every bucket directory must exist before any copy targeting it
/// starts. Already-existing directories are success.
async fn create_bucket_dirs(output: &Path, jobs: &[CopyJob]) -> Result<()> {
    let buckets: BTreeSet<&str> = jobs.iter().map(|job| job.bucket.as_str()).collect();
    for bucket in buckets {
        let dir = output.join(bucket);
        fs::create_dir_all(&dir)
            .await
            .with_context(|| format!("Failed to create bucket directory {}", dir.display()))?;
        debug!("ensured bucket directory {}", dir.display());
    }
    Ok(())
}

async fn copy_file(job: &CopyJob) -> crate::error::Result<()> {
    let content = fs::read(&job.source)
        .await
        .map_err(|e| Error::io(&job.source, e))?;
    fs::write(&job.dest, content)
        .await
        .map_err(|e| Error::io(&job.dest, e))?;
    debug!("copied {} -> {}", job.source.display(), job.dest.display());
    Ok(())
}

fn create_progress_bar(total: usize) -> ProgressBar {
    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}",
            )
            .unwrap()
            .progress_chars("█▓▒░ "),
    );
    pb
}
