//! Parallel word-frequency pipeline
//!
//! A linear map-reduce over one fetched document: fetch, partition
//! into chunks, count each chunk concurrently, merge the counts, rank
//! the totals, and hand them to a rendering surface.

pub mod chart;
pub mod chunker;
pub mod fetcher;
pub mod mapper;
pub mod ranker;
pub mod reducer;

use crate::config::WordfreqConfig;
use anyhow::{Context, Result};
use futures::future::join_all;
use self::chart::ChartRenderer;
use self::ranker::RankedEntry;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{debug, info};

/// Fetch the configured URL and render the top words.
pub async fn run(config: &WordfreqConfig, renderer: &dyn ChartRenderer) -> Result<()> {
    let url = url::Url::parse(&config.url)
        .map_err(|e| crate::error::Error::invalid_url(&config.url, e))?;

    let text = fetcher::fetch_text(&url).await?;
    let ranked = rank_text(&text, config).await?;

    renderer.render(
        &format!("Top {} words by frequency", ranked.len()),
        &ranked,
    )?;
    Ok(())
}

/// Chunk, map, reduce, and rank a document already in memory.
pub async fn rank_text(text: &str, config: &WordfreqConfig) -> Result<Vec<RankedEntry>> {
    let totals = count_text(text, config.chunks, config.max_parallel).await?;
    Ok(ranker::rank(totals, config.top))
}

/// Map chunks in parallel and reduce the per-chunk counts into totals.
///
/// Mapping is CPU-bound, so each chunk runs on a blocking task; the
/// number in flight is bounded by a semaphore owned by this call. The
/// reduce step starts only after every map task has finished.
pub async fn count_text(
    text: &str,
    chunks: usize,
    max_parallel: usize,
) -> Result<HashMap<String, u64>> {
    let pieces = chunker::chunk_text(text, chunks)?;
    if pieces.is_empty() {
        info!("document is empty, nothing to count");
        return Ok(HashMap::new());
    }

    info!(
        "mapping {} chunks with up to {} in parallel",
        pieces.len(),
        max_parallel
    );

    let semaphore = Arc::new(Semaphore::new(max_parallel.max(1)));
    let mut futures = Vec::with_capacity(pieces.len());
    for (index, piece) in pieces.into_iter().enumerate() {
        let semaphore = semaphore.clone();
        futures.push(async move {
            let _permit = semaphore.acquire().await.unwrap();
            debug!("mapping chunk {} ({} bytes)", index, piece.len());
            tokio::task::spawn_blocking(move || mapper::count_words(&piece)).await
        });
    }

    let results = join_all(futures).await;

    let mut mapped = Vec::with_capacity(results.len());
    for result in results {
        mapped.push(result.context("map task panicked")?);
    }

    Ok(reducer::merge_counts(mapped))
}
