//! Top-N selection over the merged counts.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One row of the final ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub word: String,
    pub count: u64,
}

/// Sort merged counts by count descending and keep the first `top_n`
/// entries. Equal counts are ordered by word ascending, so the ranking
/// is the same on every run. A map with fewer than `top_n` entries
/// returns them all.
pub fn rank(totals: HashMap<String, u64>, top_n: usize) -> Vec<RankedEntry> {
    let mut entries: Vec<RankedEntry> = totals
        .into_iter()
        .map(|(word, count)| RankedEntry { word, count })
        .collect();

    entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
    entries.truncate(top_n);
    entries
}
