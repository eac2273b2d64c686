//! Per-chunk word counting.

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+").expect("Invalid regex pattern"));

/// Count word-like tokens in one chunk: maximal runs of
/// alphanumeric-or-underscore characters, case-folded to lowercase.
/// Pure function, safe to run on any number of chunks at once.
pub fn count_words(chunk: &str) -> HashMap<String, u64> {
    let lowered = chunk.to_lowercase();
    let mut counts = HashMap::new();
    for token in WORD_PATTERN.find_iter(&lowered) {
        *counts.entry(token.as_str().to_string()).or_insert(0) += 1;
    }
    counts
}
