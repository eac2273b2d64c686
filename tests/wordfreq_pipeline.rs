//! Pipeline properties for the word-frequency counter.
//!
//! Everything here runs from in-memory text; fetching is exercised
//! only through its URL validation at the CLI boundary.

use gleaner::config::WordfreqConfig;
use gleaner::wordfreq::{self, mapper, ranker::RankedEntry};

const SAMPLE: &str = "Psychology is the study of mind and behavior. \
    The discipline embraces all aspects of the human experience, from \
    the functions of the brain to the actions of nations, from child \
    development to care for the aged. Psychologists study mental \
    processes and behavior, and the discipline touches every aspect \
    of modern life.";

fn entry(word: &str, count: u64) -> RankedEntry {
    RankedEntry {
        word: word.to_string(),
        count,
    }
}

#[tokio::test]
async fn test_chunked_counts_match_whole_text_counts() {
    let whole = mapper::count_words(SAMPLE);
    for chunks in [1, 2, 4, 8] {
        let chunked = wordfreq::count_text(SAMPLE, chunks, 4).await.unwrap();
        assert_eq!(chunked, whole, "chunks = {chunks}");
    }
}

#[tokio::test]
async fn test_ranking_matches_the_documented_contract() {
    // Merged counts: the=5, a=3, of=3, is=1; ties break by word.
    let text = "the the the the the a a a of of of is";
    let config = WordfreqConfig {
        chunks: 3,
        top: 2,
        ..Default::default()
    };

    let ranked = wordfreq::rank_text(text, &config).await.unwrap();
    assert_eq!(ranked, vec![entry("the", 5), entry("a", 3)]);
}

#[tokio::test]
async fn test_more_top_than_words_returns_all() {
    let config = WordfreqConfig {
        top: 10,
        ..Default::default()
    };

    let ranked = wordfreq::rank_text("one two two", &config).await.unwrap();
    assert_eq!(ranked, vec![entry("two", 2), entry("one", 1)]);
}

#[tokio::test]
async fn test_empty_document_ranks_nothing() {
    let config = WordfreqConfig::default();
    let ranked = wordfreq::rank_text("", &config).await.unwrap();
    assert!(ranked.is_empty());
}

#[tokio::test]
async fn test_concurrency_limit_of_one_gives_the_same_totals() {
    let bounded = wordfreq::count_text(SAMPLE, 4, 1).await.unwrap();
    let wide = wordfreq::count_text(SAMPLE, 4, 8).await.unwrap();
    assert_eq!(bounded, wide);
}
