//! Merging per-chunk counts into totals.

use std::collections::HashMap;

/// Sum per-chunk counts into one total map. Tokens absent from a
/// chunk contribute zero. Summation is commutative and associative,
/// so the result does not depend on the order the chunk maps arrive
/// in.
pub fn merge_counts<I>(mapped: I) -> HashMap<String, u64>
where
    I: IntoIterator<Item = HashMap<String, u64>>,
{
    let mut totals = HashMap::new();
    for counts in mapped {
        for (word, count) in counts {
            *totals.entry(word).or_insert(0) += count;
        }
    }
    totals
}
