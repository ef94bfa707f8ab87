use std::collections::HashMap;

/// Token to occurrence count. Partial (per chunk) and aggregate maps share
/// this shape; merging is addition over matching keys.
pub type FrequencyMap = HashMap<String, u64>;

/// Map step: count occurrences of each distinct token within one chunk.
///
/// Pure function over its input slice; safe to run on any number of chunks
/// concurrently.
pub fn count_tokens(chunk: &[String]) -> FrequencyMap {
    let mut counts = FrequencyMap::new();
    for token in chunk {
        *counts.entry(token.clone()).or_insert(0) += 1;
    }
    counts
}

/// Reduce step: sum partial frequency maps into one aggregate.
///
/// Associative and commutative: the order and grouping of partials does not
/// affect the result. Tokens absent from a partial contribute 0.
pub fn merge_counts<I>(partials: I) -> FrequencyMap
where
    I: IntoIterator<Item = FrequencyMap>,
{
    let mut total = FrequencyMap::new();
    for partial in partials {
        for (token, count) in partial {
            *total.entry(token).or_insert(0) += count;
        }
    }
    total
}
