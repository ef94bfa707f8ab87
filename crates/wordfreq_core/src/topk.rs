use crate::FrequencyMap;

/// Select the `k` highest-count tokens, descending by count.
///
/// Equal counts are ordered by ascending token, so the result is stable for a
/// given frequency map. Returns fewer than `k` pairs when the map holds fewer
/// distinct tokens.
pub fn top_k(freqs: &FrequencyMap, k: usize) -> Vec<(String, u64)> {
    let mut entries: Vec<(String, u64)> = freqs
        .iter()
        .map(|(token, count)| (token.clone(), *count))
        .collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries.truncate(k);
    entries
}
