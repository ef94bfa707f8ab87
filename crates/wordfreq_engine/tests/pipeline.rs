use std::sync::Once;

use pretty_assertions::assert_eq;
use wordfreq_core::{count_tokens, FrequencyMap};
use wordfreq_engine::{count_frequencies, default_chunk_count, map_reduce_with, PipelineError};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(pipeline_logging::initialize_for_tests);
}

fn tokens(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn freq(pairs: &[(&str, u64)]) -> FrequencyMap {
    pairs.iter().map(|(t, c)| (t.to_string(), *c)).collect()
}

#[test]
fn aggregates_reference_scenario_across_two_chunks() {
    init_logging();
    let seq = tokens(&["the", "quick", "the", "fox", "the", "quick"]);
    let aggregate = count_frequencies(&seq, Some(2)).unwrap();
    assert_eq!(aggregate, freq(&[("the", 3), ("quick", 2), ("fox", 1)]));
}

#[test]
fn aggregate_is_independent_of_chunk_count() {
    init_logging();
    let seq = tokens(&["a", "b", "a", "c", "a", "b", "d", "a", "b", "c", "a", "d"]);
    let direct = count_tokens(&seq);

    // 12 tokens divide evenly by each of these, so nothing is truncated.
    for chunk_count in [1, 2, 3, 4, 6, 12] {
        let aggregate = count_frequencies(&seq, Some(chunk_count)).unwrap();
        assert_eq!(aggregate, direct, "chunk_count={chunk_count}");
    }
}

#[test]
fn default_chunk_count_is_at_least_one() {
    init_logging();
    assert!(default_chunk_count() >= 1);

    let seq = tokens(&["one", "two", "one"]);
    // Whatever parallelism the host reports, the call must succeed.
    let aggregate = count_frequencies(&seq, None).unwrap();
    let total: u64 = aggregate.values().sum();
    assert!(total <= 3);
}

#[test]
fn empty_document_counts_to_empty_aggregate() {
    init_logging();
    let aggregate = count_frequencies(&[], Some(4)).unwrap();
    assert_eq!(aggregate, FrequencyMap::new());
}

#[test]
fn zero_chunk_count_fails_before_dispatch() {
    init_logging();
    let seq = tokens(&["a", "b"]);
    assert_eq!(
        count_frequencies(&seq, Some(0)),
        Err(PipelineError::InvalidChunkCount)
    );
}

#[test]
fn panicking_worker_fails_the_whole_run() {
    init_logging();
    let seq = tokens(&["a", "b", "c", "d"]);
    let result = map_reduce_with(&seq, Some(2), |chunk: &[String]| {
        if chunk.contains(&"c".to_string()) {
            panic!("bad chunk");
        }
        count_tokens(chunk)
    });

    assert_eq!(
        result,
        Err(PipelineError::WorkerFailed {
            index: 1,
            message: "bad chunk".to_string(),
        })
    );
}
