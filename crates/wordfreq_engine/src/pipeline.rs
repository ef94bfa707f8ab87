use std::thread;

use wordfreq_core::{chunk_tokens, count_tokens, ChunkError, FrequencyMap};

use crate::PipelineError;

/// Count token frequencies with a single fan-out/fan-in map-reduce pass.
///
/// The token sequence is split into `chunk_count` contiguous chunks (default:
/// host parallelism), each chunk is counted on its own thread, and the partial
/// maps are merged into one aggregate. The result is independent of worker
/// completion order.
pub fn count_frequencies(
    tokens: &[String],
    chunk_count: Option<usize>,
) -> Result<FrequencyMap, PipelineError> {
    map_reduce_with(tokens, chunk_count, count_tokens)
}

/// Map-reduce over `tokens` with an injectable map worker.
///
/// The worker must be pure with respect to shared state; each invocation sees
/// exactly one chunk. All workers are joined before any failure is reported,
/// and a panicking worker fails the whole call with no partial aggregate.
pub fn map_reduce_with<F>(
    tokens: &[String],
    chunk_count: Option<usize>,
    worker: F,
) -> Result<FrequencyMap, PipelineError>
where
    F: Fn(&[String]) -> FrequencyMap + Copy + Send + Sync,
{
    let chunk_count = chunk_count.unwrap_or_else(default_chunk_count);
    let chunks = chunk_tokens(tokens, chunk_count).map_err(|err| match err {
        ChunkError::InvalidChunkCount => PipelineError::InvalidChunkCount,
    })?;
    log::debug!(
        "dispatching {} workers over {} tokens",
        chunks.len(),
        tokens.len()
    );

    let partials = thread::scope(|scope| {
        let handles: Vec<_> = chunks
            .iter()
            .map(|&chunk| scope.spawn(move || worker(chunk)))
            .collect();

        // Join every worker before reporting the first failure.
        let mut results = Vec::with_capacity(handles.len());
        for (index, handle) in handles.into_iter().enumerate() {
            results.push(handle.join().map_err(|payload| PipelineError::WorkerFailed {
                index,
                message: panic_message(payload.as_ref()),
            }));
        }
        results.into_iter().collect::<Result<Vec<_>, _>>()
    })?;

    let aggregate = wordfreq_core::merge_counts(partials);
    log::info!(
        "map-reduce complete: {} distinct tokens across {} chunks",
        aggregate.len(),
        chunk_count
    );
    Ok(aggregate)
}

/// Default chunk count: one chunk per available execution unit, minimum 1.
pub fn default_chunk_count() -> usize {
    thread::available_parallelism().map(|p| p.get()).unwrap_or(1)
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "worker panicked".to_string()
    }
}
